//! Detection of Nim mangled symbols.
//!
//! The Nim compiler appends `_<module>Z<file>...<digits>` to function names.
//! Cheap prefix/substring exclusions run first, then the numeric and
//! pattern checks confirm the mangling signature.

use crate::utils::config::{
    ADDRESS_PREFIX, ANONYMOUS_PREFIX, FOREIGN_STD_MARKER, INTERNAL_PREFIX,
    MANGLED_SIGNATURE_PATTERN, OBJECT_TYPE_MARKER,
};
use regex::Regex;
use std::sync::LazyLock;

static MANGLED_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MANGLED_SIGNATURE_PATTERN).expect("mangled signature pattern is valid")
});

/// Decide whether a raw symbol is a Nim mangled name
///
/// **Public** - gate in front of the decoder
///
/// Rules are evaluated in order and the first match wins:
/// 1. contains `tyObject` (object constructors/methods always qualify)
/// 2. starts with `0x` (raw address)
/// 3. starts with `_` (internal/runtime symbol)
/// 4. contains `std::` (foreign standard library)
/// 5. starts with `(` (anonymous construct)
/// 6. contains no numeric character
/// 7. does not contain the `_<letters>Z<word chars>` signature
pub fn is_nim_mangled(raw: &str) -> bool {
    if raw.contains(OBJECT_TYPE_MARKER) {
        return true;
    }

    if raw.starts_with(ADDRESS_PREFIX)
        || raw.starts_with(INTERNAL_PREFIX)
        || raw.contains(FOREIGN_STD_MARKER)
        || raw.starts_with(ANONYMOUS_PREFIX)
    {
        return false;
    }

    if !has_number(raw) {
        return false;
    }

    MANGLED_SIGNATURE.is_match(raw)
}

fn has_number(raw: &str) -> bool {
    raw.chars().any(char::is_numeric)
}
