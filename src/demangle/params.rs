//! Rendering of encoded parameter types.
//!
//! Only a fixed vocabulary is recognized: object types, sequences, Nim
//! strings and a couple of unsigned C types. Anything else passes through.

use crate::utils::config::{
    OBJECT_TYPE_MARKER, OBJECT_TYPE_NAME_END, OBJECT_TYPE_NAME_OFFSET, OBJECT_TYPE_SUFFIX,
    PTR_MARKER, PTR_PREFIX, SEQUENCE_TYPE_MARKER, TYPE_REPLACEMENTS, VAR_MARKER, VAR_PREFIX,
};

/// Render a single comma-split parameter fragment
///
/// **Public** - used by the decoder for each parameter
///
/// # Example
/// ```ignore
/// assert_eq!(render_param("unsigned char*"), "ptr byte");
/// assert_eq!(render_param("tyObject_Foo__x9a"), "Foo");
/// ```
pub fn render_param(fragment: &str) -> String {
    let fragment = fragment.trim();
    let (prefix, fragment) = split_reference_kind(fragment);

    if fragment.starts_with(OBJECT_TYPE_MARKER) {
        return with_prefix(prefix, object_type_name(fragment));
    }

    if fragment.starts_with(SEQUENCE_TYPE_MARKER) {
        return with_prefix(prefix, "seq");
    }

    let plain = TYPE_REPLACEMENTS
        .iter()
        .fold(fragment.to_string(), |acc, &(from, to)| acc.replace(from, to));

    with_prefix(prefix, &plain)
}

/// Strip a trailing `&` / `*` and return the matching prefix
fn split_reference_kind(fragment: &str) -> (&'static str, &str) {
    if let Some(rest) = fragment.strip_suffix(VAR_MARKER) {
        (VAR_PREFIX, rest)
    } else if let Some(rest) = fragment.strip_suffix(PTR_MARKER) {
        (PTR_PREFIX, rest)
    } else {
        ("", fragment)
    }
}

/// Bare object type name from `tyObject_<Name>__<hash>`
///
/// The name starts after the ninth character. Without a `__` the whole
/// remainder is the name; a `__` that starts inside the `tyObject_` prefix
/// leaves nothing.
fn object_type_name(fragment: &str) -> &str {
    let start = fragment
        .char_indices()
        .nth(OBJECT_TYPE_NAME_OFFSET)
        .map_or(fragment.len(), |(idx, _)| idx);
    let end = fragment
        .find(OBJECT_TYPE_NAME_END)
        .unwrap_or(fragment.len());

    let name = if end < start { "" } else { &fragment[start..end] };

    name.strip_suffix(OBJECT_TYPE_SUFFIX).unwrap_or(name)
}

fn with_prefix(prefix: &str, body: &str) -> String {
    format!("{} {}", prefix, body).trim().to_string()
}
