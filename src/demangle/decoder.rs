//! Decoding of Nim mangled symbols into readable signatures.
//!
//! A mangled symbol looks like `name_module<Z>file_<digits>(params)[attribs]`:
//! the trailing digits disambiguate overloads, the fragment after the last
//! underscore names the source module, and the parameter list carries the
//! C-level parameter types.

use super::params::render_param;
use crate::utils::config::MODULE_SEPARATOR;
use crate::utils::error::DecodeError;
use serde::{Deserialize, Serialize};

/// A decoded symbol
///
/// **Public** - value type of the symbol table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSymbol {
    /// Function name without module and disambiguator
    pub name: String,

    /// Originating module/file hint (e.g. `module.file`)
    pub module: String,

    /// Rendered parameter types, in declaration order
    pub params: Vec<String>,

    /// Bracketed attribute tag, empty when absent
    #[serde(default)]
    pub attribs: String,
}

impl DecodedSymbol {
    /// Readable replacement text: `name(p1, p2) [module] [attribs]`
    pub fn render(&self) -> String {
        format!(
            "{}({}) [{}] [{}]",
            self.name,
            self.params.join(", "),
            self.module,
            self.attribs
        )
    }
}

/// Decode a raw symbol that passed classification
///
/// **Public** - main entry point for decoding
///
/// # Errors
/// Every structural assumption is checked up front; a symbol that does not
/// fit is reported as unparseable instead of being sliced blindly:
/// * `DecodeError::MissingParameterList` - no `(`
/// * `DecodeError::UnterminatedParameterList` - no `)` after the `(`
/// * `DecodeError::MissingDisambiguator` - no trailing digits before `(`
/// * `DecodeError::MissingModuleSeparator` - no `_` before the digits
/// * `DecodeError::UnterminatedAttributes` - `[` without a `]`
pub fn decode(raw: &str) -> Result<DecodedSymbol, DecodeError> {
    let (name_part, param_text) = split_parameter_list(raw)?;
    let pure_name = strip_disambiguator(raw, name_part)?;
    let (name, module) = split_module_hint(raw, pure_name)?;
    let attribs = parse_attributes(raw)?;

    let params = param_text.split(',').map(render_param).collect();

    Ok(DecodedSymbol {
        name: name.to_string(),
        module,
        params,
        attribs: attribs.to_string(),
    })
}

/// Split at the first `(` into the name part and the parameter text
///
/// The parameter text ends at the first `)` after the `(`; no nesting.
fn split_parameter_list(raw: &str) -> Result<(&str, &str), DecodeError> {
    let (name_part, rest) = raw
        .split_once('(')
        .ok_or_else(|| DecodeError::MissingParameterList(raw.to_string()))?;

    let close = rest
        .find(')')
        .ok_or_else(|| DecodeError::UnterminatedParameterList(raw.to_string()))?;

    Ok((name_part, &rest[..close]))
}

/// Drop the trailing digits plus the separator in front of them
fn strip_disambiguator<'a>(raw: &str, name_part: &'a str) -> Result<&'a str, DecodeError> {
    let digits = name_part
        .chars()
        .rev()
        .take_while(|c| c.is_numeric())
        .count();

    if digits == 0 {
        return Err(DecodeError::MissingDisambiguator(raw.to_string()));
    }

    // nth(digits) is the separator right before the digit run
    name_part
        .char_indices()
        .rev()
        .nth(digits)
        .map(|(idx, _)| &name_part[..idx])
        .ok_or_else(|| DecodeError::MissingDisambiguator(raw.to_string()))
}

/// Split `name_fileinfo` at the last underscore
///
/// The file info drops its underscores and turns every `Z` into a dot.
fn split_module_hint<'a>(raw: &str, pure_name: &'a str) -> Result<(&'a str, String), DecodeError> {
    let split = pure_name
        .rfind('_')
        .ok_or_else(|| DecodeError::MissingModuleSeparator(raw.to_string()))?;

    let (name, file_info) = pure_name.split_at(split);
    let module = file_info
        .replace('_', "")
        .replace(MODULE_SEPARATOR, ".");

    Ok((name, module))
}

fn parse_attributes(raw: &str) -> Result<&str, DecodeError> {
    let Some((_, rest)) = raw.split_once('[') else {
        return Ok("");
    };

    rest.split_once(']')
        .map(|(attribs, _)| attribs)
        .ok_or_else(|| DecodeError::UnterminatedAttributes(raw.to_string()))
}
