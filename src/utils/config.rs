//! Constants for trace scanning and symbol rendering.

/// Markers that identify a function-context line in a callgrind trace.
/// `cfn=` names the called function, `fn=` the current one.
pub const FUNCTION_MARKERS: &[&str] = &["fn=", "cfn="];

/// Separator between the line tag and the symbol text
pub const TAG_SEPARATOR: char = ' ';

// Classifier exclusions (symbols that are plainly not Nim mangled names)
pub const OBJECT_TYPE_MARKER: &str = "tyObject";
pub const ADDRESS_PREFIX: &str = "0x";
pub const INTERNAL_PREFIX: &str = "_";
pub const FOREIGN_STD_MARKER: &str = "std::";
pub const ANONYMOUS_PREFIX: &str = "(";

/// Nim mangling appends `_<module>Z<file>...` to the function name
pub const MANGLED_SIGNATURE_PATTERN: &str = r"_[a-zA-Z]+Z\w+";

// Parameter type encodings
pub const SEQUENCE_TYPE_MARKER: &str = "tySequence";
pub const OBJECT_TYPE_NAME_OFFSET: usize = 9; // chars in "tyObject_"
pub const OBJECT_TYPE_NAME_END: &str = "__";
pub const OBJECT_TYPE_SUFFIX: &str = "colonObjectType";

/// Literal replacements applied to plain parameter types, in order
pub const TYPE_REPLACEMENTS: &[(&str, &str)] = &[
    ("NimStringV2", "string"),
    ("unsigned char", "byte"),
    ("unsigned int", "uint"),
];

pub const VAR_MARKER: char = '&';
pub const PTR_MARKER: char = '*';
pub const VAR_PREFIX: &str = "var";
pub const PTR_PREFIX: &str = "ptr";

/// Module separator in the file-info fragment, rendered as a path dot
pub const MODULE_SEPARATOR: char = 'Z';
