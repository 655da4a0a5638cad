use std::fmt;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Bool,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Bool => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A field irregularity that was absorbed instead of failing the decode.
#[derive(Clone, Debug, PartialEq)]
pub struct SoftDefect {
    pub path: String,
    pub kind: DefectKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DefectKind {
    /// Value kept after converting it from another JSON type.
    Coerced { from: JsonType },
    /// Value dropped and replaced with the field's default.
    Mismatched {
        expected: &'static str,
        found: JsonType,
    },
    /// One element of a list failed, so the whole list was defaulted.
    InvalidElement { index: usize, reason: String },
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectKind::Coerced { from } => write!(f, "coerced from {}", from),
            DefectKind::Mismatched { expected, found } => {
                write!(f, "expected {}, found {}; using default", expected, found)
            }
            DefectKind::InvalidElement { index, reason } => {
                write!(f, "element {} rejected ({}); using empty list", index, reason)
            }
        }
    }
}

impl fmt::Display for SoftDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// A decoded value together with everything that had to be smoothed over to
/// produce it.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub defects: Vec<SoftDefect>,
}

impl<T> Decoded<T> {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
