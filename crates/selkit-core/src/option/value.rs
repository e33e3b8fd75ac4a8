use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value carried by a selectable option.
///
/// Serialized untagged so option files read naturally:
/// `true`, `42` and `"red"` map to `Bool`, `Int` and `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl OptionValue {
    pub fn is_bool(&self) -> bool {
        matches!(self, OptionValue::Bool(_))
    }

    /// String an input element submits for this value.
    pub fn wire_string(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}
