//! Typed command parameters and validated argument values

use std::fmt;

use strum::Display;

/// The type a positional argument must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArgKind {
    /// Any token, including the empty token
    String,
    /// Signed decimal integer
    Int,
    /// Unsigned decimal integer
    UInt,
    /// Floating point number
    Float,
    /// `true` or `false`
    Bool,
}

impl ArgKind {
    /// Parse a raw token as this kind. `None` means the token is a bad value.
    pub fn parse(self, token: &str) -> Option<Value> {
        match self {
            Self::String => Some(Value::Str(token.to_string())),
            Self::Int => token.parse().ok().map(Value::Int),
            Self::UInt => token.parse().ok().map(Value::UInt),
            Self::Float => token.parse().ok().map(Value::Float),
            Self::Bool => token.parse().ok().map(Value::Bool),
        }
    }
}

/// A declared positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
}

impl Param {
    pub const fn required(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "<{}:{}>", self.name, self.kind)
        } else {
            write!(f, "[{}:{}]", self.name, self.kind)
        }
    }
}

/// A parsed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Validated arguments handed to a command effect, keyed by parameter name.
///
/// Only parameters that were actually supplied are present, so an optional
/// parameter that was left out reads as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Vec<(&'static str, Value)>,
}

impl Arguments {
    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.values.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn uint(&self, name: &str) -> Option<u64> {
        match self.get(name) {
            Some(Value::UInt(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float(x)) => Some(*x),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accepts_anything() {
        assert_eq!(ArgKind::String.parse(""), Some(Value::Str(String::new())));
        assert_eq!(
            ArgKind::String.parse("two words"),
            Some(Value::Str("two words".to_string()))
        );
    }

    #[test]
    fn test_int_parsing() {
        assert_eq!(ArgKind::Int.parse("-10"), Some(Value::Int(-10)));
        assert_eq!(ArgKind::Int.parse("+7"), Some(Value::Int(7)));
        assert_eq!(ArgKind::Int.parse("1234567"), Some(Value::Int(1_234_567)));
        assert_eq!(ArgKind::Int.parse("blah"), None);
        assert_eq!(ArgKind::Int.parse("1234BADNUMBEROHNO"), None);
        assert_eq!(ArgKind::Int.parse(""), None);
        assert_eq!(ArgKind::Int.parse(" 5"), None);
        assert_eq!(ArgKind::Int.parse("1.5"), None);
    }

    #[test]
    fn test_uint_rejects_negative() {
        assert_eq!(ArgKind::UInt.parse("42"), Some(Value::UInt(42)));
        assert_eq!(ArgKind::UInt.parse("-1"), None);
    }

    #[test]
    fn test_float_parsing() {
        assert_eq!(ArgKind::Float.parse("512.125"), Some(Value::Float(512.125)));
        assert_eq!(ArgKind::Float.parse("0.1.2.3."), None);
    }

    #[test]
    fn test_bool_parsing() {
        assert_eq!(ArgKind::Bool.parse("true"), Some(Value::Bool(true)));
        assert_eq!(ArgKind::Bool.parse("false"), Some(Value::Bool(false)));
        assert_eq!(ArgKind::Bool.parse("yes"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ArgKind::String.to_string(), "string");
        assert_eq!(ArgKind::Int.to_string(), "int");
        assert_eq!(ArgKind::UInt.to_string(), "uint");
        assert_eq!(ArgKind::Float.to_string(), "float");
        assert_eq!(ArgKind::Bool.to_string(), "bool");
    }

    #[test]
    fn test_param_display() {
        assert_eq!(
            Param::required("item", ArgKind::String).to_string(),
            "<item:string>"
        );
        assert_eq!(
            Param::optional("command", ArgKind::String).to_string(),
            "[command:string]"
        );
    }

    #[test]
    fn test_arguments_typed_access() {
        let mut args = Arguments::default();
        args.push("item", Value::Str("thing".to_string()));
        args.push("value", Value::Int(-10));

        assert_eq!(args.len(), 2);
        assert_eq!(args.str("item"), Some("thing"));
        assert_eq!(args.int("value"), Some(-10));
        assert_eq!(args.int("item"), None);
        assert_eq!(args.str("missing"), None);
        assert_eq!(args.get("value").map(ToString::to_string), Some("-10".to_string()));
    }
}
