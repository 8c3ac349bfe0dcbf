use derive_more::Display;

use crate::ast::LiteralNode;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum Value {
    #[display(fmt = "nil")]
    Nil,

    #[display(fmt = "{}", _0)]
    Bool(bool),

    // f64 display already drops a trailing ".0"
    #[display(fmt = "{}", _0)]
    Number(f64),

    #[display(fmt = "{}", _0)]
    Str(String),
}

impl Value {
    /// `nil` and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Equality across every value kind; values of different kinds are simply
    /// unequal.
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r,
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }
}

impl From<&LiteralNode> for Value {
    fn from(node: &LiteralNode) -> Self {
        match node {
            LiteralNode::Nil => Value::Nil,
            LiteralNode::Bool(b) => Value::Bool(*b),
            LiteralNode::Number(n) => Value::Number(*n),
            LiteralNode::Str(s) => Value::Str(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn equality() {
        assert!(Value::Nil.is_equal(&Value::Nil));
        assert!(!Value::Nil.is_equal(&Value::Bool(false)));
        assert!(!Value::Number(1.0).is_equal(&Value::Str("1".to_string())));
        assert!(Value::Str("a".to_string()).is_equal(&Value::Str("a".to_string())));
        assert!(!Value::Number(f64::NAN).is_equal(&Value::Number(f64::NAN)));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
    }
}
