//! Runtime values and their type tags.

use core::fmt;

/// The type of a value, inferred at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Number,
    Bool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number => write!(f, "number"),
            Type::Bool => write!(f, "boolean"),
        }
    }
}

/// A runtime value.
///
/// Numbers are IEEE-754 doubles, so division by zero yields an infinity
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

impl Value {
    pub fn ty(self) -> Type {
        match self {
            Value::Number(_) => Type::Number,
            Value::Bool(_) => Type::Bool,
        }
    }

    /// The numeric payload. The binder only ever produces number-typed
    /// operands for numeric operators, so any other variant here is a bug.
    pub fn as_number(self) -> f64 {
        match self {
            Value::Number(n) => n,
            Value::Bool(_) => unreachable!("boolean value where the binder guaranteed a number"),
        }
    }

    /// The boolean payload, under the same invariant as [`Value::as_number`].
    pub fn as_bool(self) -> bool {
        match self {
            Value::Bool(b) => b,
            Value::Number(_) => unreachable!("number value where the binder guaranteed a boolean"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
