//! Scalar property values.
//!
//! Property payloads are built from three scalar kinds: booleans, numbers,
//! and strings. Absence of a value is modeled by the absence of the `Value`
//! (`Option<Value>`), never by a null variant, so a constructed `Value`
//! always holds exactly one scalar.

use crate::error::{Error, Result};
use serde_json::Number;

/// A scalar payload inside a [`Property`](crate::Property).
///
/// Numbers keep the exact decimal representation of the source document
/// (`serde_json` with `arbitrary_precision`); routing them through a binary
/// float would silently corrupt large integers and exact decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Number(Number),
    String(String),
}

impl Value {
    /// Interpret a generic JSON node as a scalar value.
    ///
    /// A missing node, a null node, and composite nodes (arrays, objects)
    /// all yield `None`: absence is a legitimate outcome, distinct from a
    /// type mismatch on a value that is present.
    pub fn from_node(node: Option<&serde_json::Value>) -> Option<Value> {
        match node {
            Some(serde_json::Value::Bool(b)) => Some(Value::Boolean(*b)),
            Some(serde_json::Value::Number(n)) => Some(Value::Number(n.clone())),
            Some(serde_json::Value::String(s)) => Some(Value::String(s.clone())),
            _ => None,
        }
    }

    /// Convert back into a generic JSON node.
    pub fn to_node(&self) -> serde_json::Value {
        match self {
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// The boolean payload, or `TypeMismatch` when another variant is stored.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    /// The numeric payload, or `TypeMismatch` when another variant is stored.
    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(mismatch("number", other)),
        }
    }

    /// The string payload, or `TypeMismatch` when another variant is stored.
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(Number::from(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}
