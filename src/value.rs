//! Untyped input values and their classification.
//!
//! Notes on how values map to chunk kinds:
//! - `Bool` never shares a buffer with numbers; mixing the two yields a union.
//! - `Int`, `Real` and `Complex` share one buffer that widens along int64 → float64 → complex128.
//! - `Bytes` lands in a byte-string leaf; `List` recurses into a list builder.
//! - `Str`, `Tuple`, `Dict` and `Opaque` are accepted as input but rejected when appended.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex number with two `f64` parts (the `complex128` element type).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex64 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex64 {
    /// Construct from real and imaginary parts.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl From<i64> for Complex64 {
    fn from(v: i64) -> Self {
        Self::new(v as f64, 0.0)
    }
}

impl From<f64> for Complex64 {
    fn from(v: f64) -> Self {
        Self::new(v, 0.0)
    }
}

/// One untyped input value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer, stored as int64.
    Int(i64),
    /// Real number, stored as float64.
    Real(f64),
    /// Complex number, stored as complex128.
    Complex(Complex64),
    /// Raw byte string.
    Bytes(Vec<u8>),
    /// Iterable sequence of nested values.
    List(Vec<Value>),
    /// Text string. Not representable by the builder.
    Str(String),
    /// Fixed-arity tuple. Not representable by the builder.
    Tuple(Vec<Value>),
    /// Key/value mapping. Not representable by the builder.
    Dict(Vec<(Value, Value)>),
    /// A value that is neither iterable nor a recognized scalar, named by its type.
    Opaque(String),
}

/// Classification of a [`Value`], computed once before appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `Value::Null`.
    Null,
    /// `Value::Bool`.
    Boolean,
    /// `Value::Int`.
    Integer,
    /// `Value::Real`.
    Real,
    /// `Value::Complex`.
    Complex,
    /// `Value::Bytes`.
    ByteString,
    /// `Value::List`.
    NestedSequence,
    /// Anything else, carrying the name of the rejected kind.
    Unsupported(&'static str),
}

impl Value {
    /// Classify this value. Booleans are told apart from integers before any numeric test.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Int(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Complex(_) => ValueKind::Complex,
            Value::Bytes(_) => ValueKind::ByteString,
            Value::Str(_) => ValueKind::Unsupported("str"),
            Value::Dict(_) => ValueKind::Unsupported("dict"),
            Value::Tuple(_) => ValueKind::Unsupported("tuple"),
            Value::List(_) => ValueKind::NestedSequence,
            Value::Opaque(_) => ValueKind::Unsupported("opaque"),
        }
    }

    /// Short, stable name of the value's variant, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Complex(_) => "complex",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
            Value::Opaque(name) => name.as_str(),
        }
    }

    /// Convenience constructor for a byte string.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(b.into())
    }

    /// Whether this is `Value::Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<Complex64> for Value {
    fn from(v: Complex64) -> Self {
        Value::Complex(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
