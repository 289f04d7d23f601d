//! Homogeneously typed primitive storage with the numeric promotion ladder.

use crate::value::{Complex64, Value};

/// Element type of a [`ScalarBuffer`].
///
/// `Bool` sits off the ladder. `Int64 → Float64 → Complex128` widen in that order only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// `bool`.
    Bool,
    /// `i64`.
    Int64,
    /// `f64`.
    Float64,
    /// [`Complex64`].
    Complex128,
}

impl Dtype {
    /// Position on the numeric ladder, `None` for `Bool`.
    fn rank(self) -> Option<u8> {
        match self {
            Dtype::Bool => None,
            Dtype::Int64 => Some(0),
            Dtype::Float64 => Some(1),
            Dtype::Complex128 => Some(2),
        }
    }

    /// Whether values of `other` can be stored in a buffer of `self` after widening.
    #[must_use]
    pub fn compatible(self, other: Dtype) -> bool {
        self.rank().is_some() == other.rank().is_some()
    }

    /// The narrowest dtype holding both; only meaningful for compatible dtypes.
    fn widest(self, other: Dtype) -> Dtype {
        if other.rank() > self.rank() { other } else { self }
    }
}

/// A single primitive value on its way into a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar {
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex(Complex64),
}

impl Scalar {
    pub(crate) fn dtype(self) -> Dtype {
        match self {
            Scalar::Bool(_) => Dtype::Bool,
            Scalar::Int(_) => Dtype::Int64,
            Scalar::Real(_) => Dtype::Float64,
            Scalar::Complex(_) => Dtype::Complex128,
        }
    }
}

/// Typed storage behind a [`ScalarBuffer`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarData {
    /// Booleans.
    Bool(Vec<bool>),
    /// 64-bit integers.
    Int64(Vec<i64>),
    /// 64-bit floats.
    Float64(Vec<f64>),
    /// Pairs of 64-bit floats.
    Complex128(Vec<Complex64>),
}

/// Fixed-capacity buffer of one primitive dtype.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBuffer {
    data: ScalarData,
}

impl ScalarBuffer {
    pub(crate) fn new(dtype: Dtype, capacity: usize) -> Self {
        let data = match dtype {
            Dtype::Bool => ScalarData::Bool(Vec::with_capacity(capacity)),
            Dtype::Int64 => ScalarData::Int64(Vec::with_capacity(capacity)),
            Dtype::Float64 => ScalarData::Float64(Vec::with_capacity(capacity)),
            Dtype::Complex128 => ScalarData::Complex128(Vec::with_capacity(capacity)),
        };
        Self { data }
    }

    /// Current element dtype.
    #[must_use]
    pub fn dtype(&self) -> Dtype {
        match &self.data {
            ScalarData::Bool(_) => Dtype::Bool,
            ScalarData::Int64(_) => Dtype::Int64,
            ScalarData::Float64(_) => Dtype::Float64,
            ScalarData::Complex128(_) => Dtype::Complex128,
        }
    }

    /// Number of values written.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.data {
            ScalarData::Bool(v) => v.len(),
            ScalarData::Int64(v) => v.len(),
            ScalarData::Float64(v) => v.len(),
            ScalarData::Complex128(v) => v.len(),
        }
    }

    /// Whether no values have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the typed storage.
    #[must_use]
    pub fn data(&self) -> &ScalarData {
        &self.data
    }

    /// Values as booleans, if this is a bool buffer.
    #[must_use]
    pub fn as_bool(&self) -> Option<&[bool]> {
        match &self.data {
            ScalarData::Bool(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Values as integers, if this is an int64 buffer.
    #[must_use]
    pub fn as_int64(&self) -> Option<&[i64]> {
        match &self.data {
            ScalarData::Int64(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Values as floats, if this is a float64 buffer.
    #[must_use]
    pub fn as_float64(&self) -> Option<&[f64]> {
        match &self.data {
            ScalarData::Float64(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Values as complex numbers, if this is a complex128 buffer.
    #[must_use]
    pub fn as_complex128(&self) -> Option<&[Complex64]> {
        match &self.data {
            ScalarData::Complex128(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Read one value back.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        match &self.data {
            ScalarData::Bool(v) => v.get(i).map(|x| Value::Bool(*x)),
            ScalarData::Int64(v) => v.get(i).map(|x| Value::Int(*x)),
            ScalarData::Float64(v) => v.get(i).map(|x| Value::Real(*x)),
            ScalarData::Complex128(v) => v.get(i).map(|x| Value::Complex(*x)),
        }
    }

    /// Widen in place so that `dtype` values fit. Never narrows; a no-op for equal dtypes.
    pub(crate) fn widen(&mut self, dtype: Dtype) {
        let target = self.dtype().widest(dtype);
        if target == self.dtype() {
            return;
        }
        tracing::debug!(from = ?self.dtype(), to = ?target, len = self.len(), "widening scalar buffer");
        let data = std::mem::replace(&mut self.data, ScalarData::Bool(Vec::new()));
        self.data = match (data, target) {
            // i64 and f64 share size and alignment, so collect reuses the allocation.
            (ScalarData::Int64(v), Dtype::Float64) => {
                ScalarData::Float64(v.into_iter().map(|x| x as f64).collect())
            }
            (ScalarData::Int64(v), Dtype::Complex128) => {
                let mut out = Vec::with_capacity(v.capacity());
                out.extend(v.into_iter().map(Complex64::from));
                ScalarData::Complex128(out)
            }
            (ScalarData::Float64(v), Dtype::Complex128) => {
                let mut out = Vec::with_capacity(v.capacity());
                out.extend(v.into_iter().map(Complex64::from));
                ScalarData::Complex128(out)
            }
            (other, _) => other,
        };
    }

    /// Append one value. The buffer must already be wide enough (see [`Self::widen`]).
    pub(crate) fn push(&mut self, s: Scalar) {
        match (&mut self.data, s) {
            (ScalarData::Bool(v), Scalar::Bool(x)) => v.push(x),
            (ScalarData::Int64(v), Scalar::Int(x)) => v.push(x),
            (ScalarData::Float64(v), Scalar::Int(x)) => v.push(x as f64),
            (ScalarData::Float64(v), Scalar::Real(x)) => v.push(x),
            (ScalarData::Complex128(v), Scalar::Int(x)) => v.push(Complex64::from(x)),
            (ScalarData::Complex128(v), Scalar::Real(x)) => v.push(Complex64::from(x)),
            (ScalarData::Complex128(v), Scalar::Complex(x)) => v.push(x),
            (_, s) => unreachable!("{:?} pushed into an unwidened buffer", s.dtype()),
        }
    }
}
