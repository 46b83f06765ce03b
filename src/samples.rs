//! Scalar-or-sequence value carrier.
//!
//! Queries and results in this crate preserve shape: a scalar epoch yields a
//! scalar result, a sequence of N epochs yields a length-N sequence in the
//! same order. [`Samples`] makes that contract explicit and carries the
//! broadcast rules used by the correction formula: a scalar combines with any
//! shape, two sequences must have equal length.

use crate::errors::{GravityError, GravityResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One value or an ordered sequence of values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Samples {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Samples {
    /// Number of elements: 1 for a scalar, the vector length for a sequence.
    pub fn len(&self) -> usize {
        match self {
            Samples::Scalar(_) => 1,
            Samples::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the carried values in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        match self {
            Samples::Scalar(value) => std::slice::from_ref(value).iter().copied(),
            Samples::Sequence(values) => values.as_slice().iter().copied(),
        }
    }

    /// Applies `f` element-wise, preserving shape.
    pub fn map<F>(&self, f: F) -> Samples
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Samples::Scalar(value) => Samples::Scalar(f(*value)),
            Samples::Sequence(values) => {
                Samples::Sequence(values.iter().map(|&v| f(v)).collect())
            }
        }
    }

    /// Broadcast length of several operands.
    ///
    /// Scalars combine with anything; all non-scalar operands must share one
    /// length. Mismatched sequence lengths are a usage error.
    pub fn broadcast_len(operands: &[&Samples]) -> GravityResult<Option<usize>> {
        let mut sequence_len: Option<usize> = None;

        for operand in operands {
            if let Samples::Sequence(values) = operand {
                match sequence_len {
                    None => sequence_len = Some(values.len()),
                    Some(len) if len != values.len() => {
                        return Err(GravityError::invalid_argument(format!(
                            "Mismatched sequence lengths in broadcast: {} vs {}",
                            len,
                            values.len()
                        )));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(sequence_len)
    }

    /// Element at broadcast position `i`: scalars repeat, sequences index.
    fn broadcast_get(&self, i: usize) -> f64 {
        match self {
            Samples::Scalar(value) => *value,
            Samples::Sequence(values) => values[i],
        }
    }

    /// Combines four operands element-wise under broadcast rules.
    ///
    /// The result is scalar only when every operand is scalar.
    pub fn broadcast4<F>(
        a: &Samples,
        b: &Samples,
        c: &Samples,
        d: &Samples,
        f: F,
    ) -> GravityResult<Samples>
    where
        F: Fn(f64, f64, f64, f64) -> f64,
    {
        match Self::broadcast_len(&[a, b, c, d])? {
            None => Ok(Samples::Scalar(f(
                a.broadcast_get(0),
                b.broadcast_get(0),
                c.broadcast_get(0),
                d.broadcast_get(0),
            ))),
            Some(len) => {
                let values = (0..len)
                    .map(|i| {
                        f(
                            a.broadcast_get(i),
                            b.broadcast_get(i),
                            c.broadcast_get(i),
                            d.broadcast_get(i),
                        )
                    })
                    .collect();
                Ok(Samples::Sequence(values))
            }
        }
    }

    /// Returns the scalar value, or an error for a sequence.
    pub fn as_scalar(&self) -> GravityResult<f64> {
        match self {
            Samples::Scalar(value) => Ok(*value),
            Samples::Sequence(_) => Err(GravityError::invalid_argument(
                "Expected a scalar, got a sequence",
            )),
        }
    }

    /// Returns the values as a slice regardless of shape.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Samples::Scalar(value) => std::slice::from_ref(value),
            Samples::Sequence(values) => values.as_slice(),
        }
    }
}

impl From<f64> for Samples {
    fn from(value: f64) -> Self {
        Samples::Scalar(value)
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Samples::Sequence(values)
    }
}

impl From<&[f64]> for Samples {
    fn from(values: &[f64]) -> Self {
        Samples::Sequence(values.to_vec())
    }
}
