mod rectangle;
mod simpson;
mod trapezoid;
mod variant;

pub use rectangle::{LeftRectangle, MidRectangle, RightRectangle};
pub use simpson::Simpson;
pub use trapezoid::Trapezoid;
pub use variant::QuadRule;

use crate::num::Func1d;

use super::EvalError;

// -----------------------------------------------------------------------------
// QuadratureRule
// -----------------------------------------------------------------------------
/// Composite quadrature rule on a uniform partition of `[a, b]`.
///
/// Implementations must not assume `a < b`. Evaluation stops at the first
/// sample where the integrand is undefined or the sum overflows.
pub trait QuadratureRule {
    /// Power of the step width in the truncation error term.
    fn order(&self) -> u32;

    /// Partition count actually used when `n` is requested.
    #[inline]
    fn effective_partitions(&self, n: usize) -> usize {
        n
    }

    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized;
}

// -----------------------------------------------------------------------------
// Accumulator
// -----------------------------------------------------------------------------
/// Weighted sum of samples.
///
/// `NaN` from the integrand is treated as undefined, infinities as overflow.
#[derive(Debug)]
pub(super) struct Accumulator {
    sum: f64,
    last: f64,
}

impl Accumulator {
    #[inline]
    pub(super) fn new(start: f64) -> Self {
        Accumulator {
            sum: 0.0,
            last: start,
        }
    }

    pub(super) fn add<F>(&mut self, f: &F, x: f64, weight: f64) -> Result<(), EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        self.last = x;
        let y = f.eval(&x).map_err(|_| EvalError::Undefined { x })?;
        if y.is_nan() {
            return Err(EvalError::Undefined { x });
        }
        if y.is_infinite() {
            return Err(EvalError::Overflow { x });
        }
        self.sum += weight * y;
        if !self.sum.is_finite() {
            return Err(EvalError::Overflow { x });
        }
        Ok(())
    }

    pub(super) fn finish(self, scale: f64) -> Result<f64, EvalError> {
        let res = self.sum * scale;
        if res.is_finite() {
            Ok(res)
        } else {
            Err(EvalError::Overflow { x: self.last })
        }
    }
}

/// Step width of `n` partitions.
///
/// A width beyond the range of `f64` is an overflow at `b`, not a sample failure.
#[inline]
pub(super) fn step(a: f64, b: f64, n: usize) -> Result<f64, EvalError> {
    if n == 0 {
        return Err(EvalError::NoPartition);
    }
    let h = (b - a) / n as f64;
    if !h.is_finite() {
        return Err(EvalError::Overflow { x: b });
    }
    Ok(h)
}
