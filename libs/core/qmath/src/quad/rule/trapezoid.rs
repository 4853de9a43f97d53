use crate::num::Func1d;

use super::{step, Accumulator, EvalError, QuadratureRule};

// -----------------------------------------------------------------------------
// Trapezoid
// -----------------------------------------------------------------------------
/// Composite trapezoidal rule.
///
/// `h * [(f(a) + f(b)) / 2 + Σ_{i=1}^{n-1} f(a + i * h)]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trapezoid;

impl QuadratureRule for Trapezoid {
    #[inline]
    fn order(&self) -> u32 {
        2
    }

    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        let h = step(a, b, n)?;
        let mut acc = Accumulator::new(a);
        acc.add(f, a, 0.5)?;
        acc.add(f, b, 0.5)?;
        for i in 1..n {
            acc.add(f, a + i as f64 * h, 1.0)?;
        }
        acc.finish(h)
    }
}
