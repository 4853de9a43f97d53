use crate::num::Func1d;

use super::{step, Accumulator, EvalError, QuadratureRule};

// -----------------------------------------------------------------------------
// Simpson
// -----------------------------------------------------------------------------
/// Composite Simpson's rule.
///
/// `(h / 3) * [f(a) + f(b) + 4 Σ_{odd i} f(a + i h) + 2 Σ_{even 0<i<n} f(a + i h)]`
///
/// The rule needs an even partition count. An odd `n` is silently rounded up to
/// `n + 1`; use [`QuadratureRule::effective_partitions`] to see the count
/// actually used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simpson;

impl QuadratureRule for Simpson {
    #[inline]
    fn order(&self) -> u32 {
        4
    }

    #[inline]
    fn effective_partitions(&self, n: usize) -> usize {
        if n % 2 == 1 {
            n + 1
        } else {
            n
        }
    }

    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        let n = self.effective_partitions(n);
        let h = step(a, b, n)?;
        let mut acc = Accumulator::new(a);
        acc.add(f, a, 1.0)?;
        acc.add(f, b, 1.0)?;
        for i in 1..n {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            acc.add(f, a + i as f64 * h, weight)?;
        }
        acc.finish(h / 3.0)
    }
}
