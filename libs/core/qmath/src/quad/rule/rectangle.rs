use crate::num::Func1d;

use super::{step, Accumulator, EvalError, QuadratureRule};

// -----------------------------------------------------------------------------
// LeftRectangle
// RightRectangle
// MidRectangle
// -----------------------------------------------------------------------------
/// Rectangle rule sampling the left end of each subinterval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeftRectangle;

/// Rectangle rule sampling the right end of each subinterval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RightRectangle;

/// Rectangle rule sampling the center of each subinterval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidRectangle;

/// `h * Σ f(a + (i + shift) * h)` for `i = 0..n`.
fn rectangle<F>(f: &F, a: f64, b: f64, n: usize, shift: f64) -> Result<f64, EvalError>
where
    F: Func1d<f64, Output = f64> + ?Sized,
{
    let h = step(a, b, n)?;
    let mut acc = Accumulator::new(a);
    for i in 0..n {
        acc.add(f, a + (i as f64 + shift) * h, 1.0)?;
    }
    acc.finish(h)
}

impl QuadratureRule for LeftRectangle {
    #[inline]
    fn order(&self) -> u32 {
        2
    }

    #[inline]
    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        rectangle(f, a, b, n, 0.0)
    }
}

impl QuadratureRule for RightRectangle {
    #[inline]
    fn order(&self) -> u32 {
        2
    }

    #[inline]
    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        rectangle(f, a, b, n, 1.0)
    }
}

impl QuadratureRule for MidRectangle {
    #[inline]
    fn order(&self) -> u32 {
        2
    }

    #[inline]
    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        rectangle(f, a, b, n, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::testing::pure;
    use super::*;

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(10)]
    #[case(1000)]
    fn test_identity_on_unit_interval(#[case] n: usize) {
        let f = pure(|x| Ok(*x));
        let nf = n as f64;

        let left = LeftRectangle.approx(&f, 0.0, 1.0, n).unwrap();
        let right = RightRectangle.approx(&f, 0.0, 1.0, n).unwrap();
        let mid = MidRectangle.approx(&f, 0.0, 1.0, n).unwrap();

        // left = Σ i / n², right mirrors it around 1/2
        approx::assert_abs_diff_eq!(left, (nf - 1.0) / (2.0 * nf), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(right, (nf + 1.0) / (2.0 * nf), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(mid, 0.5, epsilon = 1e-12);
        assert!(left < 0.5);
        assert!(right > 0.5);
    }

    #[test]
    fn test_left_samples() {
        let f = pure(|x| if *x == 1.0 { Err(()) } else { Ok(1.0) });

        // the right end is never sampled by the left rule
        let left = LeftRectangle.approx(&f, 0.0, 1.0, 4);
        let right = RightRectangle.approx(&f, 0.0, 1.0, 4);

        assert_eq!(left, Ok(1.0));
        assert_eq!(right, Err(EvalError::Undefined { x: 1.0 }));
    }

    #[test]
    fn test_mid_avoids_grid_points() {
        let f = pure(|x| if *x == 0.0 { Err(()) } else { Ok(x.abs()) });

        let mid = MidRectangle.approx(&f, -1.0, 1.0, 4).unwrap();
        let left = LeftRectangle.approx(&f, -1.0, 1.0, 4);

        approx::assert_abs_diff_eq!(mid, 1.0, epsilon = 1e-12);
        assert_eq!(left, Err(EvalError::Undefined { x: 0.0 }));
    }

    #[test]
    fn test_reversed_interval() {
        let f = pure(|x| Ok(x * x));

        let fwd = MidRectangle.approx(&f, 0.0, 2.0, 16).unwrap();
        let bwd = MidRectangle.approx(&f, 2.0, 0.0, 16).unwrap();

        approx::assert_abs_diff_eq!(fwd, -bwd, epsilon = 1e-12);
    }

    #[test]
    fn test_no_partition() {
        let f = pure(|_| Ok(1.0));

        assert_eq!(
            LeftRectangle.approx(&f, 0.0, 1.0, 0),
            Err(EvalError::NoPartition)
        );
    }
}
