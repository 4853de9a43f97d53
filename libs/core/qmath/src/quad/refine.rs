use std::cell::Cell;

use crate::num::{Func1d, Positive};

use super::{runge_error, EvalError, QuadratureRule, RefineError};

// -----------------------------------------------------------------------------
// RefineOptions
// -----------------------------------------------------------------------------
/// Options of [`refine`].
///
/// # Example
/// ```
/// use qmath::quad::RefineOptions;
///
/// let opts: RefineOptions = serde_json::from_str(r#"{"max_doublings": 8}"#).unwrap();
/// assert_eq!(opts.initial_partitions, 4);
/// assert_eq!(opts.max_doublings, 8);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(default)]
pub struct RefineOptions {
    /// Partition count of the first approximation.
    pub initial_partitions: usize,
    /// Maximum number of times the partition count is doubled.
    pub max_doublings: usize,
}

impl Default for RefineOptions {
    #[inline]
    fn default() -> Self {
        RefineOptions {
            initial_partitions: 4,
            max_doublings: 20,
        }
    }
}

impl RefineOptions {
    pub fn validate(&self) -> Result<(), RefineError> {
        if self.initial_partitions == 0 {
            return Err(RefineError::NoInitialPartition);
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Estimate
// Refinement
// -----------------------------------------------------------------------------
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct Estimate {
    /// Last approximation of the integral.
    pub value: f64,
    /// Partition count used for `value`.
    pub partitions: usize,
    /// Runge estimate between the last two approximations.
    /// `None` if the partition count was never doubled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_estimate: Option<f64>,
    /// Number of integrand evaluations spent, including failed ones.
    pub evaluations: usize,
}

/// Terminal state of [`refine`].
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Refinement {
    Converged(Estimate),
    /// Budget is consumed before the tolerance is met. Holds the best estimate.
    BudgetExhausted(Estimate),
    /// The integrand is undefined at a sample point.
    Singularity { at: f64 },
    /// Sampling overflowed.
    Divergent { at: f64 },
}

impl Refinement {
    /// Numerical estimate if there is any.
    #[inline]
    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            Refinement::Converged(est) | Refinement::BudgetExhausted(est) => Some(est),
            _ => None,
        }
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, Refinement::Converged(_))
    }
}

// -----------------------------------------------------------------------------
// refine
// -----------------------------------------------------------------------------
/// Integrate `f` over `[a, b]` doubling the partition count until the Runge
/// estimate falls below `tolerance`.
///
/// Numerical failures are reported as [`Refinement`] variants. Only invalid
/// options and non-finite bounds are errors.
///
/// # Example
/// ```
/// use qmath::{
///     num::{from_fn, Positive},
///     quad::{refine, QuadRule, RefineOptions},
/// };
///
/// let f = from_fn(|x: &f64| Ok::<_, ()>(x * x));
/// let tol = Positive::new(1e-4).unwrap();
///
/// let opts = RefineOptions::default();
/// let res = refine(&QuadRule::MidRectangle, &f, 0.0, 1.0, tol, &opts).unwrap();
/// let est = res.estimate().unwrap();
/// assert!(res.is_converged());
/// assert!((est.value - 1.0 / 3.0).abs() < 1e-4);
/// ```
pub fn refine<R, F>(
    rule: &R,
    f: &F,
    a: f64,
    b: f64,
    tolerance: Positive<f64>,
    options: &RefineOptions,
) -> Result<Refinement, RefineError>
where
    R: QuadratureRule + ?Sized,
    F: Func1d<f64, Output = f64> + ?Sized,
{
    options.validate()?;
    if !(a.is_finite() && b.is_finite()) {
        return Err(RefineError::NonFiniteBound);
    }
    let tol = tolerance.get();
    let f = Counted::new(f);
    let order = rule.order();

    let mut n = options.initial_partitions;
    let mut prev = match rule.approx(&f, a, b, n) {
        Ok(v) => v,
        Err(e) => return terminate(e, n),
    };
    log::debug!("n = {}: I = {}", rule.effective_partitions(n), prev);

    let mut err = None;
    for _ in 0..options.max_doublings {
        let Some(next) = n.checked_mul(2) else {
            log::warn!("Partition count cannot be doubled beyond {n}");
            break;
        };
        n = next;
        let curr = match rule.approx(&f, a, b, n) {
            Ok(v) => v,
            Err(e) => return terminate(e, n),
        };
        let e = runge_error(prev, curr, order);
        if !e.is_finite() {
            // both approximations are finite, so only their difference overflowed
            return terminate(EvalError::Overflow { x: b }, n);
        }
        err = Some(e);
        prev = curr;
        log::debug!(
            "n = {}: I = {}, error = {:e}",
            rule.effective_partitions(n),
            curr,
            e
        );

        if e < tol {
            return Ok(Refinement::Converged(Estimate {
                value: curr,
                partitions: rule.effective_partitions(n),
                error_estimate: err,
                evaluations: f.count(),
            }));
        }
    }

    log::warn!(
        "Tolerance {:e} is not met within {} doublings (error = {:?})",
        tol,
        options.max_doublings,
        err
    );
    Ok(Refinement::BudgetExhausted(Estimate {
        value: prev,
        partitions: rule.effective_partitions(n),
        error_estimate: err,
        evaluations: f.count(),
    }))
}

fn terminate(e: EvalError, n: usize) -> Result<Refinement, RefineError> {
    match e {
        EvalError::Undefined { x } => {
            log::warn!("Integrand is undefined at {x} (n = {n})");
            Ok(Refinement::Singularity { at: x })
        }
        EvalError::Overflow { x } => {
            log::warn!("Overflow at {x} (n = {n})");
            Ok(Refinement::Divergent { at: x })
        }
        EvalError::NoPartition => Err(RefineError::NoInitialPartition),
    }
}

// -----------------------------------------------------------------------------
// Counted
// -----------------------------------------------------------------------------
struct Counted<'a, F: ?Sized> {
    inner: &'a F,
    count: Cell<usize>,
}

impl<'a, F: ?Sized> Counted<'a, F> {
    #[inline]
    fn new(inner: &'a F) -> Self {
        Counted {
            inner,
            count: Cell::new(0),
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.count.get()
    }
}

impl<F> Func1d<f64> for Counted<'_, F>
where
    F: Func1d<f64, Output = f64> + ?Sized,
{
    type Output = f64;
    type Error = F::Error;

    #[inline]
    fn eval(&self, arg: &f64) -> Result<f64, Self::Error> {
        self.count.set(self.count.get() + 1);
        self.inner.eval(arg)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        num::from_fn,
        quad::{QuadRule, Simpson},
    };

    fn tol(v: f64) -> Positive<f64> {
        Positive::new(v).unwrap()
    }

    fn is_power_of_two_multiple_of_four(n: usize) -> bool {
        n % 4 == 0 && (n / 4).is_power_of_two()
    }

    #[test]
    fn test_square_mid_rectangle() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x * x));

        let res = refine(
            &QuadRule::MidRectangle,
            &f,
            0.0,
            1.0,
            tol(1e-4),
            &RefineOptions::default(),
        )
        .unwrap();

        let Refinement::Converged(est) = res else {
            panic!("unexpected: {res:?}");
        };
        approx::assert_abs_diff_eq!(est.value, 1.0 / 3.0, epsilon = 1e-4);
        assert!(est.error_estimate.unwrap() < 1e-4);
        assert!(est.partitions > 4);
        assert!(is_power_of_two_multiple_of_four(est.partitions));
    }

    #[rstest]
    #[case(QuadRule::LeftRectangle)]
    #[case(QuadRule::RightRectangle)]
    #[case(QuadRule::MidRectangle)]
    #[case(QuadRule::Trapezoid)]
    #[case(QuadRule::Simpson)]
    fn test_sin_converges(#[case] rule: QuadRule) {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x.sin()));

        let res = refine(
            &rule,
            &f,
            0.0,
            std::f64::consts::PI,
            tol(1e-6),
            &RefineOptions::default(),
        )
        .unwrap();

        let est = res.estimate().unwrap();
        assert!(res.is_converged(), "{rule}: {res:?}");
        approx::assert_abs_diff_eq!(est.value, 2.0, epsilon = 1e-4);
        assert!(is_power_of_two_multiple_of_four(est.partitions));
    }

    #[test]
    fn test_simpson_converges_at_first_doubling_for_cubic() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x * x * x));

        let res = refine(&Simpson, &f, 0.0, 1.0, tol(1e-12), &RefineOptions::default()).unwrap();

        let est = res.estimate().unwrap();
        assert!(res.is_converged());
        assert_eq!(est.partitions, 8);
        assert_eq!(est.evaluations, 5 + 9);
        approx::assert_abs_diff_eq!(est.value, 0.25, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_width_interval() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x.cos()));

        let res = refine(&QuadRule::Trapezoid, &f, 2.0, 2.0, tol(1e-9), &RefineOptions::default())
            .unwrap();

        assert_eq!(
            res,
            Refinement::Converged(Estimate {
                value: 0.0,
                partitions: 8,
                error_estimate: Some(0.0),
                evaluations: 5 + 9,
            })
        );
    }

    #[test]
    fn test_reversed_interval() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x * x));
        let opts = RefineOptions::default();

        let fwd = refine(&Simpson, &f, 0.0, 3.0, tol(1e-8), &opts).unwrap();
        let bwd = refine(&Simpson, &f, 3.0, 0.0, tol(1e-8), &opts).unwrap();

        approx::assert_abs_diff_eq!(fwd.estimate().unwrap().value, 9.0, epsilon = 1e-8);
        approx::assert_abs_diff_eq!(bwd.estimate().unwrap().value, -9.0, epsilon = 1e-8);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn test_budget_exhausted(#[case] max_doublings: usize) {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x.exp()));
        let opts = RefineOptions {
            initial_partitions: 4,
            max_doublings,
        };

        let res = refine(&QuadRule::LeftRectangle, &f, 0.0, 1.0, tol(1e-12), &opts).unwrap();

        let Refinement::BudgetExhausted(est) = res else {
            panic!("unexpected: {res:?}");
        };
        assert_eq!(est.partitions, 4 << max_doublings);
        match est.error_estimate {
            None => assert_eq!(max_doublings, 0),
            Some(err) => assert!(err >= 1e-12),
        }
        approx::assert_abs_diff_eq!(est.value, std::f64::consts::E - 1.0, epsilon = 0.5);
    }

    /// Returns the partition count itself, so it never converges.
    struct Echo;

    impl QuadratureRule for Echo {
        fn order(&self) -> u32 {
            2
        }

        fn approx<F>(&self, _: &F, _: f64, _: f64, n: usize) -> Result<f64, EvalError>
        where
            F: Func1d<f64, Output = f64> + ?Sized,
        {
            Ok(n as f64)
        }
    }

    #[test]
    fn test_budget_exhausted_by_partition_overflow() {
        let f = from_fn(|_: &f64| Ok::<_, ()>(1.0));
        let opts = RefineOptions {
            initial_partitions: usize::MAX / 4 + 1,
            max_doublings: 10,
        };

        let res = refine(&Echo, &f, 0.0, 1.0, tol(1.0), &opts).unwrap();

        let Refinement::BudgetExhausted(est) = res else {
            panic!("unexpected: {res:?}");
        };
        assert_eq!(est.partitions, (usize::MAX / 4 + 1) * 2);
        assert_eq!(est.value, ((usize::MAX / 4 + 1) * 2) as f64);
    }

    #[rstest]
    #[case(QuadRule::LeftRectangle, 0.0)]
    #[case(QuadRule::Trapezoid, 0.0)]
    #[case(QuadRule::Simpson, 0.0)]
    fn test_singularity_at_start(#[case] rule: QuadRule, #[case] at: f64) {
        let f = from_fn(|x: &f64| if *x <= 0.0 { Err(()) } else { Ok(x.ln()) });

        let res = refine(&rule, &f, 0.0, 1.0, tol(1e-4), &RefineOptions::default()).unwrap();

        assert_eq!(res, Refinement::Singularity { at });
        assert!(res.estimate().is_none());
    }

    #[test]
    fn test_singularity_during_refinement() {
        // a grid point of 8 partitions, but not of 4
        let f = from_fn(|x: &f64| if *x == 0.125 { Err(()) } else { Ok(1.0) });

        let res = refine(
            &QuadRule::Trapezoid,
            &f,
            0.0,
            1.0,
            tol(1e-300),
            &RefineOptions::default(),
        )
        .unwrap();

        assert_eq!(res, Refinement::Singularity { at: 0.125 });
    }

    #[test]
    fn test_exp_over_wide_range_is_divergent() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x.exp()));

        for rule in QuadRule::iter() {
            let res = refine(&rule, &f, 0.0, 1000.0, tol(1e-6), &RefineOptions::default()).unwrap();

            assert!(
                matches!(
                    res,
                    Refinement::Divergent { .. } | Refinement::BudgetExhausted(_)
                ),
                "{rule}: {res:?}"
            );
        }
    }

    #[test]
    fn test_no_initial_partition() {
        let f = from_fn(|_: &f64| Ok::<_, ()>(1.0));
        let opts = RefineOptions {
            initial_partitions: 0,
            max_doublings: 4,
        };

        let res = refine(&QuadRule::Trapezoid, &f, 0.0, 1.0, tol(1.0), &opts);

        assert_eq!(res, Err(RefineError::NoInitialPartition));
    }

    #[rstest]
    #[case(f64::NEG_INFINITY, 1.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NAN, 1.0)]
    fn test_non_finite_bound(#[case] a: f64, #[case] b: f64) {
        let f = from_fn(|_: &f64| Ok::<_, ()>(1.0));

        let res = refine(&QuadRule::Trapezoid, &f, a, b, tol(1.0), &RefineOptions::default());

        assert_eq!(res, Err(RefineError::NonFiniteBound));
    }

    #[test]
    fn test_huge_interval_is_divergent_for_all_rules() {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x * x));

        for rule in QuadRule::iter() {
            let res =
                refine(&rule, &f, -1e308, 1e308, tol(1e-6), &RefineOptions::default()).unwrap();

            assert_eq!(res, Refinement::Divergent { at: 1e308 }, "{rule}");
        }
    }

    #[test]
    fn test_estimate_difference_overflow_is_divergent() {
        // finite at n = 4, finite with the opposite sign at n = 8
        struct Flip;

        impl QuadratureRule for Flip {
            fn order(&self) -> u32 {
                1
            }

            fn approx<F>(&self, _: &F, _: f64, _: f64, n: usize) -> Result<f64, EvalError>
            where
                F: Func1d<f64, Output = f64> + ?Sized,
            {
                Ok(if n == 4 { f64::MAX } else { -f64::MAX })
            }
        }
        let f = from_fn(|_: &f64| Ok::<_, ()>(1.0));

        let res = refine(&Flip, &f, 0.0, 2.0, tol(1.0), &RefineOptions::default()).unwrap();

        assert_eq!(res, Refinement::Divergent { at: 2.0 });
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn test_budget_exhausted_serde(#[case] max_doublings: usize) {
        let f = from_fn(|x: &f64| Ok::<_, ()>(x.exp()));
        let opts = RefineOptions {
            initial_partitions: 4,
            max_doublings,
        };
        let res = refine(&QuadRule::LeftRectangle, &f, 0.0, 1.0, tol(1e-12), &opts).unwrap();

        let ser = serde_json::to_string(&res).unwrap();
        let de: Refinement = serde_json::from_str(&ser).unwrap();

        assert!(matches!(res, Refinement::BudgetExhausted(_)));
        assert!(!ser.contains("null"), "{ser}");
        assert_eq!(de, res);
        assert_eq!(
            res.estimate().unwrap().error_estimate.is_none(),
            max_doublings == 0
        );
    }

    #[test]
    fn test_serde() {
        let res = Refinement::Converged(Estimate {
            value: 0.5,
            partitions: 8,
            error_estimate: Some(1e-5),
            evaluations: 12,
        });

        let ser = serde_json::to_value(res).unwrap();

        assert_eq!(
            ser,
            serde_json::json!({
                "type": "converged",
                "value": 0.5,
                "partitions": 8,
                "error_estimate": 1e-5,
                "evaluations": 12,
            })
        );
        let singular = serde_json::to_value(Refinement::Singularity { at: 0.0 }).unwrap();
        assert_eq!(singular, serde_json::json!({"type": "singularity", "at": 0.0}));
    }
}
