use anyhow::{ensure, Context};
use qmath::quad::refine;

use crate::{
    catalog::IntegrandSrc,
    integrand::Integrand,
    request::{Request, Response, SingularityKind},
};

// -----------------------------------------------------------------------------
// Integrator
// -----------------------------------------------------------------------------
/// Serves [`Request`]s with integrands resolved from a source.
///
/// # Example
/// ```
/// use qintegral::{catalog::Catalog, Integrator, Request, Response};
///
/// let integrator = Integrator::new(Catalog::builtin());
/// let req: Request = serde_json::from_value(serde_json::json!({
///     "integrand": "ln",
///     "lower": 0.0,
///     "upper": 1.0,
///     "tolerance": 1e-4,
///     "rule": "trapezoid",
/// }))
/// .unwrap();
///
/// let res = integrator.calculate(&req).unwrap();
/// assert!(matches!(res, Response::Singularity { at, .. } if at == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Integrator<S> {
    src: S,
}

impl<S> Integrator<S> {
    #[inline]
    pub fn new(src: S) -> Self {
        Integrator { src }
    }

    #[inline]
    pub fn src(&self) -> &S {
        &self.src
    }
}

impl<S: IntegrandSrc> Integrator<S> {
    /// Integrate as requested.
    ///
    /// A missing integral is reported as [`Response::Singularity`] or
    /// [`Response::Divergent`], not as an error.
    ///
    /// # Errors
    /// - If the options are invalid.
    /// - If a bound is not finite.
    /// - If the integrand is not found in the source.
    pub fn calculate(&self, req: &Request) -> anyhow::Result<Response> {
        req.options.validate()?;
        ensure!(
            req.lower.is_finite() && req.upper.is_finite(),
            "Integration bounds must be finite: [{}, {}]",
            req.lower,
            req.upper
        );
        let f = self
            .src
            .get_integrand(&req.integrand)
            .with_context(|| format!("Resolving integrand '{}'", req.integrand))?;

        if let Some(res) = precheck(f.as_ref(), req.lower, req.upper) {
            log::info!("{} on [{}, {}]: {:?}", f.label(), req.lower, req.upper, res);
            return Ok(res);
        }

        let res: Response = refine(
            &req.rule,
            f.as_ref(),
            req.lower,
            req.upper,
            req.tolerance,
            &req.options,
        )
        .with_context(|| format!("Integrating {} with {}", f.label(), req.rule))?
        .into();
        log::info!(
            "{} on [{}, {}] with {}: {:?}",
            f.label(),
            req.lower,
            req.upper,
            req.rule,
            res
        );
        Ok(res)
    }
}

// -----------------------------------------------------------------------------
// precheck
// -----------------------------------------------------------------------------
/// Reject intervals touching the declared undefined set of `f` before any sampling.
///
/// Endpoints are checked first, so an interval ending exactly at a pole is
/// reported as [`SingularityKind::Boundary`].
pub fn precheck(f: &dyn Integrand, a: f64, b: f64) -> Option<Response> {
    let undefined = f.undefined_set();
    if let Some(at) = [a, b].into_iter().find(|x| undefined.contains(*x)) {
        return Some(Response::Singularity {
            at,
            kind: SingularityKind::Boundary,
        });
    }
    undefined
        .first_within(a, b)
        .map(|at| Response::Singularity {
            at,
            kind: SingularityKind::Interior,
        })
}
