use qmath::num::Func1d;

use super::UndefinedSet;

// -----------------------------------------------------------------------------
// OutOfDomain
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{x} is out of the domain of the integrand")]
pub struct OutOfDomain {
    pub x: f64,
}

// -----------------------------------------------------------------------------
// Integrand
// -----------------------------------------------------------------------------
/// Real function which can be registered into a [`Catalog`](crate::catalog::Catalog).
///
/// Evaluation outside of the domain must return [`OutOfDomain`] instead of a
/// sentinel such as `NaN` or an infinity.
pub trait Integrand: Func1d<f64, Output = f64, Error = OutOfDomain> + Send + Sync {
    /// Human readable form, e.g. `ln(x)`.
    fn label(&self) -> String;

    /// Points where the function is known to be undefined.
    #[inline]
    fn undefined_set(&self) -> UndefinedSet {
        UndefinedSet::Empty
    }

    /// Closed-form integral over `[from, to]` if available.
    #[inline]
    fn reference_integral(&self, _from: f64, _to: f64) -> Option<f64> {
        None
    }
}
