//! Composite quadrature rules and the Runge-controlled refinement loop.
//!
//! The rules in [`rule`] approximate `∫ f(x) dx` over `[a, b]` on a uniform
//! partition. [`refine`] doubles the partition count until the Runge estimate
//! of two successive approximations drops below the requested tolerance.
mod error;
mod refine;
mod rule;
mod runge;

pub use error::{EvalError, RefineError};
pub use refine::{refine, Estimate, RefineOptions, Refinement};
pub use rule::{
    LeftRectangle, MidRectangle, QuadRule, QuadratureRule, RightRectangle, Simpson, Trapezoid,
};
pub use runge::runge_error;
