// -----------------------------------------------------------------------------
// EvalError
// -----------------------------------------------------------------------------
/// Failure of a single quadrature rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The integrand is not defined at the sample point `x`.
    #[error("Integrand is undefined at x = {x}")]
    Undefined { x: f64 },
    /// A sample or the accumulated sum left the finite range.
    #[error("Overflow while sampling at x = {x}")]
    Overflow { x: f64 },
    #[error("Partition count must be at least 1")]
    NoPartition,
}

// -----------------------------------------------------------------------------
// RefineError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RefineError {
    #[error("Initial partition count must be at least 1")]
    NoInitialPartition,
    #[error("Integration bounds must be finite")]
    NonFiniteBound,
}
