/// Runge's a posteriori error estimate of `i_2n`.
///
/// `|i_2n - i_n| / (2^p - 1)` where `i_n` and `i_2n` are approximations on `n`
/// and `2n` partitions by a rule whose truncation error is `O(h^p)`.
///
/// `order` must be at least 1.
#[inline]
pub fn runge_error(i_n: f64, i_2n: f64, order: u32) -> f64 {
    debug_assert!(order >= 1, "convergence order must be positive");
    (i_2n - i_n).abs() / (2f64.powi(order as i32) - 1.0)
}
