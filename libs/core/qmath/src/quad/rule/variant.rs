use crate::num::Func1d;

use super::{
    EvalError, LeftRectangle, MidRectangle, QuadratureRule, RightRectangle, Simpson, Trapezoid,
};

// -----------------------------------------------------------------------------
// QuadRule
// -----------------------------------------------------------------------------
/// Run-time selector of a quadrature rule.
///
/// # Example
/// ```
/// use qmath::quad::{QuadRule, QuadratureRule};
///
/// let rule: QuadRule = "simpson".parse().unwrap();
/// assert_eq!(rule, QuadRule::Simpson);
/// assert_eq!(rule.order(), 4);
/// assert_eq!(QuadRule::MidRectangle.to_string(), "mid_rectangle");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuadRule {
    LeftRectangle,
    RightRectangle,
    MidRectangle,
    Trapezoid,
    Simpson,
}

impl From<LeftRectangle> for QuadRule {
    #[inline]
    fn from(_: LeftRectangle) -> Self {
        QuadRule::LeftRectangle
    }
}

impl From<RightRectangle> for QuadRule {
    #[inline]
    fn from(_: RightRectangle) -> Self {
        QuadRule::RightRectangle
    }
}

impl From<MidRectangle> for QuadRule {
    #[inline]
    fn from(_: MidRectangle) -> Self {
        QuadRule::MidRectangle
    }
}

impl From<Trapezoid> for QuadRule {
    #[inline]
    fn from(_: Trapezoid) -> Self {
        QuadRule::Trapezoid
    }
}

impl From<Simpson> for QuadRule {
    #[inline]
    fn from(_: Simpson) -> Self {
        QuadRule::Simpson
    }
}

impl QuadratureRule for QuadRule {
    #[inline]
    fn order(&self) -> u32 {
        match self {
            QuadRule::LeftRectangle => LeftRectangle.order(),
            QuadRule::RightRectangle => RightRectangle.order(),
            QuadRule::MidRectangle => MidRectangle.order(),
            QuadRule::Trapezoid => Trapezoid.order(),
            QuadRule::Simpson => Simpson.order(),
        }
    }

    #[inline]
    fn effective_partitions(&self, n: usize) -> usize {
        match self {
            QuadRule::Simpson => Simpson.effective_partitions(n),
            _ => n,
        }
    }

    #[inline]
    fn approx<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, EvalError>
    where
        F: Func1d<f64, Output = f64> + ?Sized,
    {
        match self {
            QuadRule::LeftRectangle => LeftRectangle.approx(f, a, b, n),
            QuadRule::RightRectangle => RightRectangle.approx(f, a, b, n),
            QuadRule::MidRectangle => MidRectangle.approx(f, a, b, n),
            QuadRule::Trapezoid => Trapezoid.approx(f, a, b, n),
            QuadRule::Simpson => Simpson.approx(f, a, b, n),
        }
    }
}

impl QuadRule {
    /// Human readable name of the rule.
    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            QuadRule::LeftRectangle => "Rectangle method (left)",
            QuadRule::RightRectangle => "Rectangle method (right)",
            QuadRule::MidRectangle => "Rectangle method (middle)",
            QuadRule::Trapezoid => "Trapezoid method",
            QuadRule::Simpson => "Simpson's method",
        }
    }
}
