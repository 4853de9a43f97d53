use std::fmt::Display;

// -----------------------------------------------------------------------------
// UndefinedSet
// -----------------------------------------------------------------------------
/// Subset of the real line where an integrand is not defined.
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UndefinedSet {
    Empty,
    /// A single point, e.g. the pole of `1/x`.
    Point { at: f64 },
    /// `(-inf, bound]`, e.g. `bound = 0` for `ln(x)`.
    AtOrBelow { bound: f64 },
}

impl Display for UndefinedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndefinedSet::Empty => write!(f, "{{}}"),
            UndefinedSet::Point { at } => write!(f, "{{{at}}}"),
            UndefinedSet::AtOrBelow { bound } => write!(f, "(-inf, {bound}]"),
        }
    }
}

impl UndefinedSet {
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            UndefinedSet::Empty => false,
            UndefinedSet::Point { at } => x == *at,
            UndefinedSet::AtOrBelow { bound } => x <= *bound,
        }
    }

    /// Smallest point of the set within the closed interval between `a` and `b`.
    ///
    /// The order of `a` and `b` does not matter.
    pub fn first_within(&self, a: f64, b: f64) -> Option<f64> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match self {
            UndefinedSet::Empty => None,
            UndefinedSet::Point { at } => (lo <= *at && *at <= hi).then_some(*at),
            UndefinedSet::AtOrBelow { bound } => (lo <= *bound).then_some(lo),
        }
    }
}
