use qmath::num::{Func1d, Integrable1d};

use super::{Integrand, OutOfDomain, UndefinedSet};

// -----------------------------------------------------------------------------
// Elementary
// -----------------------------------------------------------------------------
/// Built-in elementary integrands.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Elementary {
    /// `x^2`
    Square,
    /// `sin(x)`
    Sin,
    /// `exp(x)`
    Exp,
    /// `1/x`, undefined at zero.
    Reciprocal,
    /// `ln(x)`, undefined for `x <= 0`.
    Ln,
}

impl Func1d<f64> for Elementary {
    type Output = f64;
    type Error = OutOfDomain;

    fn eval(&self, x: &f64) -> Result<f64, OutOfDomain> {
        let x = *x;
        if self.undefined_set().contains(x) {
            return Err(OutOfDomain { x });
        }
        let y = match self {
            Elementary::Square => x * x,
            Elementary::Sin => x.sin(),
            Elementary::Exp => x.exp(),
            Elementary::Reciprocal => x.recip(),
            Elementary::Ln => x.ln(),
        };
        Ok(y)
    }
}

impl Integrable1d<f64> for Elementary {
    type Integrated = f64;

    fn integrate(&self, from: &f64, to: &f64) -> Result<f64, OutOfDomain> {
        let (a, b) = (*from, *to);
        if let Some(x) = self.undefined_set().first_within(a, b) {
            return Err(OutOfDomain { x });
        }
        let res = match self {
            Elementary::Square => (b * b * b - a * a * a) / 3.0,
            Elementary::Sin => a.cos() - b.cos(),
            Elementary::Exp => b.exp() - a.exp(),
            // a and b share their sign here
            Elementary::Reciprocal => (b / a).ln(),
            Elementary::Ln => (b * b.ln() - b) - (a * a.ln() - a),
        };
        Ok(res)
    }
}

impl Integrand for Elementary {
    #[inline]
    fn label(&self) -> String {
        match self {
            Elementary::Square => "x^2",
            Elementary::Sin => "sin(x)",
            Elementary::Exp => "exp(x)",
            Elementary::Reciprocal => "1/x",
            Elementary::Ln => "ln(x)",
        }
        .to_string()
    }

    #[inline]
    fn undefined_set(&self) -> UndefinedSet {
        match self {
            Elementary::Reciprocal => UndefinedSet::Point { at: 0.0 },
            Elementary::Ln => UndefinedSet::AtOrBelow { bound: 0.0 },
            _ => UndefinedSet::Empty,
        }
    }

    #[inline]
    fn reference_integral(&self, from: f64, to: f64) -> Option<f64> {
        self.integrate(&from, &to).ok()
    }
}
