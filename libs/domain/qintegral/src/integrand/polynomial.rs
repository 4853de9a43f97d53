use qmath::num::{Func1d, Integrable1d};

use super::{Integrand, OutOfDomain};

// -----------------------------------------------------------------------------
// Polynomial
// -----------------------------------------------------------------------------
/// Polynomial with coefficients in ascending order of degree.
///
/// # Example
/// ```
/// use qintegral::integrand::{Integrand, Polynomial};
/// use qmath::num::Func1d;
///
/// let p = Polynomial::new(vec![1.0, 0.0, -2.0]);
/// assert_eq!(p.eval(&2.0), Ok(-7.0));
/// assert_eq!(p.label(), "1 - 2x^2");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct Polynomial {
    pub coeffs: Vec<f64>,
}

impl Polynomial {
    #[inline]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Polynomial { coeffs }
    }

    #[inline]
    fn horner(coeffs: impl DoubleEndedIterator<Item = f64>, x: f64) -> f64 {
        coeffs.rev().fold(0.0, |acc, c| acc * x + c)
    }

    fn antiderivative(&self, x: f64) -> f64 {
        // coefficients of the antiderivative without the constant term
        let integrated = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c / (i + 1) as f64);
        x * Self::horner(integrated, x)
    }
}

impl Func1d<f64> for Polynomial {
    type Output = f64;
    type Error = OutOfDomain;

    #[inline]
    fn eval(&self, x: &f64) -> Result<f64, OutOfDomain> {
        Ok(Self::horner(self.coeffs.iter().copied(), *x))
    }
}

impl Integrable1d<f64> for Polynomial {
    type Integrated = f64;

    #[inline]
    fn integrate(&self, from: &f64, to: &f64) -> Result<f64, OutOfDomain> {
        Ok(self.antiderivative(*to) - self.antiderivative(*from))
    }
}

impl Integrand for Polynomial {
    fn label(&self) -> String {
        let mut terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| (i, *c));
        let Some(first) = terms.next() else {
            return "0".to_string();
        };
        let mut label = monomial(first.0, first.1);
        for (i, c) in terms {
            let sign = if c < 0.0 { " - " } else { " + " };
            label.push_str(sign);
            label.push_str(&monomial(i, c.abs()));
        }
        label
    }

    #[inline]
    fn reference_integral(&self, from: f64, to: f64) -> Option<f64> {
        self.integrate(&from, &to).ok()
    }
}

fn monomial(degree: usize, coeff: f64) -> String {
    let var = match degree {
        0 => return format!("{coeff}"),
        1 => "x".to_string(),
        _ => format!("x^{degree}"),
    };
    match coeff {
        c if c == 1.0 => var,
        c if c == -1.0 => format!("-{var}"),
        c => format!("{c}{var}"),
    }
}
