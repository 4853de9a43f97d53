mod domain;
mod elementary;
mod polynomial;
mod traits;

pub use domain::UndefinedSet;
pub use elementary::Elementary;
pub use polynomial::Polynomial;
pub use traits::{Integrand, OutOfDomain};
