pub mod catalog;
pub mod integrand;

mod integrator;
mod request;

pub use integrator::{precheck, Integrator};
pub use request::{Request, Response, SingularityKind};
