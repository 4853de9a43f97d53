mod bounded;
mod func1d;

pub use bounded::{NotPositive, Positive};
pub use func1d::{from_fn, FromFn, Func1d, Integrable1d};
