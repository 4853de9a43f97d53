mod data_src;
mod sym;

pub use data_src::{Catalog, IntegrandDef, IntegrandSrc};
pub use sym::IntegrandSym;
