pub mod num;
pub mod quad;
