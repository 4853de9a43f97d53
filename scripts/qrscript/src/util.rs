pub mod catalog;
pub mod interactive_cmd;
