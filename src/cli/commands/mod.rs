//! Command execution for installer generation.

mod create;

pub use create::execute;
