// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod prompt;
pub mod validation;

pub use prompt::{ConvertChoice, Prompter};
pub use validation::Validator;
