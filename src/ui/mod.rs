//! Terminal presentation of controller state.

pub mod prompt;
pub mod render;

pub use prompt::{AutoConfirm, StdinConfirm};
