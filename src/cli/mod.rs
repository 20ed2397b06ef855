//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `list` / `search` - Browse the directory
//! - `show` - Inspect one employee
//! - `create` / `edit` - Run the employee form
//! - `delete` - Remove an employee after confirmation

pub mod args;

pub use args::{Cli, Commands};
