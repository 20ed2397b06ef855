//! Employee Directory - administration client for a remote employee API
//!
//! List, search, create, edit and delete employee records over REST, with
//! client-side form validation and transient notifications.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Employee records, departments and routes
//! - **infra**: The REST client
//! - **services**: Form and list controllers, notifications, error reporting
//! - **ui**: Terminal rendering and prompts
//! - **errors**: Centralized error handling and user-facing messages
//!
//! # CLI Usage
//!
//! ```bash
//! # List everyone whose name contains "ada"
//! cargo run -- list --filter ada
//!
//! # Add an employee
//! cargo run -- create --name "Ada Lovelace" --email ada@x.com --department IT
//!
//! # Delete without prompting
//! cargo run -- delete 7 --yes
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod ui;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Department, Employee, EmployeeRequest, Route};
pub use errors::{AppError, AppResult};
pub use infra::{EmployeeApi, HttpEmployeeClient};
pub use services::Services;
