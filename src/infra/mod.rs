//! Infrastructure layer - External systems integration
//!
//! Everything that talks to the remote employee API lives here.

mod employee_api;
pub mod http_client;

pub use employee_api::EmployeeApi;
pub use http_client::HttpEmployeeClient;

#[cfg(any(test, feature = "test-utils"))]
pub use employee_api::MockEmployeeApi;
