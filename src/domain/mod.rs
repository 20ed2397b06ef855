//! Domain layer - Core business entities and logic
//!
//! Employee records, the department enumeration and navigation routes.
//! Nothing here talks to the network.

pub mod department;
pub mod employee;
pub mod route;

pub use department::Department;
pub use employee::{Employee, EmployeeRequest};
pub use route::Route;
