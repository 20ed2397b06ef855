//! Employee API abstraction.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeRequest};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Remote employee resource.
///
/// One call per operation; no retries and no caching. Implementations
/// return the failure unchanged so callers can inspect it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetch every employee
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Fetch one employee by ID
    async fn get(&self, id: i64) -> AppResult<Employee>;

    /// Create an employee; the server assigns ID and timestamps
    async fn create(&self, request: EmployeeRequest) -> AppResult<Employee>;

    /// Replace the writable fields of an employee
    async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee>;

    /// Delete an employee by ID
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Server-side search by name
    async fn search_by_name(&self, name: String) -> AppResult<Vec<Employee>>;
}
