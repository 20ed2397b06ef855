//! Error reporting - Normalizes every failed API call into one notification.
//!
//! Wraps an [`EmployeeApi`]; on failure the normalized message goes to the
//! notification sink as an error and the original error is returned
//! unchanged. Successful calls pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;

use super::Notifier;
use crate::domain::{Employee, EmployeeRequest};
use crate::errors::AppResult;
use crate::infra::EmployeeApi;

/// Decorator that reports failures of the wrapped API.
pub struct ReportingApi<A: EmployeeApi> {
    inner: A,
    notifier: Arc<dyn Notifier>,
}

impl<A: EmployeeApi> ReportingApi<A> {
    pub fn new(inner: A, notifier: Arc<dyn Notifier>) -> Self {
        Self { inner, notifier }
    }

    fn report<T>(&self, result: AppResult<T>) -> AppResult<T> {
        result.map_err(|err| {
            let message = err.user_message();
            tracing::warn!(error = %err, "{}", message);
            self.notifier.error(&message);
            err
        })
    }
}

#[async_trait]
impl<A: EmployeeApi> EmployeeApi for ReportingApi<A> {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.report(self.inner.list().await)
    }

    async fn get(&self, id: i64) -> AppResult<Employee> {
        self.report(self.inner.get(id).await)
    }

    async fn create(&self, request: EmployeeRequest) -> AppResult<Employee> {
        self.report(self.inner.create(request).await)
    }

    async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee> {
        self.report(self.inner.update(id, request).await)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.report(self.inner.delete(id).await)
    }

    async fn search_by_name(&self, name: String) -> AppResult<Vec<Employee>> {
        self.report(self.inner.search_by_name(name).await)
    }
}
