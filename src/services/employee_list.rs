//! Employee list controller - Browse, filter and delete employees.

use std::sync::Arc;

use super::Notifier;
use crate::domain::Employee;
use crate::errors::AppResult;
use crate::infra::EmployeeApi;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const DELETE_CONFIRM_HEADER: &str = "Confirm Deletion";
pub const EMPTY_LIST_TEXT: &str = "No employees found. Add a new employee to get started.";
pub const LOADING_TEXT: &str = "Loading employees...";

/// Asks the user to accept or decline a destructive action.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Confirm: Send + Sync {
    fn confirm(&self, header: &str, message: &str) -> bool;
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
}

pub struct EmployeeListController {
    api: Arc<dyn EmployeeApi>,
    notifier: Arc<dyn Notifier>,
    employees: Vec<Employee>,
    filtered: Vec<Employee>,
    search_term: String,
    loading: bool,
}

impl EmployeeListController {
    pub fn new(api: Arc<dyn EmployeeApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            employees: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            loading: true,
        }
    }

    /// Everything the last load returned
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The view currently shown
    pub fn filtered(&self) -> &[Employee] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Nothing has been loaded (and we are not waiting for it)
    pub fn is_empty(&self) -> bool {
        !self.loading && self.employees.is_empty()
    }

    /// Fetch the full list; the view is reset to all of it.
    pub async fn load(&mut self) -> AppResult<()> {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;

        let employees = result?;
        tracing::debug!(count = employees.len(), "Employees loaded");
        self.filtered = employees.clone();
        self.employees = employees;
        Ok(())
    }

    /// Live filter: update the term and recompute the view locally.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        if self.search_term.trim().is_empty() {
            self.filtered = self.employees.clone();
            return;
        }

        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .employees
            .iter()
            .filter(|employee| employee.name_contains(&needle))
            .cloned()
            .collect();
    }

    /// Server-side search by the current term; a blank term reloads all.
    ///
    /// Only the view is replaced, the loaded list stays as it was.
    pub async fn search(&mut self) -> AppResult<()> {
        if self.search_term.trim().is_empty() {
            return self.load().await;
        }

        self.loading = true;
        let result = self.api.search_by_name(self.search_term.clone()).await;
        self.loading = false;

        self.filtered = result?;
        Ok(())
    }

    /// Ask for confirmation, then delete and reload.
    pub async fn confirm_delete(
        &mut self,
        employee: &Employee,
        confirmer: &dyn Confirm,
    ) -> AppResult<DeleteOutcome> {
        let message = format!("Are you sure you want to delete {}?", employee.name);
        if !confirmer.confirm(DELETE_CONFIRM_HEADER, &message) {
            tracing::debug!(id = employee.id, "Deletion declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.delete(employee.id).await?;
        Ok(DeleteOutcome::Deleted)
    }

    async fn delete(&mut self, id: i64) -> AppResult<()> {
        self.api.delete(id).await?;
        tracing::info!(id, "Employee deleted");
        self.notifier.success("Employee deleted successfully");
        self.load().await
    }
}
