//! Service container - The composition root.
//!
//! Owns the notification queue and the error-reporting API client, and hands
//! both to the controllers it builds.

use std::sync::Arc;

use super::{
    EmployeeFormController, EmployeeListController, NotificationQueue, Notifier, ReportingApi,
};
use crate::config::Config;
use crate::domain::Route;
use crate::errors::AppResult;
use crate::infra::{EmployeeApi, HttpEmployeeClient};

/// Concrete composition of the client's services
pub struct Services {
    api: Arc<dyn EmployeeApi>,
    notifications: Arc<NotificationQueue>,
}

impl Services {
    /// Wire an API implementation to a notification queue.
    ///
    /// Every call made through the container is reported to the queue on
    /// failure.
    pub fn new<A: EmployeeApi + 'static>(api: A, notifications: Arc<NotificationQueue>) -> Self {
        let notifier: Arc<dyn Notifier> = notifications.clone();
        Self {
            api: Arc::new(ReportingApi::new(api, notifier)),
            notifications,
        }
    }

    /// Create the container for the configured HTTP API
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = HttpEmployeeClient::from_config(config)?;
        let notifications = Arc::new(NotificationQueue::from_config(config));
        tracing::debug!(base_url = %client.base_url(), "Employee API client ready");
        Ok(Self::new(client, notifications))
    }

    pub fn api(&self) -> Arc<dyn EmployeeApi> {
        self.api.clone()
    }

    pub fn notifications(&self) -> Arc<NotificationQueue> {
        self.notifications.clone()
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifications.clone()
    }

    /// A list controller (nothing loaded yet)
    pub fn employee_list(&self) -> EmployeeListController {
        EmployeeListController::new(self.api(), self.notifier())
    }

    /// A form controller for a route ID, loaded when editing.
    pub async fn employee_form(
        &self,
        route_id: Option<&str>,
    ) -> AppResult<(EmployeeFormController, Option<Route>)> {
        EmployeeFormController::open(self.api(), self.notifier(), route_id).await
    }
}
