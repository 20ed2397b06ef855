//! Application services layer - Controllers and cross-cutting concerns.
//!
//! Controllers hold the state of one screen each and talk to the remote
//! API through the [`EmployeeApi`](crate::infra::EmployeeApi) abstraction.
//! Failures are normalized and reported by [`ReportingApi`] before they
//! reach a controller.

pub mod container;
mod employee_form;
mod employee_list;
mod error_reporting;
mod notification;

// Service Container
pub use container::Services;

// Controllers
pub use employee_form::{
    EmployeeFormController, Field, FormMode, FormValues, SubmitOutcome, MSG_DEPARTMENT_REQUIRED,
    MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED,
};
pub use employee_list::{
    Confirm, DeleteOutcome, EmployeeListController, DELETE_CONFIRM_HEADER, EMPTY_LIST_TEXT,
    LOADING_TEXT,
};

// Cross-cutting
pub use error_reporting::ReportingApi;
pub use notification::{Notification, NotificationQueue, Notifier, Severity};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_list::MockConfirm;
