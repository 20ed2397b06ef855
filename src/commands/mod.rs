//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.
//! Commands drive the controllers; notifications are printed by the caller.

pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;

use crate::domain::Route;
use crate::errors::{AppError, AppResult};
use crate::services::{EmployeeFormController, Services, SubmitOutcome};
use crate::ui::render;

/// Follow a navigation request from a controller.
pub async fn navigate(route: Route, services: &Services) -> AppResult<()> {
    tracing::debug!(route = %route, "Navigating");
    match route {
        Route::List => list::show_all(services).await,
        Route::New | Route::Edit(_) => {
            println!("-> {}", route);
            Ok(())
        }
    }
}

/// Submit a form and follow the result.
pub(crate) async fn submit_form(
    form: &mut EmployeeFormController,
    services: &Services,
) -> AppResult<()> {
    match form.submit().await? {
        SubmitOutcome::Saved { employee, next } => {
            println!("{}", render::employee_card(&employee));
            println!();
            navigate(next, services).await
        }
        SubmitOutcome::Invalid => {
            let errors = render::form_errors(form);
            for line in &errors {
                println!("{}", line);
            }
            Err(AppError::validation(errors.join("; ")))
        }
        SubmitOutcome::Busy => Err(AppError::internal("A request is already in flight")),
    }
}
