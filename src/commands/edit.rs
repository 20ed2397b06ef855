//! Edit command - Load an employee, patch the given fields and save.

use super::{navigate, submit_form};
use crate::cli::args::EditArgs;
use crate::errors::AppResult;
use crate::services::Services;

/// Execute the edit command
pub async fn execute(args: EditArgs, services: &Services) -> AppResult<()> {
    let (mut form, redirect) = services.employee_form(Some(&args.id)).await?;
    if let Some(route) = redirect {
        return navigate(route, services).await;
    }

    if let Some(name) = args.name {
        form.set_name(name);
    }
    if let Some(email) = args.email {
        form.set_email(email);
    }
    if let Some(department) = args.department {
        form.set_department(Some(department));
    }

    tracing::info!(id = ?form.mode().employee_id(), "Submitting employee changes");
    submit_form(&mut form, services).await
}
