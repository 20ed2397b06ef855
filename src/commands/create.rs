//! Create command - Run the form in create mode.

use super::submit_form;
use crate::cli::args::CreateArgs;
use crate::errors::AppResult;
use crate::services::Services;

/// Execute the create command
pub async fn execute(args: CreateArgs, services: &Services) -> AppResult<()> {
    let (mut form, _) = services.employee_form(None).await?;
    form.set_name(args.name);
    form.set_email(args.email);
    form.set_department(args.department);

    tracing::info!("Submitting new employee");
    submit_form(&mut form, services).await
}
