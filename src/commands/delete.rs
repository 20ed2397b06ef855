//! Delete command - Confirm, delete and show the reloaded list.

use crate::cli::args::DeleteArgs;
use crate::errors::AppResult;
use crate::services::{Confirm, DeleteOutcome, Services};
use crate::ui::{render, AutoConfirm, StdinConfirm};

/// Execute the delete command
pub async fn execute(args: DeleteArgs, services: &Services) -> AppResult<()> {
    let employee = services.api().get(args.id).await?;
    tracing::info!(id = employee.id, name = %employee.name, "Deleting employee");

    let confirmer: &dyn Confirm = if args.yes { &AutoConfirm } else { &StdinConfirm };
    let mut list = services.employee_list();

    match list.confirm_delete(&employee, confirmer).await? {
        DeleteOutcome::Declined => println!("Deletion cancelled."),
        DeleteOutcome::Deleted => println!("{}", render::employee_list(&list)),
    }
    Ok(())
}
