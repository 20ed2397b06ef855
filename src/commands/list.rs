//! List command - Load every employee and filter locally.

use crate::cli::args::ListArgs;
use crate::errors::AppResult;
use crate::services::Services;
use crate::ui::render;

/// Execute the list command
pub async fn execute(args: ListArgs, services: &Services) -> AppResult<()> {
    let mut list = services.employee_list();
    list.load().await?;
    tracing::info!(count = list.employees().len(), "Employees listed");

    if let Some(filter) = args.filter {
        list.set_search_term(filter);
    }

    println!("{}", render::employee_list(&list));
    Ok(())
}

/// Render the unfiltered list screen
pub async fn show_all(services: &Services) -> AppResult<()> {
    execute(ListArgs { filter: None }, services).await
}
