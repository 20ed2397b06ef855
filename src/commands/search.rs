//! Search command - Delegate a name search to the server.

use crate::cli::args::SearchArgs;
use crate::errors::AppResult;
use crate::services::Services;
use crate::ui::render;

/// Execute the search command
pub async fn execute(args: SearchArgs, services: &Services) -> AppResult<()> {
    let mut list = services.employee_list();
    list.set_search_term(args.name);
    list.search().await?;
    tracing::info!(term = %list.search_term(), found = list.filtered().len(), "Search finished");

    if list.filtered().is_empty() {
        println!("No employees match \"{}\".", list.search_term());
        return Ok(());
    }

    let cards: Vec<String> = list.filtered().iter().map(render::employee_card).collect();
    println!("{}", cards.join("\n\n"));
    Ok(())
}
