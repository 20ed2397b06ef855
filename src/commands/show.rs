//! Show command - Load one employee the way the edit form does.

use super::navigate;
use crate::cli::args::ShowArgs;
use crate::errors::AppResult;
use crate::services::Services;

/// Execute the show command
pub async fn execute(args: ShowArgs, services: &Services) -> AppResult<()> {
    let (form, redirect) = services.employee_form(Some(&args.id)).await?;
    if let Some(route) = redirect {
        return navigate(route, services).await;
    }

    let values = form.values();
    println!("{}", form.title());
    println!("    Name:       {}", values.name);
    println!("    Email:      {}", values.email);
    println!(
        "    Department: {}",
        values.department.map(|d| d.label()).unwrap_or("-")
    );
    Ok(())
}
