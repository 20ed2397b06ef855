//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::domain::Department;

/// Employee directory administration
#[derive(Parser, Debug)]
#[command(name = "employee-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the employee API
    #[arg(long, global = true, env = "EMPLOYEE_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees, optionally filtered by name
    List(ListArgs),

    /// Search employees by name on the server
    Search(SearchArgs),

    /// Show a single employee
    Show(ShowArgs),

    /// Add a new employee
    Create(CreateArgs),

    /// Edit an existing employee
    Edit(EditArgs),

    /// Delete an employee
    Delete(DeleteArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring of the name
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Name to search for
    pub name: String,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Employee ID
    pub id: String,
}

/// Arguments for the create command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Full name (letters and spaces)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Department (FINANCE, HR, IT, OPERATIONS)
    #[arg(short, long)]
    pub department: Option<Department>,
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Employee ID
    pub id: String,

    /// New full name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New department
    #[arg(short, long)]
    pub department: Option<Department>,
}

/// Arguments for the delete command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Employee ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
