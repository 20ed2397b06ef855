//! Employee admin - Application entry point
//!
//! CLI-based entry point that dispatches to the directory commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_directory::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    services::Services,
    ui::render,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let mut config = Config::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    tracing::debug!(?config, "Configuration loaded");

    let services = match Services::from_config(&config) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, &services).await,
        Commands::Search(args) => commands::search::execute(args, &services).await,
        Commands::Show(args) => commands::show::execute(args, &services).await,
        Commands::Create(args) => commands::create::execute(args, &services).await,
        Commands::Edit(args) => commands::edit::execute(args, &services).await,
        Commands::Delete(args) => commands::delete::execute(args, &services).await,
    };

    // Show what the user would have seen as toasts
    for note in services.notifications().drain() {
        eprintln!("{}", render::notification(&note));
    }

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
