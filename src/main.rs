//! Roster - A terminal admin client for influencer roster APIs
//!
//! This is the binary entry point. All logic lives in the member crates.

use std::path::PathBuf;

use clap::Parser;
use roster_core::prelude::*;
use roster_core::Role;

/// Roster - A terminal admin client for influencer roster APIs
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "A terminal admin client for influencer roster APIs", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the API base URL, down to the `/api` prefix
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Override the records-per-page limit
    #[arg(long, value_name = "N")]
    page_size: Option<u64>,

    /// Override the session role (admin or viewer)
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,
}

fn parse_role(s: &str) -> std::result::Result<Role, String> {
    match s {
        "admin" => Ok(Role::Admin),
        "viewer" => Ok(Role::Viewer),
        other => Err(format!("unknown role '{other}' (expected admin or viewer)")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    roster_core::logging::init()?;

    // Load settings, then layer CLI overrides on top
    let mut settings = roster_app::load_settings(args.config.as_deref());
    if let Some(url) = args.api_url {
        settings.api.base_url = url;
    }
    if let Some(page_size) = args.page_size {
        settings.api.page_size = page_size;
    }
    if let Some(role) = args.role {
        settings.ui.role = role;
    }

    let result = roster_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Roster exiting");
    result
}
