//! gerant: restaurant manager console
//!
//! Manages the menu, stock, health alerts, promotions and staff of a
//! restaurant against its REST backend, and lists reservations with their
//! live status.

mod cli;
mod commands;
mod logger;
mod render;

use clap::Parser;
use gerant_client::{ClientConfig, GerantClient};

use cli::{Cli, Command};
use commands::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.json_logs)?;

    let config = ClientConfig::new(cli.api_url).with_timeout(cli.timeout);
    tracing::info!(base_url = %config.base_url, "Starting gerant console");

    let console = Console::new(GerantClient::new(&config)?);

    match cli.command {
        Command::Alerts(command) => console.alerts(command).await,
        Command::Dishes(command) => console.dishes(command).await,
        Command::Stock(command) => console.stock(command).await,
        Command::Promotions(command) => console.promotions(command).await,
        Command::Staff(command) => console.staff(command).await,
        Command::Reservations(command) => console.reservations(command).await,
    }
}
