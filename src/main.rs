use std::sync::Arc;

use clap::Parser;
use product_admin::bootstrap::settings::API_URL_ENV;
use product_admin::bootstrap::{load_or_empty, tracing::init_tracing_subscriber, wire_dependencies, Settings};
use product_admin::cli::Cli;
use product_admin::commands;
use product_admin::console::{ConsoleNavigator, ConsoleNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing_subscriber()?;

    let config = load_or_empty(cli.config.as_deref())?;
    let env_api_url = std::env::var(API_URL_ENV).ok();
    let settings = Settings::resolve(&config, cli.api_url.as_deref(), env_api_url.as_deref());
    tracing::debug!(api = %settings.api_base_url, "Resolved settings");

    let deps = wire_dependencies(
        &settings,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleNavigator::default()),
    )?;

    commands::run(cli.command, &deps, &settings).await
}
