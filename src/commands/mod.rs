//! CLI command handlers. Each one drives a view model the way a screen
//! would and prints the outcome.

pub mod add;
pub mod browse;
pub mod delete;
pub mod edit;
pub mod list;
pub mod render;
pub mod verify;

use anyhow::bail;
use pa_app::{AppDeps, FormViewModel};
use pa_core::product::{one_year_after, parse_input_date, DATE_FORMAT};

use crate::bootstrap::Settings;
use crate::cli::Command;

pub async fn run(command: Command, deps: &AppDeps, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Command::List(args) => list::run(deps, settings, args).await,
        Command::Verify { id } => verify::run(deps, id).await,
        Command::Add(args) => add::run(deps, args).await,
        Command::Edit(args) => edit::run(deps, args).await,
        Command::Delete { id, yes } => delete::run(deps, id, yes).await,
        Command::Browse => browse::run(deps, settings).await,
    }
}

/// Revision date matching a raw release date, if the release parses and
/// has an anniversary.
pub fn derive_revision(release: &str) -> Option<String> {
    let release = parse_input_date(release)?;
    one_year_after(release).map(|revision| revision.format(DATE_FORMAT).to_string())
}

/// Submit the form, turning a refusal into an error listing what is wrong.
pub async fn submit_form(form: &mut FormViewModel) -> anyhow::Result<()> {
    if form.submit().await {
        return Ok(());
    }
    if form.is_valid() {
        bail!("The catalog did not accept the product");
    }
    bail!("Invalid product:\n  {}", render::form_errors(form).join("\n  "))
}
