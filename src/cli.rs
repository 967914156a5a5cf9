use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pa_core::PageSize;

/// Administrative client for the products catalog
#[derive(Debug, Parser)]
#[command(name = "product-admin", version, about)]
pub struct Cli {
    /// Config file (defaults to <config dir>/product-admin/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog API base URL, e.g. http://localhost:3002/bp
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the catalog
    List(ListArgs),
    /// Check whether a product id is already taken
    Verify { id: String },
    /// Create a product
    Add(AddArgs),
    /// Change an existing product
    Edit(EditArgs),
    /// Delete a product after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Interactive list: type to search, `:help` for commands
    Browse,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive filter on name, description and id
    #[arg(long, short)]
    pub search: Option<String>,

    /// Rows per page: 5, 10 or 20
    #[arg(long)]
    pub page_size: Option<PageSize>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Logo URL
    #[arg(long)]
    pub logo: String,
    /// YYYY-MM-DD, today or later
    #[arg(long)]
    pub date_release: String,
    /// YYYY-MM-DD, defaults to one year after the release date
    #[arg(long)]
    pub date_revision: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub logo: Option<String>,
    /// YYYY-MM-DD; the revision follows unless given explicitly
    #[arg(long)]
    pub date_release: Option<String>,
    #[arg(long)]
    pub date_revision: Option<String>,
}
