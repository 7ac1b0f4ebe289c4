use std::path::PathBuf;

use clap::Parser;
use cooksmart_core::domain::common::{CatalogConfig, CooksmartConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "cooksmart-api", version, about)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    #[arg(long = "recipes-file", env = "RECIPES_FILE", default_value = "data/recipes.json")]
    pub recipes_file: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for CooksmartConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                recipes_file: args.catalog.recipes_file,
            },
        }
    }
}
