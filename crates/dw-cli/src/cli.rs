use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dw")]
#[command(about = "Operator tooling for the dolar-wallet client core")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend base URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Bearer token attached to backend requests
    #[arg(long, global = true, env = "DW_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) access_token: Option<String>,

    /// Write log lines to stdout as well as JSON results
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
