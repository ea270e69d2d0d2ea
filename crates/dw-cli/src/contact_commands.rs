use dw_core::Currency;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Search contacts by name, alias, phone or CVU
    Search {
        query: String,
        /// Currency context for the remote search
        #[arg(long, default_value = "UYU")]
        currency: Currency,
        /// Search the local cache only
        #[arg(long)]
        local: bool,
    },
    /// List cached contacts, most recently updated first
    List,
}
