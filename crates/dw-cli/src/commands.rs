use crate::{cache_commands::CacheCommands, contact_commands::ContactCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check backend connectivity and local cache health
    Doctor,

    /// Local cache operations
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },

    /// Contact lookup
    Contacts {
        #[command(subcommand)]
        action: ContactCommands,
    },

    /// Fetch a user's balances in display order
    Balances {
        /// Backend user id
        user_id: String,
    },
}
