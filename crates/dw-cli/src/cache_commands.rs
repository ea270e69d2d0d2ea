use clap::Subcommand;

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Delete every cached user, message and contact
    Clear {
        /// Required; the wipe cannot be undone
        #[arg(long)]
        yes: bool,
    },
    /// Load the bundled contacts if the cache has none
    Seed,
    /// Row counts per table
    Stats,
}
