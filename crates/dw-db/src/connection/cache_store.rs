use crate::{ContactRepository, DbError, MessageRepository, Result, UserRepository};

use dw_core::{ErrorLocation, UserContact};

use std::panic::Location;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const CONTACT_FIXTURE: &str = include_str!("../../fixtures/contacts.json");
const MAX_CONNECTIONS: u32 = 5;

/// Embedded cache of the signed-in user's profile, onboarding conversation and contacts.
///
/// Opening is idempotent: migrations only apply once and the bundled contact fixture is
/// only seeded into an empty contacts table.
#[derive(Clone)]
pub struct CacheStore {
    pool: SqlitePool,
}

impl CacheStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create cache directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        log::debug!("Opened cache store at {}", path.display());

        Self::initialize(pool).await
    }

    /// Private in-memory store. A single connection that never expires keeps the
    /// database alive for the lifetime of the store.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::initialize(pool).await
    }

    async fn initialize(pool: SqlitePool) -> Result<Self> {
        Self::run_migrations(&pool).await?;

        let store = Self { pool };
        store.seed_if_empty().await?;
        Ok(store)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Seed the bundled contacts when the contacts table is empty.
    ///
    /// Returns the number of contacts written (0 when the table already had rows).
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let contacts = self.contacts();
        if contacts.count().await? > 0 {
            return Ok(0);
        }

        let fixture = fixture_contacts()?;
        let written = contacts.cache_remote(&fixture).await?;
        log::info!("Seeded {written} contacts from bundled fixture");
        Ok(written)
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn messages(&self) -> MessageRepository {
        MessageRepository::new(self.pool.clone())
    }

    pub fn contacts(&self) -> ContactRepository {
        ContactRepository::new(self.pool.clone())
    }

    /// Wipe every cached row. Runs on sign-out.
    pub async fn clear_all_data(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM messages").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM contacts").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

        tx.commit().await?;

        log::info!("Cleared all cached data");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[track_caller]
fn fixture_contacts() -> Result<Vec<UserContact>> {
    let contacts: Vec<UserContact> =
        serde_json::from_str(CONTACT_FIXTURE).map_err(|e| DbError::Fixture {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(contacts
        .into_iter()
        .enumerate()
        .map(|(seq, contact)| contact.ingest(seq as u64))
        .collect())
}
