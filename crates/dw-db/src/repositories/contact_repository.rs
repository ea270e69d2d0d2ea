use crate::repositories::{from_millis, to_millis};
use crate::{DbError, Result as DbErrorResult};

use dw_core::UserContact;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "contacts";

const SELECT_COLUMNS: &str = r#"
    SELECT key, surrogate_key, contact_id, cvu, full_name, alias, phone, avatar,
           has_dolar_app, is_saved, last_transaction_date, transaction_count, updated_at
    FROM contacts
"#;

pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Upsert keyed by `contactId ?? cvu ?? surrogate`, overwriting every field.
    ///
    /// A contact marked saved must carry a `contactId` or `cvu`. Contacts with neither
    /// identifier nor surrogate get one derived from their fields, so saving the same
    /// contact again updates its row. Returns the contact as stored.
    pub async fn save(&self, contact: &UserContact) -> DbErrorResult<UserContact> {
        if contact.is_saved && !contact.is_addressable() {
            return Err(DbError::unaddressable(&contact.full_name));
        }
        let contact = contact.clone().ingest(0);

        sqlx::query(
            r#"
            INSERT INTO contacts (
                key, surrogate_key, contact_id, cvu, full_name, alias, phone, avatar,
                has_dolar_app, is_saved, last_transaction_date, transaction_count, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                contact_id = excluded.contact_id,
                cvu = excluded.cvu,
                full_name = excluded.full_name,
                alias = excluded.alias,
                phone = excluded.phone,
                avatar = excluded.avatar,
                has_dolar_app = excluded.has_dolar_app,
                is_saved = excluded.is_saved,
                last_transaction_date = excluded.last_transaction_date,
                transaction_count = excluded.transaction_count,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(contact.identity_key())
        .bind(&contact.surrogate_key)
        .bind(&contact.contact_id)
        .bind(&contact.cvu)
        .bind(&contact.full_name)
        .bind(&contact.alias)
        .bind(&contact.phone)
        .bind(&contact.avatar)
        .bind(contact.has_dolar_app)
        .bind(contact.is_saved)
        .bind(contact.last_transaction_date.map(to_millis))
        .bind(contact.transaction_count)
        .bind(to_millis(Utc::now()))
        .execute(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Write-behind of remotely fetched contacts.
    ///
    /// The cache owns user-entered aliases and the saved flag, so an existing alias
    /// is never replaced and a saved contact never becomes unsaved.
    pub async fn cache_remote(&self, contacts: &[UserContact]) -> DbErrorResult<usize> {
        let mut tx = self.pool.begin().await?;
        let now = to_millis(Utc::now());

        for contact in contacts {
            let contact = contact.clone().ingest(0);

            sqlx::query(
                r#"
                INSERT INTO contacts (
                    key, surrogate_key, contact_id, cvu, full_name, alias, phone, avatar,
                    has_dolar_app, is_saved, last_transaction_date, transaction_count, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    contact_id = excluded.contact_id,
                    cvu = excluded.cvu,
                    full_name = excluded.full_name,
                    alias = COALESCE(contacts.alias, excluded.alias),
                    phone = excluded.phone,
                    avatar = excluded.avatar,
                    has_dolar_app = excluded.has_dolar_app,
                    is_saved = MAX(contacts.is_saved, excluded.is_saved),
                    last_transaction_date = excluded.last_transaction_date,
                    transaction_count = excluded.transaction_count,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(contact.identity_key())
            .bind(&contact.surrogate_key)
            .bind(&contact.contact_id)
            .bind(&contact.cvu)
            .bind(&contact.full_name)
            .bind(&contact.alias)
            .bind(&contact.phone)
            .bind(&contact.avatar)
            .bind(contact.has_dolar_app)
            .bind(contact.is_saved)
            .bind(contact.last_transaction_date.map(to_millis))
            .bind(contact.transaction_count)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(contacts.len())
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<UserContact>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE key = ?"))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_contact).transpose()
    }

    /// All cached contacts, most recently updated first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<UserContact>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY updated_at DESC, rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_contact).collect()
    }

    /// Case-insensitive substring match over name, alias, phone and cvu.
    ///
    /// Matching happens in Rust so non-ASCII names fold case correctly; SQLite's
    /// `LOWER` only folds ASCII.
    pub async fn search(&self, query: &str) -> DbErrorResult<Vec<UserContact>> {
        let all = self.find_all().await?;
        Ok(all.into_iter().filter(|c| c.matches(query)).collect())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_contact(row: &SqliteRow) -> DbErrorResult<UserContact> {
    let last_transaction_date = row
        .try_get::<Option<i64>, _>("last_transaction_date")?
        .map(|ms| from_millis(TABLE, ms))
        .transpose()?;

    Ok(UserContact {
        contact_id: row.try_get("contact_id")?,
        cvu: row.try_get("cvu")?,
        full_name: row.try_get("full_name")?,
        alias: row.try_get("alias")?,
        phone: row.try_get("phone")?,
        avatar: row.try_get("avatar")?,
        has_dolar_app: row.try_get("has_dolar_app")?,
        is_saved: row.try_get("is_saved")?,
        last_transaction_date,
        transaction_count: row.try_get("transaction_count")?,
        surrogate_key: row.try_get("surrogate_key")?,
    })
}
