use crate::repositories::{from_millis, to_millis};
use crate::{DbError, Result as DbErrorResult};

use dw_core::{CachedUser, OnboardingStatus};

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "users";
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = r#"
    SELECT id, local_id, remote_id, email, given_name, family_name, phone,
           document_type, document_number, birth_date, nationality, address,
           is_pep, onboarding_status, created_at, updated_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the profile under its current cache key.
    pub async fn create(&self, user: &CachedUser) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, local_id, remote_id, email, given_name, family_name, phone,
                document_type, document_number, birth_date, nationality, address,
                is_pep, onboarding_status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.cache_key())
        .bind(&user.local_id)
        .bind(&user.remote_id)
        .bind(&user.email)
        .bind(&user.given_name)
        .bind(&user.family_name)
        .bind(&user.phone)
        .bind(&user.document_type)
        .bind(&user.document_number)
        .bind(user.birth_date.map(|d| d.format(BIRTH_DATE_FORMAT).to_string()))
        .bind(&user.nationality)
        .bind(&user.address)
        .bind(user.is_pep)
        .bind(user.onboarding_status.as_str())
        .bind(to_millis(user.created_at))
        .bind(to_millis(user.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Overwrite the mutable profile fields of the row keyed by `user.cache_key()`.
    pub async fn update(&self, user: &CachedUser) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, given_name = ?, family_name = ?, phone = ?,
                document_type = ?, document_number = ?, birth_date = ?,
                nationality = ?, address = ?, is_pep = ?, onboarding_status = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.given_name)
        .bind(&user.family_name)
        .bind(&user.phone)
        .bind(&user.document_type)
        .bind(&user.document_number)
        .bind(user.birth_date.map(|d| d.format(BIRTH_DATE_FORMAT).to_string()))
        .bind(&user.nationality)
        .bind(&user.address)
        .bind(user.is_pep)
        .bind(user.onboarding_status.as_str())
        .bind(to_millis(user.updated_at))
        .bind(user.cache_key())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(user.cache_key()));
        }

        Ok(())
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<CachedUser>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Look a profile up by its pre-registration identifier.
    pub async fn find_by_local_id(&self, local_id: &str) -> DbErrorResult<Option<CachedUser>> {
        let row = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE local_id = ? ORDER BY updated_at DESC LIMIT 1"
        ))
        .bind(local_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Most recently updated profile, if any.
    pub async fn find_latest(&self) -> DbErrorResult<Option<CachedUser>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY updated_at DESC LIMIT 1"))
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn set_onboarding_status(
        &self,
        key: &str,
        status: OnboardingStatus,
    ) -> DbErrorResult<()> {
        let result =
            sqlx::query("UPDATE users SET onboarding_status = ?, updated_at = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(to_millis(Utc::now()))
                .bind(key)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(key));
        }

        Ok(())
    }

    /// Move the profile row keyed by `old_key` to `remote_id`.
    ///
    /// Copies the row under the new key, re-points its messages, then deletes the old
    /// row, all in one transaction. If a row already exists under `remote_id` it is kept
    /// and only the messages move.
    pub async fn rekey(&self, old_key: &str, remote_id: &str) -> DbErrorResult<CachedUser> {
        let mut tx = self.pool.begin().await?;

        let old_row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(old_key)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::user_not_found(old_key))?;
        let mut user = map_user(&old_row)?;

        if old_key == remote_id {
            tx.commit().await?;
            return Ok(user);
        }

        let existing = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(remote_id)
            .fetch_optional(&mut *tx)
            .await?;

        match existing {
            Some(row) => {
                user = map_user(&row)?;
            }
            None => {
                user.remote_id = Some(remote_id.to_string());
                user.updated_at = Utc::now();

                sqlx::query(
                    r#"
                    INSERT INTO users (
                        id, local_id, remote_id, email, given_name, family_name, phone,
                        document_type, document_number, birth_date, nationality, address,
                        is_pep, onboarding_status, created_at, updated_at
                    )
                    SELECT ?, local_id, ?, email, given_name, family_name, phone,
                           document_type, document_number, birth_date, nationality, address,
                           is_pep, onboarding_status, created_at, ?
                    FROM users WHERE id = ?
                    "#,
                )
                .bind(remote_id)
                .bind(remote_id)
                .bind(to_millis(user.updated_at))
                .bind(old_key)
                .execute(&mut *tx)
                .await?;
            }
        }

        sqlx::query("UPDATE messages SET user_id = ? WHERE user_id = ?")
            .bind(remote_id)
            .bind(old_key)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(old_key)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        log::info!("Re-keyed cached user {old_key} -> {remote_id}");

        Ok(user)
    }

    /// Delete a profile together with its conversation.
    pub async fn delete(&self, key: &str) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM messages WHERE user_id = ?")
            .bind(key)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(key)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<CachedUser> {
    let status: String = row.try_get("onboarding_status")?;
    let onboarding_status =
        OnboardingStatus::from_str(&status).map_err(|e| DbError::decode(TABLE, e.to_string()))?;

    let birth_date = row
        .try_get::<Option<String>, _>("birth_date")?
        .map(|s| NaiveDate::parse_from_str(&s, BIRTH_DATE_FORMAT))
        .transpose()
        .map_err(|e| DbError::decode(TABLE, format!("birth_date: {e}")))?;

    Ok(CachedUser {
        local_id: row.try_get("local_id")?,
        remote_id: row.try_get("remote_id")?,
        email: row.try_get("email")?,
        given_name: row.try_get("given_name")?,
        family_name: row.try_get("family_name")?,
        phone: row.try_get("phone")?,
        document_type: row.try_get("document_type")?,
        document_number: row.try_get("document_number")?,
        birth_date,
        nationality: row.try_get("nationality")?,
        address: row.try_get("address")?,
        is_pep: row.try_get("is_pep")?,
        onboarding_status,
        created_at: from_millis(TABLE, row.try_get("created_at")?)?,
        updated_at: from_millis(TABLE, row.try_get("updated_at")?)?,
    })
}
