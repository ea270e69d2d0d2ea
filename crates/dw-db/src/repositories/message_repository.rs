use crate::repositories::{from_millis, to_millis};
use crate::{DbError, Result as DbErrorResult};

use dw_core::{Message, MessageRole};

use std::str::FromStr;

use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "messages";

pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one message. The owning user row must exist.
    pub async fn create(&self, message: &Message) -> DbErrorResult<()> {
        let metadata = match &message.metadata {
            Value::Null => None,
            other => Some(other.to_string()),
        };

        sqlx::query(
            r#"
            INSERT INTO messages (id, user_id, role, content, timestamp, metadata)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(&message.user_id)
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(to_millis(message.timestamp))
        .bind(metadata)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Conversation for `user_id`, oldest first.
    pub async fn find_by_user(&self, user_id: &str) -> DbErrorResult<Vec<Message>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, role, content, timestamp, metadata
            FROM messages
            WHERE user_id = ?
            ORDER BY timestamp ASC, rowid ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_message).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_message(row: &SqliteRow) -> DbErrorResult<Message> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let metadata: Option<String> = row.try_get("metadata")?;

    Ok(Message {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(TABLE, format!("id: {e}")))?,
        user_id: row.try_get("user_id")?,
        role: MessageRole::from_str(&role).map_err(|e| DbError::decode(TABLE, e.to_string()))?,
        content: row.try_get("content")?,
        timestamp: from_millis(TABLE, row.try_get("timestamp")?)?,
        metadata: metadata
            .map(|m| serde_json::from_str(&m))
            .transpose()
            .map_err(|e| DbError::decode(TABLE, format!("metadata: {e}")))?
            .unwrap_or(Value::Null),
    })
}
