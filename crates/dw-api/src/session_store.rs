use crate::Result;
use crate::models::SessionTokens;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Secure token storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<SessionTokens>>;

    async fn save(&self, tokens: &SessionTokens) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

/// Process-local store for tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    tokens: RwLock<Option<SessionTokens>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<SessionTokens>> {
        Ok(self.tokens.read().await.clone())
    }

    async fn save(&self, tokens: &SessionTokens) -> Result<()> {
        *self.tokens.write().await = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.tokens.write().await = None;
        Ok(())
    }
}
