//! Repository listing contract. Credentials travel with every call; nothing
//! in the process holds a "current" token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::file::Result;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub user_id: String,
    pub token: String,
}

impl UserCredential {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredential")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait RepositoryLister: Send + Sync {
    /// Most recently updated first. An invalid token fails with `Validation`.
    async fn list_repositories(&self, credential: &UserCredential) -> Result<Vec<Repository>>;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/repos.rs"]
mod tests;
