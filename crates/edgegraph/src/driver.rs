use crate::{Params, Query};

use async_trait::async_trait;
use std::sync::Arc;

/// Runs query text against a database.
///
/// The query builders never call an executor themselves; they only produce
/// text and parameters suitable for one. The schema validator is the one
/// consumer inside this crate.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Runs `text` with named parameters and returns every row as JSON.
    async fn query(&self, text: &str, params: &Params) -> anyhow::Result<Vec<serde_json::Value>>;

    async fn run(&self, query: &Query) -> anyhow::Result<Vec<serde_json::Value>> {
        self.query(&query.text, &query.params).await
    }
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for Arc<E> {
    async fn query(&self, text: &str, params: &Params) -> anyhow::Result<Vec<serde_json::Value>> {
        (**self).query(text, params).await
    }
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for &E {
    async fn query(&self, text: &str, params: &Params) -> anyhow::Result<Vec<serde_json::Value>> {
        (**self).query(text, params).await
    }
}
