use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// String-keyed blob storage. The ledger persists its entire record list
/// as one JSON document under a single key, so the interface is just
/// point reads and whole-value writes.
///
/// Implementations must be safe to share across tasks; callers hold them
/// behind an `Arc`.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Shared handle to a [`KvStore`], as injected into the service layer.
pub type DynKvStore = Arc<dyn KvStore>;
