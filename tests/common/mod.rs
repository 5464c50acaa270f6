// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use squadlog::application::LedgerService;
use squadlog::storage::{DynKvStore, KvStore, MemoryStore, SqliteStore};
use tempfile::TempDir;

/// Helper to create a memory-backed service with no deletion token
pub fn memory_service() -> LedgerService {
    LedgerService::new(Arc::new(MemoryStore::new()), None)
}

/// Helper to create a memory-backed service gated by a deletion token
pub fn secured_service(token: &str) -> LedgerService {
    LedgerService::new(Arc::new(MemoryStore::new()), Some(token.to_string()))
}

/// Helper to create a temporary directory and the URL of a SQLite database
/// inside it
pub fn temp_db() -> Result<(String, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    Ok((format!("sqlite:{}?mode=rwc", db_path.display()), temp_dir))
}

/// Helper to create a service over a temporary SQLite database
pub async fn sqlite_service() -> Result<(LedgerService, TempDir)> {
    let (db_url, temp_dir) = temp_db()?;
    let store = SqliteStore::init(&db_url).await?;
    Ok((LedgerService::new(Arc::new(store), None), temp_dir))
}

/// Store wrapper whose reads and/or writes fail, for exercising outage
/// behavior. Non-failing operations pass through to the wrapped store.
pub struct FailingStore {
    fail_reads: bool,
    fail_writes: bool,
    inner: Arc<MemoryStore>,
}

impl FailingStore {
    pub fn new(inner: Arc<MemoryStore>, fail_reads: bool, fail_writes: bool) -> Self {
        Self {
            fail_reads,
            fail_writes,
            inner,
        }
    }
}

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            bail!("store unreachable");
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            bail!("store unreachable");
        }
        self.inner.set(key, value).await
    }
}

/// Helper to create a service over a [`FailingStore`]. Also returns the
/// wrapped store so tests can inspect what was (or was not) written.
pub fn failing_service(fail_reads: bool, fail_writes: bool) -> (LedgerService, Arc<MemoryStore>) {
    let inner = Arc::new(MemoryStore::new());
    let store: DynKvStore = Arc::new(FailingStore::new(
        Arc::clone(&inner),
        fail_reads,
        fail_writes,
    ));
    (LedgerService::new(store, None), inner)
}
