use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{normalize_players, participation, PlayerParticipation, SquadWin};
use crate::storage::DynKvStore;

use super::AppError;

/// Storage key holding the entire win list as one JSON document.
pub const SQUAD_WINS_KEY: &str = "squad-wins";

/// Application service providing high-level operations over the win ledger.
/// This is the primary interface for any client (HTTP API, tests, etc.).
///
/// Every mutation reads the whole stored document, edits it in memory and
/// writes it back. A per-service mutex serializes that cycle, so concurrent
/// appends through one service never overwrite each other. The lock is
/// process-local: running several instances against the same store
/// reintroduces the lost-update race, so deploy a single writer per store.
pub struct LedgerService {
    store: DynKvStore,
    admin_token: Option<String>,
    write_lock: Mutex<()>,
}

impl LedgerService {
    /// Create a new ledger service on top of the given store. If
    /// `admin_token` is set, deletions must present a matching token.
    pub fn new(store: DynKvStore, admin_token: Option<String>) -> Self {
        Self {
            store,
            admin_token,
            write_lock: Mutex::new(()),
        }
    }

    /// List all recorded wins in insertion order.
    ///
    /// Never fails the caller: if the store is unreachable or the document
    /// is unparseable, returns an empty list so read-only clients degrade
    /// to "no wins yet" instead of erroring.
    pub async fn list(&self) -> Vec<SquadWin> {
        match self.load().await {
            Ok(wins) => wins,
            Err(err) => {
                warn!("Failed to load win ledger, serving empty list: {err:#}");
                Vec::new()
            }
        }
    }

    /// Record a new win for the given players and return the stored record.
    ///
    /// Names are trimmed and blank entries dropped; the cleaned list must
    /// not be empty. Unlike reads, a load failure here is surfaced as an
    /// error: appending to a list we could not read would truncate the
    /// ledger to a single record on write-back.
    pub async fn append(&self, players: Vec<String>) -> Result<SquadWin, AppError> {
        let players = normalize_players(&players);
        if players.is_empty() {
            return Err(AppError::Validation("Players array is required".to_string()));
        }

        let _guard = self.write_lock.lock().await;

        let mut wins = self.load().await?;
        let win = SquadWin::new(players);
        wins.push(win.clone());
        self.save(&wins).await?;

        info!(id = %win.id, players = win.players.len(), "Recorded squad win");
        Ok(win)
    }

    /// Delete the win with the given id.
    ///
    /// When an admin token is configured the caller must present it.
    /// Deleting an id that is not in the ledger still succeeds, so retried
    /// deletes are harmless.
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::Validation("ID is required".to_string()));
        }
        self.authorize(token)?;

        let _guard = self.write_lock.lock().await;

        let wins = self.load().await?;
        let remaining: Vec<SquadWin> = wins.into_iter().filter(|win| win.id != id).collect();
        self.save(&remaining).await?;

        info!(id, "Deleted squad win");
        Ok(())
    }

    /// Per-player participation tally, most wins first. Shares the read
    /// path with [`list`](Self::list), including its fail-open behavior.
    pub async fn leaderboard(&self) -> Vec<PlayerParticipation> {
        participation(&self.list().await)
    }

    fn authorize(&self, token: Option<&str>) -> Result<(), AppError> {
        match &self.admin_token {
            Some(expected) if token != Some(expected.as_str()) => Err(AppError::Unauthorized),
            _ => Ok(()),
        }
    }

    async fn load(&self) -> Result<Vec<SquadWin>> {
        let raw = self.store.get(SQUAD_WINS_KEY).await?;
        match raw {
            Some(raw) => serde_json::from_str(&raw).context("Failed to parse stored win ledger"),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, wins: &[SquadWin]) -> Result<()> {
        let raw = serde_json::to_string(wins).context("Failed to serialize win ledger")?;
        self.store.set(SQUAD_WINS_KEY, &raw).await
    }
}
