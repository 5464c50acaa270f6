use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded squad victory. Wins are immutable - the ledger only ever
/// appends new records or deletes old ones by id.
///
/// The serialized form matches the stored blob exactly: a JSON object with
/// `id`, `players`, `date` (YYYY-MM-DD) and `createdAt` (RFC 3339) fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadWin {
    /// Opaque unique identifier, assigned at creation. Sole deletion key.
    pub id: String,
    /// Display names of the winning squad members, in selection order.
    pub players: Vec<String>,
    /// Calendar day (UTC) the win is attributed to.
    pub date: NaiveDate,
    /// When the win was recorded. Ordering and display only, never identity.
    pub created_at: DateTime<Utc>,
}

impl SquadWin {
    /// Create a new win for the given players, stamped with the current
    /// instant. `date` is derived from `created_at`, not caller-supplied.
    pub fn new(players: Vec<String>) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            players,
            date: created_at.date_naive(),
            created_at,
        }
    }
}
