use serde::Serialize;

use super::SquadWin;

/// Normalize a raw player list: trim surrounding whitespace from each name
/// and drop entries that are empty after trimming. Order is preserved.
pub fn normalize_players(players: &[String]) -> Vec<String> {
    players
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Per-player participation tally derived from the win ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParticipation {
    pub username: String,
    pub squad_wins: u64,
}

/// Count how many wins each player appears in, sorted by win count
/// descending. Ties keep the order players were first seen in the ledger.
pub fn participation(wins: &[SquadWin]) -> Vec<PlayerParticipation> {
    let mut tally: Vec<PlayerParticipation> = Vec::new();

    for win in wins {
        for player in &win.players {
            match tally.iter_mut().find(|entry| entry.username == *player) {
                Some(entry) => entry.squad_wins += 1,
                None => tally.push(PlayerParticipation {
                    username: player.clone(),
                    squad_wins: 1,
                }),
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    tally.sort_by(|a, b| b.squad_wins.cmp(&a.squad_wins));
    tally
}
