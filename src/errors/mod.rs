use thiserror::Error;

/// Reasons a league snapshot is refused before it reaches the engine
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("player id must not be empty (name: {name:?})")]
    EmptyPlayerId { name: String },

    #[error("duplicate player id: {0}")]
    DuplicatePlayerId(String),

    #[error("player name {name:?} clashes with existing player {existing:?}")]
    DuplicatePlayerName { name: String, existing: String },

    #[error("tournament id must not be empty (name: {name:?})")]
    EmptyTournamentId { name: String },

    #[error("duplicate tournament id: {0}")]
    DuplicateTournamentId(String),

    #[error("player {player_id} appears more than once in tournament {tournament_id}")]
    DuplicateResult {
        tournament_id: String,
        player_id: String,
    },
}

/// Add context to snapshot file errors
pub fn snapshot_context(path: &str) -> String {
    format!("Failed to read league snapshot from: {}", path)
}

