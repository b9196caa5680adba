//! Combat errors

use thiserror::Error;

/// A rejected combat request; the session is left untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Item '{item_id}' is not available for use in combat")]
    ItemNotFound { item_id: String },
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Unknown enemy '{0}'")]
    UnknownEnemy(String),
}
