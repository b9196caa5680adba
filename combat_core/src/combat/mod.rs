//! Combat resolution - The round state machine and the session around it

mod error;
mod result;
mod round;
mod session;
mod state;

pub use error::CombatError;
pub use result::{CombatSummary, RoundOutcome, RoundReport};
pub use round::{flee_chance, resolve_round};
pub use session::{CombatPhase, CombatSession};
pub use state::{CombatState, PlayerAction};
