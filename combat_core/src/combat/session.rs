//! CombatSession - Owns one combat from begin to its terminal round

use super::{
    resolve_round, CombatError, CombatState, CombatSummary, PlayerAction, RoundOutcome,
    RoundReport,
};
use crate::config::CombatConstants;
use crate::effect::StatusEffect;
use crate::enemy::{CombatEnemy, EnemyRegistry};
use crate::item::ItemCatalog;
use crate::player::PlayerCombatant;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatPhase {
    /// No combat has begun
    Idle,
    AwaitingAction,
    Victory,
    Defeat,
    Fled,
}

impl CombatPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat | CombatPhase::Fled)
    }
}

impl From<RoundOutcome> for CombatPhase {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Continuing => CombatPhase::AwaitingAction,
            RoundOutcome::Victory => CombatPhase::Victory,
            RoundOutcome::Defeat => CombatPhase::Defeat,
            RoundOutcome::Fled => CombatPhase::Fled,
        }
    }
}

/// A single combat driven one action at a time
///
/// Rounds are committed only when they resolve successfully. When combat
/// ends the enemy is discarded; the player snapshot stays readable so the
/// caller can copy health and inventory back.
#[derive(Debug, Clone)]
pub struct CombatSession {
    constants: CombatConstants,
    phase: CombatPhase,
    state: Option<CombatState>,
    player: Option<PlayerCombatant>,
    summary: Option<CombatSummary>,
}

impl CombatSession {
    pub fn new(constants: CombatConstants) -> Self {
        CombatSession {
            constants,
            phase: CombatPhase::Idle,
            state: None,
            player: None,
            summary: None,
        }
    }

    /// Start combat against a registered enemy
    ///
    /// Allowed when idle or after a finished combat; a combat in progress
    /// must end first.
    pub fn begin(
        &mut self,
        player: PlayerCombatant,
        enemy_id: &str,
        registry: &EnemyRegistry,
    ) -> Result<(), CombatError> {
        if self.phase == CombatPhase::AwaitingAction {
            warn!(enemy = enemy_id, "begin rejected: combat in progress");
            return Err(CombatError::InvalidAction(
                "a combat is already in progress".to_string(),
            ));
        }
        let definition = registry
            .get(enemy_id)
            .ok_or_else(|| CombatError::UnknownEnemy(enemy_id.to_string()))?;

        let enemy =
            CombatEnemy::from_definition(definition, registry.stat_overrides(), &self.constants);
        info!(enemy = enemy_id, player_level = player.level, "combat started");

        self.state = Some(CombatState::new(player, enemy));
        self.player = None;
        self.summary = None;
        self.phase = CombatPhase::AwaitingAction;
        Ok(())
    }

    /// Resolve one player action
    pub fn submit(
        &mut self,
        action: PlayerAction,
        catalog: &ItemCatalog,
        rng: &mut impl Rng,
    ) -> Result<RoundReport, CombatError> {
        let state = match (&self.state, self.phase) {
            (Some(state), CombatPhase::AwaitingAction) => state,
            (_, phase) => {
                warn!(?phase, ?action, "action rejected");
                let reason = if phase.is_terminal() {
                    "combat has already ended"
                } else {
                    "no combat in progress"
                };
                return Err(CombatError::InvalidAction(reason.to_string()));
            }
        };

        let (next, report) = resolve_round(state, &action, catalog, &self.constants, rng)?;
        self.phase = report.outcome.into();

        if report.outcome.is_terminal() {
            self.summary = Some(CombatSummary {
                enemy_id: next.enemy.id.clone(),
                enemy_name: next.enemy.name.clone(),
                outcome: report.outcome,
                rounds: next.round,
                damage_dealt: next.damage_dealt,
                damage_taken: next.damage_taken,
                reward: report.reward.clone(),
            });
            self.player = Some(next.player);
            self.state = None;
        } else {
            self.state = Some(next);
        }

        Ok(report)
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Current state while combat is in progress
    pub fn state(&self) -> Option<&CombatState> {
        self.state.as_ref()
    }

    /// The player, during combat or as it ended
    pub fn player(&self) -> Option<&PlayerCombatant> {
        self.state.as_ref().map(|s| &s.player).or(self.player.as_ref())
    }

    /// The enemy; gone once combat ends
    pub fn enemy(&self) -> Option<&CombatEnemy> {
        self.state.as_ref().map(|s| &s.enemy)
    }

    pub fn player_effects(&self) -> &[StatusEffect] {
        self.state.as_ref().map(|s| s.player_effects.as_slice()).unwrap_or_default()
    }

    pub fn player_buffs(&self) -> &[StatusEffect] {
        self.state.as_ref().map(|s| s.player_buffs.as_slice()).unwrap_or_default()
    }

    /// Set once combat reaches a terminal phase
    pub fn summary(&self) -> Option<&CombatSummary> {
        self.summary.as_ref()
    }
}

impl Default for CombatSession {
    fn default() -> Self {
        Self::new(CombatConstants::default())
    }
}
