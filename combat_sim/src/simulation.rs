//! Batch combat simulation

use combat_core::prelude::*;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Which enemy each run fights
#[derive(Debug, Clone)]
pub enum Opponent {
    Fixed(String),
    /// Random encounter at a danger level
    Danger(u32),
}

/// How the automated player behaves
#[derive(Debug, Clone)]
pub struct Strategy {
    /// Item to use when health drops below `low_health`
    pub emergency_item: Option<String>,
    /// Fraction of max health
    pub low_health: f64,
    pub max_rounds: u32,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy {
            emergency_item: None,
            low_health: 0.3,
            max_rounds: 200,
        }
    }
}

impl Strategy {
    /// Attack every round, using the emergency item while low if one is left
    pub fn choose(&self, player: &PlayerCombatant) -> PlayerAction {
        let low = (player.health as f64) < player.max_health as f64 * self.low_health;
        match &self.emergency_item {
            Some(item_id) if low && player.inventory.contains(item_id) => {
                PlayerAction::UseItem(item_id.clone())
            }
            _ => PlayerAction::Attack,
        }
    }
}

/// Aggregated results over many combats
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    pub runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub fled: u32,
    /// Combats abandoned at the round limit
    pub stalled: u32,
    pub total_rounds: u64,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
    pub total_exp: u64,
    pub total_gold: u64,
    pub items_used: u32,
}

impl SimulationReport {
    fn rate(&self, count: u32) -> f64 {
        if self.runs > 0 {
            count as f64 / self.runs as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.victories)
    }

    pub fn defeat_rate(&self) -> f64 {
        self.rate(self.defeats)
    }

    pub fn flee_rate(&self) -> f64 {
        self.rate(self.fled)
    }

    pub fn avg_rounds(&self) -> f64 {
        if self.runs > 0 {
            self.total_rounds as f64 / self.runs as f64
        } else {
            0.0
        }
    }

    fn record(&mut self, summary: &CombatSummary) {
        match summary.outcome {
            RoundOutcome::Victory => self.victories += 1,
            RoundOutcome::Defeat => self.defeats += 1,
            RoundOutcome::Fled => self.fled += 1,
            RoundOutcome::Continuing => self.stalled += 1,
        }
        self.total_rounds += summary.rounds as u64;
        self.total_damage_dealt += summary.damage_dealt;
        self.total_damage_taken += summary.damage_taken;
        if let Some(reward) = &summary.reward {
            self.total_exp += reward.exp as u64;
            self.total_gold += reward.gold as u64;
        }
    }
}

/// Fight `runs` independent combats with a fresh copy of `player` each time
#[allow(clippy::too_many_arguments)]
pub fn run_simulation(
    player: &PlayerCombatant,
    opponent: &Opponent,
    strategy: &Strategy,
    runs: u32,
    registry: &EnemyRegistry,
    catalog: &ItemCatalog,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> Result<SimulationReport, CombatError> {
    let mut report = SimulationReport::default();

    for run in 0..runs {
        let enemy_id = match opponent {
            Opponent::Fixed(id) => id.clone(),
            Opponent::Danger(level) => registry
                .random_encounter(*level, rng)
                .map(|e| e.id.clone())
                .ok_or_else(|| CombatError::UnknownEnemy(format!("danger level {}", level)))?,
        };

        let mut session = CombatSession::new(constants.clone());
        session.begin(player.clone(), &enemy_id, registry)?;

        let mut rounds = 0;
        while !session.phase().is_terminal() && rounds < strategy.max_rounds {
            let action = match session.player() {
                Some(current) => strategy.choose(current),
                None => PlayerAction::Attack,
            };
            if matches!(action, PlayerAction::UseItem(_)) {
                report.items_used += 1;
            }
            session.submit(action, catalog, rng)?;
            rounds += 1;
        }

        report.runs += 1;
        match session.summary() {
            Some(summary) => report.record(summary),
            None => {
                debug!(run, enemy = %enemy_id, "combat stalled");
                report.stalled += 1;
                report.total_rounds += rounds as u64;
                if let Some(state) = session.state() {
                    report.total_damage_dealt += state.damage_dealt;
                    report.total_damage_taken += state.damage_taken;
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(
        player: &PlayerCombatant,
        opponent: Opponent,
        strategy: &Strategy,
        runs: u32,
    ) -> SimulationReport {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        run_simulation(
            player,
            &opponent,
            strategy,
            runs,
            &default_enemies(),
            &default_items(),
            &CombatConstants::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_strong_player_beats_slime() {
        let player = PlayerCombatant::new("Hero", 10, 300, 60, 30);
        let report = run(&player, Opponent::Fixed("slime".to_string()), &Strategy::default(), 50);

        assert_eq!(report.runs, 50);
        assert_eq!(report.victories, 50);
        assert!((report.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.total_exp, 100);
    }

    #[test]
    fn test_counts_add_up() {
        let player = PlayerCombatant::new("Hero", 3, 100, 15, 5);
        let report = run(&player, Opponent::Danger(2), &Strategy::default(), 100);

        assert_eq!(
            report.victories + report.defeats + report.fled + report.stalled,
            report.runs
        );
        assert!(report.avg_rounds() >= 1.0);
    }

    #[test]
    fn test_emergency_item_used_when_low() {
        let strategy = Strategy {
            emergency_item: Some("smoke_bomb".to_string()),
            low_health: 0.5,
            max_rounds: 200,
        };
        let player = PlayerCombatant::new("Hero", 1, 100, 10, 0)
            .with_item("smoke_bomb", 1)
            .with_health(40);

        assert_eq!(strategy.choose(&player), PlayerAction::UseItem("smoke_bomb".to_string()));

        let report = run(&player, Opponent::Fixed("vibe_overlord".to_string()), &strategy, 5);
        assert_eq!(report.fled, 5);
        assert_eq!(report.items_used, 5);
    }

    #[test]
    fn test_unknown_enemy_is_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = run_simulation(
            &PlayerCombatant::new("Hero", 1, 100, 10, 0),
            &Opponent::Fixed("dragon".to_string()),
            &Strategy::default(),
            1,
            &default_enemies(),
            &default_items(),
            &CombatConstants::default(),
            &mut rng,
        );
        assert_eq!(result.unwrap_err(), CombatError::UnknownEnemy("dragon".to_string()));
    }
}
