//! Round resolution
//!
//! One round, in order:
//! 1. Player DOTs tick; death here ends combat before anyone acts
//! 2. Player buffs tick; effective player stats are fixed for the round
//! 3. The player's action resolves (attack, flee or item)
//! 4. A dead enemy yields rewards and skips its turn
//! 5. Enemy buffs tick, then the enemy acts
//! 6. A dead player ends combat

use super::{CombatError, CombatState, PlayerAction, RoundOutcome, RoundReport};
use crate::config::CombatConstants;
use crate::damage::{resolve_attack, Strike};
use crate::effect::{effective_stat, tick_buffs, tick_effects, StatusEffect};
use crate::item::{Item, ItemCatalog, ItemEffect};
use crate::reward::roll_reward;
use crate::rng::roll_chance;
use crate::skill::resolve_enemy_turn;
use crate::stats::{player_combat_stats, PlayerCombatStats};
use crate::types::StatKind;
use rand::Rng;
use tracing::{debug, info, warn};

/// Chance to escape, from player level against location danger
pub fn flee_chance(player_level: u32, danger_level: u32, constants: &CombatConstants) -> f64 {
    let c = &constants.flee;
    let margin = player_level as f64 - danger_level as f64 * c.danger_weight;
    (c.base_chance + margin * c.step).clamp(c.min_chance, c.max_chance)
}

/// Resolve one round against `state`
///
/// The input is never mutated. On success the caller gets the next state
/// with the report; on error nothing happened.
pub fn resolve_round(
    state: &CombatState,
    action: &PlayerAction,
    catalog: &ItemCatalog,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> Result<(CombatState, RoundReport), CombatError> {
    let choice = match action {
        PlayerAction::Attack => Choice::Attack,
        PlayerAction::Flee => Choice::Flee,
        PlayerAction::UseItem(item_id) => {
            let (item, effect) = usable_item(state, item_id, catalog)?;
            Choice::Item(item, effect)
        }
    };

    let mut round = RoundBuilder::new(state);

    // 1. damage over time
    let tick = tick_effects(&round.next.player_effects);
    round.next.player_effects = tick.remaining;
    round.narration.extend(tick.narrations);
    round.hurt_player(tick.total_damage);
    if round.next.player.is_defeated() {
        round.narration.push(format!(
            "You succumb to your wounds against {}.",
            round.next.enemy.name
        ));
        return Ok(round.finish(RoundOutcome::Defeat));
    }

    // 2. buffs and effective stats
    round.next.player_buffs = tick_buffs(&round.next.player_buffs);
    let stats = round.effective_player_stats(constants);

    // 3. player action
    let escaped = match choice {
        Choice::Flee => round.attempt_flee(constants, rng),
        Choice::Item(item, effect) => round.use_item(item, effect),
        Choice::Attack => {
            round.player_attack(&stats, constants, rng);
            false
        }
    };
    if escaped {
        return Ok(round.finish(RoundOutcome::Fled));
    }

    // 4. enemy defeated
    if round.next.enemy.is_defeated() {
        let reward = roll_reward(&round.next.enemy, rng);
        round.narration.push(format!(
            "You defeated {}! Gained {} exp and {} gold.",
            round.next.enemy.name, reward.exp, reward.gold
        ));
        round.reward = Some(reward);
        return Ok(round.finish(RoundOutcome::Victory));
    }

    // 5. enemy turn
    round.enemy_turn(&stats, constants, rng);

    // 6. player defeated
    if round.next.player.is_defeated() {
        round.narration.push(format!(
            "You have been defeated by {}...",
            round.next.enemy.name
        ));
        return Ok(round.finish(RoundOutcome::Defeat));
    }

    Ok(round.finish(RoundOutcome::Continuing))
}

/// A validated player action
enum Choice<'a> {
    Attack,
    Flee,
    Item(&'a Item, &'a ItemEffect),
}

/// Look up an item the player wants to use, rejecting anything unusable
fn usable_item<'a>(
    state: &CombatState,
    item_id: &str,
    catalog: &'a ItemCatalog,
) -> Result<(&'a Item, &'a ItemEffect), CombatError> {
    let usable = catalog
        .get(item_id)
        .filter(|item| item.is_combat_usable())
        .filter(|_| state.player.inventory.contains(item_id))
        .and_then(|item| item.effect.as_ref().map(|effect| (item, effect)));

    usable.ok_or_else(|| {
        warn!(item = item_id, "rejected item use");
        CombatError::ItemNotFound {
            item_id: item_id.to_string(),
        }
    })
}

/// Working copy of the state plus what this round has produced so far
struct RoundBuilder {
    next: CombatState,
    narration: Vec<String>,
    damage_dealt: u32,
    damage_taken: u32,
    consumed_item: Option<String>,
    reward: Option<crate::reward::Reward>,
}

impl RoundBuilder {
    fn new(state: &CombatState) -> Self {
        let mut next = state.clone();
        next.round += 1;
        RoundBuilder {
            next,
            narration: Vec::new(),
            damage_dealt: 0,
            damage_taken: 0,
            consumed_item: None,
            reward: None,
        }
    }

    fn hurt_player(&mut self, amount: u32) {
        self.next.player.take_damage(amount);
        self.damage_taken += amount;
        self.next.damage_taken += amount as u64;
    }

    fn hurt_enemy(&mut self, amount: u32) {
        self.next.enemy.take_damage(amount);
        self.damage_dealt += amount;
        self.next.damage_dealt += amount as u64;
    }

    fn effective_player_stats(&self, constants: &CombatConstants) -> PlayerCombatStats {
        let base = player_combat_stats(&self.next.player, constants);
        PlayerCombatStats {
            attack: effective_stat(base.attack, &self.next.player_buffs, StatKind::Attack),
            defense: effective_stat(base.defense, &self.next.player_buffs, StatKind::Defense),
            ..base
        }
    }

    /// Returns true when the player got away
    fn attempt_flee(&mut self, constants: &CombatConstants, rng: &mut impl Rng) -> bool {
        let chance = flee_chance(
            self.next.player.level,
            self.next.enemy.danger_level,
            constants,
        );
        debug!(chance, "flee attempt");

        if roll_chance(chance, rng) {
            self.narration.push("You escaped safely!".to_string());
            true
        } else {
            self.narration.push(format!(
                "You failed to escape from {}!",
                self.next.enemy.name
            ));
            false
        }
    }

    /// Spend one unit and apply its effect; returns true when it ends combat
    fn use_item(&mut self, item: &Item, effect: &ItemEffect) -> bool {
        self.next.player.inventory.remove_one(&item.id);
        self.consumed_item = Some(item.id.clone());
        debug!(item = %item.id, "item used");

        match *effect {
            ItemEffect::GuaranteeFlee => {
                self.narration
                    .push(format!("You use {} and escape safely!", item.name));
                return true;
            }
            ItemEffect::DealDamage { amount } => {
                self.hurt_enemy(amount);
                self.narration.push(format!(
                    "You use {}! It deals {} damage to {}.",
                    item.name, amount, self.next.enemy.name
                ));
            }
            ItemEffect::ElementalDamage { element, amount } => {
                self.hurt_enemy(amount);
                self.narration.push(format!(
                    "You use {}! A burst of {} deals {} damage to {}.",
                    item.name, element, amount, self.next.enemy.name
                ));
            }
            ItemEffect::TempBuff {
                stat,
                amount,
                duration,
            } => {
                let buff = StatusEffect::buff(&item.id, &item.name, stat, amount, duration);
                self.next.player_buffs.push(buff);
                self.narration.push(format!(
                    "You use {}! Your {} rises by {} for {} turns.",
                    item.name, stat, amount, duration
                ));
            }
            ItemEffect::CureStatus => {
                self.next.player_effects.clear();
                self.narration
                    .push(format!("You use {}. Your ailments are cured.", item.name));
            }
            ItemEffect::Heal { .. } | ItemEffect::PermanentStat { .. } => {
                self.narration
                    .push(format!("{} has no effect in combat.", item.name));
            }
        }
        false
    }

    fn player_attack(
        &mut self,
        stats: &PlayerCombatStats,
        constants: &CombatConstants,
        rng: &mut impl Rng,
    ) {
        let enemy = &self.next.enemy;
        let strike = Strike {
            attack: stats.attack as f64,
            defense: enemy.effective_defense(),
            attacker_level: stats.level,
            defender_level: enemy.level,
            crit_chance: stats.crit_chance,
        };
        let hit = resolve_attack(&strike, enemy.evasion_chance, constants, rng);

        let line = if hit.is_evaded {
            format!("{} dodges your attack!", enemy.name)
        } else if hit.is_critical {
            format!("Critical hit! You deal {} damage to {}!", hit.damage, enemy.name)
        } else {
            format!("You attack {} for {} damage.", enemy.name, hit.damage)
        };
        self.narration.push(line);
        self.hurt_enemy(hit.damage);
    }

    fn enemy_turn(
        &mut self,
        stats: &PlayerCombatStats,
        constants: &CombatConstants,
        rng: &mut impl Rng,
    ) {
        self.next.enemy.status_effects = tick_buffs(&self.next.enemy.status_effects);

        let turn = resolve_enemy_turn(&self.next.enemy, stats, constants, rng);
        self.narration.push(turn.narration);
        self.hurt_player(turn.hit.damage);
        if turn.heal > 0 {
            self.next.enemy.heal(turn.heal);
        }
        if let Some(effect) = turn.player_effect {
            self.next.player_effects.push(effect);
        }
        if let Some(effect) = turn.enemy_effect {
            self.next.enemy.status_effects.push(effect);
        }
    }

    fn finish(mut self, outcome: RoundOutcome) -> (CombatState, RoundReport) {
        if outcome == RoundOutcome::Defeat {
            self.next.player.health = self.next.player.health.max(0);
        }
        if outcome == RoundOutcome::Victory {
            self.next.enemy.health = self.next.enemy.health.max(0);
        }
        if outcome.is_terminal() {
            info!(
                enemy = %self.next.enemy.id,
                round = self.next.round,
                %outcome,
                "combat ended"
            );
        }

        let report = RoundReport {
            round: self.next.round,
            outcome,
            narration: self.narration,
            player_health: self.next.player.display_health(),
            enemy_health: self.next.enemy.display_health(),
            damage_dealt: self.damage_dealt,
            damage_taken: self.damage_taken,
            consumed_item: self.consumed_item,
            reward: self.reward,
        };
        (self.next, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{CombatEnemy, EnemyDefinition, GoldRange};
    use crate::item::{GrowthStat, Item};
    use crate::player::PlayerCombatant;
    use crate::rng::ScriptedRng;
    use crate::skill::{EnemySkill, SkillKind};
    use crate::stats::StatOverrides;
    use crate::types::Element;
    use rand::rngs::mock::StepRng;

    fn enemy(health: u32, attack: u32, defense: u32) -> CombatEnemy {
        let definition = EnemyDefinition {
            id: "slime".to_string(),
            name: "Slime".to_string(),
            description: String::new(),
            health,
            attack,
            defense,
            exp: 2,
            gold: GoldRange::new(1, 5),
            loot: vec![],
            danger_level: 1,
            skills: vec![],
        };
        let mut enemy = CombatEnemy::from_definition(
            &definition,
            &StatOverrides::new(),
            &CombatConstants::default(),
        );
        enemy.evasion_chance = 0.0;
        enemy
    }

    fn state() -> CombatState {
        CombatState::new(PlayerCombatant::new("Hero", 1, 100, 10, 0), enemy(15, 6, 2))
    }

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        catalog.register(Item::consumable("smoke_bomb", "Smoke Bomb", ItemEffect::GuaranteeFlee));
        catalog.register(Item::consumable("bomb", "Bomb", ItemEffect::DealDamage { amount: 30 }));
        catalog.register(Item::consumable(
            "fire_scroll",
            "Fire Scroll",
            ItemEffect::ElementalDamage { element: Element::Fire, amount: 40 },
        ));
        catalog.register(Item::consumable("herb", "Herb", ItemEffect::Heal { amount: 25 }));
        catalog.register(Item::consumable("antidote", "Antidote", ItemEffect::CureStatus));
        catalog.register(Item::consumable(
            "seed_of_strength",
            "Seed of Strength",
            ItemEffect::PermanentStat { stat: GrowthStat::Attack, amount: 1 },
        ));
        catalog.register(Item::consumable(
            "berserker_potion",
            "Berserker Potion",
            ItemEffect::TempBuff { stat: StatKind::Attack, amount: 10, duration: 3 },
        ));
        catalog
    }

    fn half() -> StepRng {
        // rand decodes 1 << 63 as exactly 0.5
        StepRng::new(1 << 63, 0)
    }

    #[test]
    fn test_flee_chance_clamped() {
        let constants = CombatConstants::default();
        assert!((flee_chance(1, 100, &constants) - 0.1).abs() < f64::EPSILON);
        assert!((flee_chance(100, 0, &constants) - 0.9).abs() < f64::EPSILON);
        assert!((flee_chance(2, 1, &constants) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_basic_attack_round() {
        let state = state();
        let constants = CombatConstants::default();
        let (next, report) =
            resolve_round(&state, &PlayerAction::Attack, &catalog(), &constants, &mut half())
                .unwrap();

        assert_eq!(report.outcome, RoundOutcome::Continuing);
        assert_eq!(report.damage_dealt, 9);
        assert_eq!(next.enemy.health, 6);
        assert_eq!(report.round, 1);
        // Input untouched
        assert_eq!(state.enemy.health, 15);
        assert_eq!(state.round, 0);
    }

    #[test]
    fn test_enemy_killed_skips_enemy_turn() {
        let constants = CombatConstants::default();
        let mut state = state();
        state.enemy.health = 9;
        // enemy evasion, variance 0.5, no crit, gold roll
        let mut rng = ScriptedRng::new([0.9, 0.5, 0.9, 0.0]);
        let (next, report) =
            resolve_round(&state, &PlayerAction::Attack, &catalog(), &constants, &mut rng)
                .unwrap();

        assert_eq!(report.outcome, RoundOutcome::Victory);
        assert_eq!(next.enemy.health, 0);
        assert_eq!(report.damage_taken, 0);
        assert_eq!(next.player.health, 100);
        let reward = report.reward.unwrap();
        assert_eq!(reward.exp, 2);
        assert_eq!(reward.gold, 1);
    }

    #[test]
    fn test_guarantee_flee_item() {
        let mut state = state();
        state.player.inventory.add("smoke_bomb", 1);
        let (next, report) = resolve_round(
            &state,
            &PlayerAction::UseItem("smoke_bomb".to_string()),
            &catalog(),
            &CombatConstants::default(),
            &mut half(),
        )
        .unwrap();

        assert_eq!(report.outcome, RoundOutcome::Fled);
        assert_eq!(report.narration.len(), 1);
        assert_eq!(report.consumed_item.as_deref(), Some("smoke_bomb"));
        assert!(!next.player.inventory.contains("smoke_bomb"));
    }

    #[test]
    fn test_item_rejections_leave_state_alone() {
        let mut state = state();
        state.player.inventory.add("herb", 1);
        state.player.inventory.add("seed_of_strength", 1);
        let constants = CombatConstants::default();

        for id in ["bomb", "herb", "seed_of_strength", "mystery"] {
            let err = resolve_round(
                &state,
                &PlayerAction::UseItem(id.to_string()),
                &catalog(),
                &constants,
                &mut half(),
            )
            .unwrap_err();
            assert_eq!(err, CombatError::ItemNotFound { item_id: id.to_string() });
        }
        assert_eq!(state.player.inventory.quantity("herb"), 1);
    }

    #[test]
    fn test_damage_item_ignores_defense() {
        let mut state = state();
        state.enemy.defense = 50;
        state.enemy.health = 40;
        state.player.inventory.add("bomb", 2);
        let (next, report) = resolve_round(
            &state,
            &PlayerAction::UseItem("bomb".to_string()),
            &catalog(),
            &CombatConstants::default(),
            &mut half(),
        )
        .unwrap();

        assert_eq!(next.enemy.health, 10);
        assert_eq!(report.damage_dealt, 30);
        assert_eq!(next.player.inventory.quantity("bomb"), 1);
        assert_eq!(report.outcome, RoundOutcome::Continuing);
    }

    #[test]
    fn test_temp_buff_applies_next_round() {
        let mut state = state();
        state.enemy.health = 500;
        state.enemy.max_health = 500;
        state.enemy.defense = 0;
        state.enemy.level = 1;
        state.player.inventory.add("berserker_potion", 1);
        let constants = CombatConstants::default();

        let (after_potion, _) = resolve_round(
            &state,
            &PlayerAction::UseItem("berserker_potion".to_string()),
            &catalog(),
            &constants,
            &mut half(),
        )
        .unwrap();
        assert_eq!(after_potion.player_buffs.len(), 1);

        // 20 attack at variance 1.0, no defense
        let (_, report) =
            resolve_round(&after_potion, &PlayerAction::Attack, &catalog(), &constants, &mut half())
                .unwrap();
        assert_eq!(report.damage_dealt, 20);
    }

    #[test]
    fn test_cure_clears_dots_only() {
        let mut state = state();
        state.player.inventory.add("antidote", 1);
        state.player_effects.push(StatusEffect::dot("poison_blade", "Poisoned", 8, 3));
        state
            .player_buffs
            .push(StatusEffect::buff("iron_skin_potion", "Iron Skin", StatKind::Defense, 8, 3));

        let (next, report) = resolve_round(
            &state,
            &PlayerAction::UseItem("antidote".to_string()),
            &catalog(),
            &CombatConstants::default(),
            &mut half(),
        )
        .unwrap();

        assert!(next.player_effects.is_empty());
        assert_eq!(next.player_buffs.len(), 1);
        // The DOT still ticked before the cure
        assert!(report.narration[0].contains("8 damage"));
    }

    #[test]
    fn test_dot_kills_before_action() {
        let constants = CombatConstants::default();
        let mut state = state();
        state.player.health = 5;
        state.player_effects.push(StatusEffect::dot("fire_breath", "Burning", 8, 2));

        let mut rng = ScriptedRng::constant(0.5);
        let (next, report) =
            resolve_round(&state, &PlayerAction::Attack, &catalog(), &constants, &mut rng)
                .unwrap();

        assert_eq!(report.outcome, RoundOutcome::Defeat);
        assert_eq!(next.player.health, 0);
        assert_eq!(next.enemy.health, 15);
        assert_eq!(report.damage_dealt, 0);
    }

    #[test]
    fn test_failed_flee_gives_enemy_turn() {
        let constants = CombatConstants::default();
        let state = state();
        // flee roll fails, then evasion, damage, crit
        let mut rng = ScriptedRng::new([0.95, 0.9, 0.5, 0.9]);
        let (next, report) =
            resolve_round(&state, &PlayerAction::Flee, &catalog(), &constants, &mut rng).unwrap();

        assert_eq!(report.outcome, RoundOutcome::Continuing);
        assert!(report.narration[0].contains("failed to escape"));
        assert_eq!(report.damage_taken, 6);
        assert_eq!(next.player.health, 94);
    }

    fn tough_enemy(state: &mut CombatState, skill: EnemySkill) {
        state.enemy.health = 500;
        state.enemy.max_health = 500;
        state.enemy.defense = 0;
        state.enemy.skills = vec![skill];
    }

    /// Player attack that lands without a crit, then an enemy turn where
    /// the player does not dodge and the skill roll fails
    fn plain_exchange() -> ScriptedRng {
        ScriptedRng::new([0.9, 0.5, 0.9, 0.9, 0.9, 0.5, 0.9])
    }

    #[test]
    fn test_enemy_defense_buff_recast_stacks() {
        let mut state = state();
        let fortify = EnemySkill::new("fortify", "Fortify", SkillKind::DefenseBuff, 1.0);
        tough_enemy(&mut state, fortify.with_buff(100, 2));
        let constants = CombatConstants::default();
        let catalog = catalog();

        let (round1, _) =
            resolve_round(&state, &PlayerAction::Attack, &catalog, &constants, &mut half())
                .unwrap();
        assert_eq!(round1.enemy.effective_defense(), 100);

        let (round2, report) =
            resolve_round(&round1, &PlayerAction::Attack, &catalog, &constants, &mut half())
                .unwrap();
        assert_eq!(report.damage_dealt, 5);
        assert_eq!(round2.enemy.status_effects.len(), 2);
        assert_eq!(round2.enemy.defense, 0);
    }

    #[test]
    fn test_enemy_defense_buff_expires() {
        let mut state = state();
        let fortify = EnemySkill::new("fortify", "Fortify", SkillKind::DefenseBuff, 0.5);
        tough_enemy(&mut state, fortify.with_buff(10, 2));
        let constants = CombatConstants::default();
        let catalog = catalog();

        // Unbuffed hit for 10, then the skill roll succeeds
        let mut rng = ScriptedRng::new([0.9, 0.5, 0.9, 0.9, 0.0]);
        let (round1, report) =
            resolve_round(&state, &PlayerAction::Attack, &catalog, &constants, &mut rng).unwrap();
        assert_eq!(report.damage_dealt, 10);
        assert_eq!(round1.enemy.effective_defense(), 10);
        assert_eq!(round1.enemy.status_effects[0].remaining_turns, 2);

        // 10 * 100 / 110 while the buff holds
        let mut rng = plain_exchange();
        let (round2, report) =
            resolve_round(&round1, &PlayerAction::Attack, &catalog, &constants, &mut rng).unwrap();
        assert_eq!(report.damage_dealt, 9);
        assert_eq!(round2.enemy.status_effects[0].remaining_turns, 1);

        let mut rng = plain_exchange();
        let (round3, report) =
            resolve_round(&round2, &PlayerAction::Attack, &catalog, &constants, &mut rng).unwrap();
        assert_eq!(report.damage_dealt, 9);
        assert!(round3.enemy.status_effects.is_empty());
        assert_eq!(round3.enemy.effective_defense(), 0);

        let mut rng = plain_exchange();
        let (_, report) =
            resolve_round(&round3, &PlayerAction::Attack, &catalog, &constants, &mut rng).unwrap();
        assert_eq!(report.damage_dealt, 10);
    }

    #[test]
    fn test_zero_duration_fortify_lasts_default_turns() {
        let mut state = state();
        let fortify = EnemySkill::new("fortify", "Fortify", SkillKind::DefenseBuff, 1.0);
        tough_enemy(&mut state, fortify.with_buff(10, 0));

        let (next, _) = resolve_round(
            &state,
            &PlayerAction::Attack,
            &catalog(),
            &CombatConstants::default(),
            &mut half(),
        )
        .unwrap();

        let buff = &next.enemy.status_effects[0];
        assert_eq!(buff.remaining_turns, 2);
        assert_eq!(next.enemy.effective_defense(), 10);
    }

    #[test]
    fn test_elemental_item_ignores_defense() {
        let mut state = state();
        state.enemy.health = 100;
        state.enemy.defense = 50;
        state.player.inventory.add("fire_scroll", 1);

        let (next, report) = resolve_round(
            &state,
            &PlayerAction::UseItem("fire_scroll".to_string()),
            &catalog(),
            &CombatConstants::default(),
            &mut half(),
        )
        .unwrap();

        assert_eq!(next.enemy.health, 60);
        assert_eq!(report.damage_dealt, 40);
        assert!(report.narration[0].contains("fire"));
        assert!(!next.player.inventory.contains("fire_scroll"));
        assert_eq!(report.outcome, RoundOutcome::Continuing);
    }

    #[test]
    fn test_enemy_heal_applied() {
        let mut state = state();
        let rune_heal = EnemySkill::new("rune_heal", "Rune Heal", SkillKind::Heal, 1.0);
        tough_enemy(&mut state, rune_heal.with_heal(50));
        state.enemy.health = 400;

        // Player hits for 10, enemy heals instead of attacking
        let mut rng = ScriptedRng::new([0.9, 0.5, 0.9, 0.9, 0.0]);
        let (next, report) = resolve_round(
            &state,
            &PlayerAction::Attack,
            &catalog(),
            &CombatConstants::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(report.damage_dealt, 10);
        assert_eq!(report.damage_taken, 0);
        assert_eq!(next.enemy.health, 440);
        assert_eq!(report.enemy_health, 440);
    }

    #[test]
    fn test_poison_lands_on_player() {
        let mut state = state();
        let poison = EnemySkill::new("poison_blade", "Poison Blade", SkillKind::Poison, 1.0)
            .with_multiplier(0.8)
            .with_dot(8, 3);
        tough_enemy(&mut state, poison);
        let constants = CombatConstants::default();

        // 6 attack * 0.8 at the midpoint roll
        let mut rng = ScriptedRng::new([0.9, 0.5, 0.9, 0.9, 0.0, 0.5]);
        let (next, report) =
            resolve_round(&state, &PlayerAction::Attack, &catalog(), &constants, &mut rng)
                .unwrap();

        assert_eq!(report.damage_taken, 4);
        assert_eq!(next.player.health, 96);
        assert_eq!(next.player_effects.len(), 1);
        let dot = &next.player_effects[0];
        assert_eq!(dot.name, "Poisoned");
        assert_eq!(dot.damage_per_turn, 8);
        assert_eq!(dot.remaining_turns, 3);

        // The poison bites at the start of the next round
        let mut rng = plain_exchange();
        let (after, report) =
            resolve_round(&next, &PlayerAction::Attack, &catalog(), &constants, &mut rng).unwrap();
        assert!(report.narration[0].contains("Poisoned deals 8 damage"));
        assert_eq!(after.player_effects[0].remaining_turns, 2);
    }
}
