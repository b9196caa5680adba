//! Skill selection and enemy turn resolution

use super::{EnemySkill, SkillKind};
use crate::config::CombatConstants;
use crate::damage::{calculate_damage, roll_evasion, roll_hit, HitOutcome, Strike};
use crate::effect::StatusEffect;
use crate::enemy::CombatEnemy;
use crate::rng::roll_chance;
use crate::stats::PlayerCombatStats;
use crate::types::StatKind;
use rand::Rng;
use tracing::debug;

/// Pick at most one skill for this turn
///
/// Skills are rolled in declaration order against their own chance; the
/// first success wins and the rest of the pool is not rolled.
pub fn select_skill<'a>(skills: &'a [EnemySkill], rng: &mut impl Rng) -> Option<&'a EnemySkill> {
    skills.iter().find(|skill| roll_chance(skill.chance, rng))
}

/// Everything the enemy's action did, for the resolver to apply
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTurnResult {
    pub hit: HitOutcome,
    /// Skill that fired; `None` for a basic attack or an evaded turn
    pub skill_used: Option<EnemySkill>,
    /// Health the enemy restores on itself
    pub heal: u32,
    /// Effect attached to the player (DOT skills)
    pub player_effect: Option<StatusEffect>,
    /// Effect attached to the enemy (defense buff)
    pub enemy_effect: Option<StatusEffect>,
    pub narration: String,
}

impl EnemyTurnResult {
    fn new(hit: HitOutcome, narration: String) -> Self {
        EnemyTurnResult {
            hit,
            skill_used: None,
            heal: 0,
            player_effect: None,
            enemy_effect: None,
            narration,
        }
    }
}

/// Resolve the enemy's action against the player's effective stats
///
/// Order of rolls: player evasion, then skills in pool order, then damage
/// (and the critical roll for basic attacks only).
pub fn resolve_enemy_turn(
    enemy: &CombatEnemy,
    player: &PlayerCombatStats,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> EnemyTurnResult {
    if roll_evasion(player.evasion_chance, rng) {
        debug!(enemy = %enemy.id, "player evaded enemy attack");
        return EnemyTurnResult::new(
            HitOutcome::evaded(),
            format!("You nimbly dodge {}'s attack!", enemy.name),
        );
    }

    let attack = enemy.effective_attack() as f64;

    let Some(skill) = select_skill(&enemy.skills, rng) else {
        let strike = Strike {
            attack,
            defense: player.defense,
            attacker_level: enemy.level,
            defender_level: player.level,
            crit_chance: enemy.crit_chance,
        };
        let hit = roll_hit(&strike, constants, rng);
        let narration = if hit.is_critical {
            format!("{} lands a critical hit for {} damage!", enemy.name, hit.damage)
        } else {
            format!("{} attacks you for {} damage.", enemy.name, hit.damage)
        };
        return EnemyTurnResult::new(hit, narration);
    };

    debug!(enemy = %enemy.id, skill = %skill.id, kind = %skill.kind, "enemy skill selected");

    let mut result = match skill.kind {
        SkillKind::Poison | SkillKind::FireBreath => {
            let damage = skill_damage(enemy, skill, player, constants, rng);
            let player_effect = skill.dot().map(|(per_turn, turns)| {
                let name = skill.kind.dot_name().unwrap_or("Afflicted");
                StatusEffect::dot(&skill.id, name, per_turn, turns)
            });
            let narration = match &player_effect {
                Some(effect) => format!(
                    "{} uses [{}]! It deals {} damage and leaves you {}!",
                    enemy.name, skill.name, damage, effect.name
                ),
                None => format!(
                    "{} uses [{}]! It deals {} damage!",
                    enemy.name, skill.name, damage
                ),
            };
            let mut result = EnemyTurnResult::new(HitOutcome::landed(damage, false), narration);
            result.player_effect = player_effect;
            result
        }
        SkillKind::HeavyStrike => {
            let damage = skill_damage(enemy, skill, player, constants, rng);
            EnemyTurnResult::new(
                HitOutcome::landed(damage, false),
                format!(
                    "{} uses [{}]! A crushing blow deals {} damage!",
                    enemy.name, skill.name, damage
                ),
            )
        }
        SkillKind::Heal => {
            let requested = skill.heal_amount.unwrap_or(0);
            let missing = (enemy.max_health as i64 - enemy.health).max(0);
            let heal = (requested as i64).min(missing) as u32;
            let mut result = EnemyTurnResult::new(
                HitOutcome::landed(0, false),
                format!("{} uses [{}] and recovers {} health!", enemy.name, skill.name, heal),
            );
            result.heal = heal;
            result
        }
        SkillKind::DefenseBuff => {
            let (amount, turns) = skill.defense_buff();
            let mut result = EnemyTurnResult::new(
                HitOutcome::landed(0, false),
                format!(
                    "{} uses [{}]! Its defense rises by {}.",
                    enemy.name, skill.name, amount
                ),
            );
            result.enemy_effect = Some(StatusEffect::buff(
                &skill.id,
                "Defense Up",
                StatKind::Defense,
                amount,
                turns,
            ));
            result
        }
    };

    result.skill_used = Some(skill.clone());
    result
}

fn skill_damage(
    enemy: &CombatEnemy,
    skill: &EnemySkill,
    player: &PlayerCombatStats,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> u32 {
    calculate_damage(
        enemy.effective_attack() as f64 * skill.effective_multiplier(),
        player.defense,
        enemy.level,
        player.level,
        constants,
        rng,
    )
}
