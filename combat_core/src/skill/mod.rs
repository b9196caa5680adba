//! Enemy skills - definitions, selection and enemy turn resolution

mod selector;
mod types;

pub use selector::{resolve_enemy_turn, select_skill, EnemyTurnResult};
pub use types::{EnemySkill, SkillKind};
