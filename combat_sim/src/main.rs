//! combat_sim - Run batches of automated combats from the command line

mod cli;
mod simulation;

use anyhow::{bail, Context, Result};
use combat_core::prelude::*;
use combat_core::config::{load_enemy_registry, load_item_catalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::{run_simulation, Opponent, SimulationReport, Strategy};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let registry = match &args.enemies {
        Some(path) => load_enemy_registry(path)
            .with_context(|| format!("loading enemies from {}", path.display()))?,
        None => default_enemies(),
    };
    let catalog = match &args.items {
        Some(path) => load_item_catalog(path)
            .with_context(|| format!("loading items from {}", path.display()))?,
        None => default_items(),
    };
    let constants = match &args.constants {
        Some(path) => CombatConstants::load(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => CombatConstants::default(),
    };

    let opponent = match (&args.enemy, args.danger) {
        (Some(id), _) => {
            if registry.get(id).is_none() {
                bail!("unknown enemy '{}'", id);
            }
            Opponent::Fixed(id.clone())
        }
        (None, Some(level)) => Opponent::Danger(level),
        (None, None) => bail!("pass either --enemy <ID> or --danger <LEVEL>"),
    };

    if let Some(item_id) = &args.item {
        match catalog.get(item_id) {
            Some(item) if item.is_combat_usable() => {}
            Some(_) => bail!("item '{}' cannot be used in combat", item_id),
            None => bail!("unknown item '{}'", item_id),
        }
    }

    let mut player =
        PlayerCombatant::new("Simulant", args.level, args.health, args.attack, args.defense)
            .with_equipment(args.weapon.as_deref(), args.armor.as_deref(), &catalog);
    if let Some(item_id) = &args.item {
        player = player.with_item(item_id, args.item_count);
    }

    let strategy = Strategy {
        emergency_item: args.item.clone(),
        low_health: args.low_health,
        max_rounds: args.max_rounds,
    };

    info!(runs = args.runs, seed = args.seed, ?opponent, "starting simulation");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let report = run_simulation(
        &player,
        &opponent,
        &strategy,
        args.runs,
        &registry,
        &catalog,
        &constants,
        &mut rng,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&player, &opponent, &report);
    }

    Ok(())
}

fn print_report(player: &PlayerCombatant, opponent: &Opponent, report: &SimulationReport) {
    let target = match opponent {
        Opponent::Fixed(id) => id.clone(),
        Opponent::Danger(level) => format!("danger level {}", level),
    };

    println!("=== Combat Simulation ===");
    println!(
        "Player: level {} | {} HP | {} ATK | {} DEF",
        player.level, player.max_health, player.attack, player.defense
    );
    println!("Opponent: {}", target);
    println!("Runs: {}", report.runs);
    println!();
    println!("Victory: {:>6.1}%  ({})", report.win_rate(), report.victories);
    println!("Defeat:  {:>6.1}%  ({})", report.defeat_rate(), report.defeats);
    println!("Fled:    {:>6.1}%  ({})", report.flee_rate(), report.fled);
    if report.stalled > 0 {
        println!("Stalled: {}", report.stalled);
    }
    println!();
    println!("Average rounds: {:.2}", report.avg_rounds());
    if report.runs > 0 {
        let runs = report.runs as f64;
        println!("Average damage dealt: {:.1}", report.total_damage_dealt as f64 / runs);
        println!("Average damage taken: {:.1}", report.total_damage_taken as f64 / runs);
        println!("Average gold: {:.1}", report.total_gold as f64 / runs);
    }
    if report.items_used > 0 {
        println!("Items used: {}", report.items_used);
    }
}
