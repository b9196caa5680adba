//! Command-line interface for the combat simulator

use clap::Parser;
use std::path::PathBuf;

/// Run many automated combats and report outcome rates
#[derive(Parser, Debug)]
#[command(name = "combat_sim")]
#[command(about = "Headless turn-based combat simulator")]
#[command(version)]
pub struct Args {
    /// Enemy id to fight every run
    #[arg(long, conflicts_with = "danger")]
    pub enemy: Option<String>,

    /// Pick a random enemy for this danger level each run instead
    #[arg(long)]
    pub danger: Option<u32>,

    /// Number of combats to simulate
    #[arg(long, default_value = "1000")]
    pub runs: u32,

    /// RNG seed; the same seed replays the same batch
    #[arg(long, default_value = "12345")]
    pub seed: u64,

    #[arg(long, default_value = "1")]
    pub level: u32,

    #[arg(long, default_value = "100")]
    pub health: u32,

    #[arg(long, default_value = "10")]
    pub attack: u32,

    #[arg(long, default_value = "5")]
    pub defense: u32,

    /// Equipped weapon id
    #[arg(long)]
    pub weapon: Option<String>,

    /// Equipped armor id
    #[arg(long)]
    pub armor: Option<String>,

    /// Item to use when health runs low
    #[arg(long, value_name = "ITEM_ID")]
    pub item: Option<String>,

    /// How many of the item the player carries
    #[arg(long, default_value = "3")]
    pub item_count: u32,

    /// Health fraction below which the item is used
    #[arg(long, default_value = "0.3")]
    pub low_health: f64,

    /// Give up on a combat after this many rounds
    #[arg(long, default_value = "200")]
    pub max_rounds: u32,

    /// Enemy roster TOML (defaults to the built-in roster)
    #[arg(long, value_name = "FILE")]
    pub enemies: Option<PathBuf>,

    /// Item catalog TOML (defaults to the built-in catalog)
    #[arg(long, value_name = "FILE")]
    pub items: Option<PathBuf>,

    /// Combat constants TOML
    #[arg(long, value_name = "FILE")]
    pub constants: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
