//! Episode driver binary.
//!
//! Loads a registered game by name, optionally resumes from a serialized
//! snapshot, and drives one full episode with uniform-random action
//! selection, narrating every node along the way.
//!
//! Options: --game, --players, --load-state, --seed, --trace

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use spiel::Player;
use spiel::game::Action;
use spiel::game::Odds;
use spiel::game::State;
use spiel::game::registry;
use spiel::game::registry::Params;
use spiel::game::registry::Value;
use spiel::game::serial;
use spiel::traverse;
use spiel::traverse::Selector;
use spiel::traverse::Uniform;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(about = "drive one full episode of a registered game")]
struct Args {
    /// name of the game to play
    #[arg(long, default_value = "kuhn")]
    game: String,
    /// override the game's default player count
    #[arg(long)]
    players: Option<usize>,
    /// resume from a serialized state snapshot instead of a fresh root
    #[arg(long)]
    load_state: Option<std::path::PathBuf>,
    /// seed for the uniform-random selector
    #[arg(long)]
    seed: Option<u64>,
    /// write the episode trace to this path as JSON
    #[arg(long)]
    trace: Option<std::path::PathBuf>,
}

/// narrates every offer the driver makes before delegating to the
/// wrapped selector
struct Verbose(Uniform);

impl Selector for Verbose {
    fn chance(&mut self, odds: &Odds) -> Action {
        println!("{}", " Chance Node ".white().on_red());
        println!("{} outcomes: {}", odds.len(), odds);
        let action = self.0.chance(odds);
        println!("sampled outcome: {}", action);
        action
    }
    fn choose(&mut self, player: Player, legal: &[Action]) -> Action {
        println!("{}", " Decision Node ".white().on_blue());
        let offered = legal
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("legal actions for P{}: [{}]", player, offered);
        let action = self.0.choose(player, legal);
        println!("chosen action: {}", action);
        action
    }
    fn joint(&mut self, legal: &[Vec<Action>]) -> Vec<Action> {
        println!("{}", " Simultaneous Node ".white().on_green());
        let joint = legal
            .iter()
            .enumerate()
            .map(|(player, actions)| self.0.choose(player, actions))
            .collect::<Vec<_>>();
        let chosen = joint
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("chosen joint action: [{}]", chosen);
        joint
    }
}

fn main() -> anyhow::Result<()> {
    spiel::log();
    let args = Args::parse();
    log::info!("registered games: {:?}", registry::registered());

    let mut params = Params::new();
    if let Some(players) = args.players {
        params.insert("players".to_string(), Value::Int(players as i64));
    }
    let game = registry::load(&args.game, &params)?;
    log::info!("created game: {}", game.spec());

    let mut state = match &args.load_state {
        None => State::root(Arc::clone(&game)),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read snapshot {}", path.display()))?;
            // a corrupt snapshot is the one recoverable failure: report
            // it and fall back to a fresh initial state
            match serial::deserialize(Arc::clone(&game), &text) {
                Ok(state) => {
                    log::info!("resumed from snapshot {}", path.display());
                    state
                }
                Err(e) => {
                    log::warn!("ignoring snapshot {}: {}", path.display(), e);
                    State::root(Arc::clone(&game))
                }
            }
        }
    };
    println!("{}", state);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("selector seed: {}", seed);
    let ref mut selector = Verbose(Uniform::seeded(seed));
    let trace = traverse::run(&mut state, selector)?;

    println!("{}", " Terminal ".black().on_white());
    println!("{}", state);
    println!("snapshot:\n{}", serial::serialize(&state));
    for (player, utility) in trace.returns.iter().enumerate() {
        println!("utility for player {} is {}", player, utility);
    }

    if let Some(path) = &args.trace {
        let json = serde_json::to_string_pretty(&trace)?;
        std::fs::write(path, json).with_context(|| format!("write trace {}", path.display()))?;
        log::info!("trace written to {}", path.display());
    }
    Ok(())
}
