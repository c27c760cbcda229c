pub mod game;
pub mod games;
pub mod traverse;

/// Expected values, payoffs, and terminal returns.
pub type Utility = f32;
/// Chance weights, sampling distributions, and policy masses.
pub type Probability = f32;
/// Seat index into [0, players).
pub type Player = usize;

/// Slack allowed when checking that a chance distribution sums to one.
/// Distributions inside the tolerance are renormalized; distributions
/// outside it are rejected as a game-logic defect.
pub const CHANCE_TOLERANCE: Probability = 1e-6;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
