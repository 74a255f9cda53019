//! Brick By Brick entry point
//!
//! Runs the brick breaker headless with the autopilot at the controls.

use brick_by_brick::audio::LogAudio;
use brick_by_brick::config::RunConfig;
use brick_by_brick::persistence::FileStore;
use brick_by_brick::platform::{FrameClock, IdleInput};
use brick_by_brick::renderer::DrawList;
use brick_by_brick::runner::{self, BreakoutGame, RunOptions};
use brick_by_brick::{HighScore, Settings};

fn main() {
    env_logger::init();

    let config = RunConfig::from_env();
    log::info!("Config: {:?}", config);

    let mut settings = Settings::default();
    if !settings.select_level(config.start_level) {
        log::warn!(
            "Start level {} out of range, using {}",
            config.start_level,
            settings.start_level
        );
    }

    let mut game = BreakoutGame::new(config.seed, settings);
    let mut high_score = HighScore::load(FileStore::new(config.high_score_path.clone()));

    let summary = runner::run(
        &mut game,
        &mut IdleInput::new(config.max_ticks),
        &mut DrawList::new(),
        &mut LogAudio::new(),
        &mut high_score,
        &mut FrameClock::new(!config.unthrottled),
        RunOptions::default(),
    );

    log::info!(
        "Finished: {} ticks, {} rounds, level {}, high score {}",
        summary.ticks,
        summary.rounds,
        game.state.level,
        summary.high_score
    );
    if summary.save_failures > 0 {
        std::process::exit(1);
    }
}
