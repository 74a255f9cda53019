//! Ball Shooter entry point
//!
//! Runs the volley shooter headless with the autopilot aiming and firing.

use brick_by_brick::HighScore;
use brick_by_brick::audio::LogAudio;
use brick_by_brick::config::RunConfig;
use brick_by_brick::persistence::FileStore;
use brick_by_brick::platform::{FrameClock, IdleInput};
use brick_by_brick::renderer::DrawList;
use brick_by_brick::runner::{self, RunOptions, ShooterGame};

fn main() {
    env_logger::init();

    let config = RunConfig::from_env();
    log::info!("Config: {:?}", config);

    let mut game = ShooterGame::new(config.seed);
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
        "Finished: {} ticks, {} rounds, {} coins, high score {}",
        summary.ticks,
        summary.rounds,
        game.state.coins,
        summary.high_score
    );
    if summary.save_failures > 0 {
        std::process::exit(1);
    }
}
