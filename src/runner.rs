//! Fixed-rate game loop
//!
//! Each tick runs input → simulation → events → draw → present → sleep.
//! Round-end events are the only place the high score is written.

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::platform::{FrameClock, InputSnapshot, InputSource};
use crate::renderer::{Renderer, scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, breakout, shooter};

/// A game the loop can drive
pub trait Game {
    /// Display name for logs
    fn name(&self) -> &'static str;
    /// Advance one tick
    fn update(&mut self, input: &InputSnapshot);
    /// Events produced by the latest `update`
    fn events(&self) -> &[GameEvent];
    /// Draw the post-tick state and present it
    fn draw(&self, renderer: &mut dyn Renderer, high_score: u64);
}

/// Brick breaker bound to the player's settings
#[derive(Debug, Clone)]
pub struct BreakoutGame {
    pub state: breakout::GameState,
    pub settings: Settings,
}

impl BreakoutGame {
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            state: breakout::GameState::new(seed, settings.start_level),
            settings,
        }
    }
}

impl Game for BreakoutGame {
    fn name(&self) -> &'static str {
        "Brick By Brick"
    }

    fn update(&mut self, input: &InputSnapshot) {
        breakout::tick(&mut self.state, &input.to_breakout());
    }

    fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    fn draw(&self, renderer: &mut dyn Renderer, high_score: u64) {
        scene::draw_breakout(renderer, &self.state, &self.settings, high_score);
    }
}

#[derive(Debug, Clone)]
pub struct ShooterGame {
    pub state: shooter::GameState,
}

impl ShooterGame {
    pub fn new(seed: u64) -> Self {
        Self {
            state: shooter::GameState::new(seed),
        }
    }
}

impl Game for ShooterGame {
    fn name(&self) -> &'static str {
        "Ball Shooter"
    }

    fn update(&mut self, input: &InputSnapshot) {
        shooter::tick(&mut self.state, &input.to_shooter());
    }

    fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    fn draw(&self, renderer: &mut dyn Renderer, high_score: u64) {
        scene::draw_shooter(renderer, &self.state, high_score);
    }
}

/// Loop options
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Return after the first finished round instead of waiting for quit
    pub stop_at_round_end: bool,
}

/// What happened during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Finished rounds (lost or won)
    pub rounds: u32,
    pub last_score: u64,
    pub high_score: u64,
    /// Rounds that set and saved a new best
    pub new_high_scores: u32,
    /// High score saves that failed
    pub save_failures: u32,
}

/// Drive `game` until the input source quits (or the first round ends,
/// if requested)
pub fn run<G, I, S>(
    game: &mut G,
    input: &mut I,
    renderer: &mut dyn Renderer,
    audio: &mut dyn AudioSink,
    high_score: &mut HighScore<S>,
    clock: &mut FrameClock,
    options: RunOptions,
) -> RunSummary
where
    G: Game + ?Sized,
    I: InputSource + ?Sized,
    S: HighScoreStore,
{
    log::info!("{} started (high score {})", game.name(), high_score.best());
    let mut summary = RunSummary::default();

    loop {
        let snapshot = input.sample();
        if snapshot.quit {
            log::info!("Quit after {} ticks", summary.ticks);
            break;
        }

        game.update(&snapshot);
        summary.ticks += 1;

        let mut round_over = false;
        for event in game.events() {
            if let Some(effect) = SoundEffect::for_event(event) {
                audio.play(effect);
            }
            if let GameEvent::RoundOver { score, outcome } = *event {
                round_over = true;
                summary.rounds += 1;
                summary.last_score = score;
                log::info!("Round {} over ({:?}) with score {}", summary.rounds, outcome, score);
                match high_score.submit(score) {
                    Ok(true) => summary.new_high_scores += 1,
                    Ok(false) => {}
                    Err(e) => {
                        summary.save_failures += 1;
                        log::error!("Could not save high score {}: {}", score, e);
                    }
                }
            }
        }

        game.draw(renderer, high_score.best());
        clock.wait();

        if round_over && options.stop_at_round_end {
            break;
        }
    }

    summary.high_score = high_score.best();
    if let Some(fps) = clock.fps() {
        log::debug!("Average rate {} fps", fps);
    }
    summary
}
