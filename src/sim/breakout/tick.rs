//! Fixed-rate brick breaker tick
//!
//! One call advances the game by one frame. Velocities are in pixels per
//! tick, so there is no `dt`.

use glam::Vec2;

use super::state::{Ball, Brick, GamePhase, GameState, Paddle};
use crate::sim::collision::{Rect, WallContact, first_overlap, reflect_off_walls};
use crate::sim::events::{GameEvent, RoundOutcome};
use crate::tuning::BreakoutTuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Pause toggle (pressed this tick)
    pub pause: bool,
    /// Restart after the round ended (click)
    pub restart: bool,
    /// Idle/demo mode - autopilot drives the paddle
    pub idle_mode: bool,
}

/// What happened to the ball during one physics step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallStep {
    pub walls: WallContact,
    pub paddle_hit: bool,
    /// ID of the brick destroyed this step
    pub brick_hit: Option<u32>,
    pub score_delta: u64,
    /// Ball reached the bottom edge
    pub lost: bool,
}

/// Advance the ball one step against walls, paddle and bricks.
///
/// Integration is plain Euler with no sub-stepping, so a fast ball can pass
/// through a thin brick. At most one brick is destroyed per step: the first
/// overlapping brick in `bricks` order.
pub fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut Vec<Brick>,
    tuning: &BreakoutTuning,
) -> BallStep {
    let mut step = BallStep::default();
    let arena = Rect::new(0.0, 0.0, tuning.screen_width, tuning.screen_height);

    ball.pos += ball.vel;

    step.walls = reflect_off_walls(&ball.bounds(), &arena, &mut ball.vel);
    if ball.bounds().bottom() >= arena.bottom() {
        step.lost = true;
        return step;
    }

    if ball.bounds().overlaps(&paddle.rect) {
        let half_width = paddle.rect.w / 2.0;
        let offset = (ball.pos.x - paddle.rect.center().x) / half_width;
        ball.vel.y = -ball.vel.y;
        ball.vel.x = offset * tuning.paddle_deflection;
        // Sit on top of the paddle so the next step can't re-trigger
        ball.pos.y = paddle.rect.top() - ball.radius;
        step.paddle_hit = true;
    }

    let probe = ball.bounds();
    if let Some(idx) = first_overlap(&probe, bricks.iter().map(|b| &b.rect)) {
        let brick = bricks.remove(idx);
        ball.vel.y = -ball.vel.y;
        step.brick_hit = Some(brick.id);
        step.score_delta = tuning.score_per_brick;
    }

    step
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                state.restart();
            }
            return;
        }
        GamePhase::LevelTransition => {
            state.transition_ticks = state.transition_ticks.saturating_sub(1);
            if state.transition_ticks == 0 {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    let (left, right) = if input.idle_mode {
        autopilot(state)
    } else {
        (input.left, input.right)
    };
    let speed = state.tuning.paddle_speed;
    let width = state.tuning.screen_width;
    if left {
        state.paddle.shift(-speed, width);
    }
    if right {
        state.paddle.shift(speed, width);
    }

    let step = step_ball(&mut state.ball, &state.paddle, &mut state.bricks, &state.tuning);

    if step.lost {
        state.phase = GamePhase::GameOver;
        log::info!("Ball lost on level {} with score {}", state.level, state.score);
        state.events.push(GameEvent::RoundOver {
            score: state.score,
            outcome: RoundOutcome::Lost,
        });
        return;
    }

    if step.paddle_hit {
        state.events.push(GameEvent::PaddleHit);
    }
    if let Some(brick_id) = step.brick_hit {
        state.score += step.score_delta;
        state.events.push(GameEvent::BrickHit {
            brick_id,
            destroyed: true,
        });
    }

    if state.bricks.is_empty() {
        advance_level(state);
    }
}

/// Move to the next level, or finish the run on the last one
fn advance_level(state: &mut GameState) {
    if state.level < state.tuning.max_level {
        state.level += 1;
        let (dx, dy) = state.tuning.velocity_for_level(state.level);
        state.reset_serve(Vec2::new(dx, dy));
        state.generate_bricks();
        state.phase = GamePhase::LevelTransition;
        state.transition_ticks = state.tuning.level_transition_ticks;
        log::info!(
            "Level cleared, advancing to level {} ({} bricks)",
            state.level,
            state.bricks.len()
        );
        state.events.push(GameEvent::LevelCleared { level: state.level });
    } else {
        state.phase = GamePhase::Won;
        log::info!("Final level cleared with score {}", state.score);
        state.events.push(GameEvent::RoundOver {
            score: state.score,
            outcome: RoundOutcome::Won,
        });
    }
}

/// Track the ball with a slowly wandering offset so the paddle doesn't
/// send it straight up forever
fn autopilot(state: &GameState) -> (bool, bool) {
    let wobble = (state.time_ticks as f32 * 0.05).sin() * state.paddle.rect.w * 0.3;
    let target = state.ball.pos.x + wobble;
    let center = state.paddle.rect.center().x;
    let dead_zone = state.tuning.paddle_speed;
    (center > target + dead_zone, center < target - dead_zone)
}
