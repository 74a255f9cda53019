//! Per-game frame composition
//!
//! Reads post-tick state only; never mutates it.

use glam::Vec2;

use super::vertex::colors::{self, rgb};
use super::{Anchor, Renderer, Sprite, TextSize};
use crate::settings::Settings;
use crate::sim::{Rect, breakout, shooter};

/// Height of the brick breaker title bar
const FRAME_HEIGHT: f32 = 50.0;

/// Draw one brick breaker frame
pub fn draw_breakout<R: Renderer + ?Sized>(
    r: &mut R,
    state: &breakout::GameState,
    settings: &Settings,
    high_score: u64,
) {
    let t = &state.tuning;
    let center = Vec2::new(t.screen_width / 2.0, t.screen_height / 2.0);
    r.clear(colors::BLACK);

    match state.phase {
        breakout::GamePhase::GameOver => {
            end_screen(r, center, "Game Over", state.score, high_score);
            return;
        }
        breakout::GamePhase::Won => {
            end_screen(r, center, "You Win!", state.score, high_score);
            return;
        }
        _ => {}
    }

    r.fill_rect(&state.paddle.rect, rgb(settings.paddle_color()));
    r.fill_circle(state.ball.pos, state.ball.radius, rgb(settings.ball_color()));
    for brick in &state.bricks {
        r.fill_rect(&brick.rect, rgb(brick.color));
    }

    r.fill_rect(&Rect::new(0.0, 0.0, t.screen_width, FRAME_HEIGHT), colors::FRAME_BG);
    r.text(
        "Brick By Brick",
        Vec2::new(center.x, FRAME_HEIGHT / 2.0),
        Anchor::Center,
        TextSize::Large,
        colors::TITLE,
    );

    let hud_y = FRAME_HEIGHT + 10.0;
    let small = |r: &mut R, text: &str, x: f32| {
        r.text(text, Vec2::new(x, hud_y), Anchor::TopLeft, TextSize::Small, colors::WHITE)
    };
    small(r, &format!("Score: {}", state.score), 10.0);
    small(r, &format!("High Score: {}", high_score), t.screen_width - 200.0);
    small(r, &format!("Level: {}", state.level), center.x - 40.0);

    match state.phase {
        breakout::GamePhase::Paused => r.text(
            "Paused",
            center,
            Anchor::Center,
            TextSize::Small,
            colors::WHITE,
        ),
        breakout::GamePhase::LevelTransition => r.text(
            &format!("Level {}", state.level),
            center,
            Anchor::Center,
            TextSize::Large,
            colors::TITLE,
        ),
        _ => {}
    }

    r.present();
}

/// Draw one volley shooter frame
pub fn draw_shooter<R: Renderer + ?Sized>(r: &mut R, state: &shooter::GameState, high_score: u64) {
    let t = &state.tuning;
    r.clear(colors::SHOOTER_BACKGROUND);

    for ball in state.balls.iter().filter(|b| b.active) {
        r.fill_circle(ball.pos, ball.radius, colors::SHOOTER_BALL);
    }

    for brick in &state.bricks {
        r.fill_rect(&brick.rect, rgb(brick.color));
        r.text(
            &brick.hits.to_string(),
            brick.rect.center(),
            Anchor::Center,
            TextSize::Small,
            colors::WHITE,
        );
    }

    if state.shoot_ready() {
        // Dotted aim guide
        let theta = state.angle.to_radians();
        let dir = Vec2::new(theta.cos(), -theta.sin());
        for i in 1..=6 {
            let p = state.launcher.pos + dir * (i as f32 * 20.0);
            r.fill_circle(p, 2.0, colors::AIM_GUIDE);
        }
    }

    r.fill_circle(state.launcher.pos, state.launcher.radius, colors::LAUNCHER);

    r.fill_rect(
        &Rect::new(0.0, 0.0, t.screen_width, t.scoreboard_height),
        colors::SCOREBOARD,
    );
    let right = t.screen_width - 150.0;
    r.text(
        &format!("Score: {}", state.score),
        Vec2::new(right, 10.0),
        Anchor::TopLeft,
        TextSize::Small,
        colors::WHITE,
    );
    r.text(
        &format!("High Score: {}", high_score),
        Vec2::new(right, 40.0),
        Anchor::TopLeft,
        TextSize::Small,
        colors::WHITE,
    );
    r.sprite(Sprite::Coin, &Rect::new(10.0, 40.0, 24.0, 24.0));
    r.text(
        &state.coins.to_string(),
        Vec2::new(40.0, 40.0),
        Anchor::TopLeft,
        TextSize::Small,
        colors::WHITE,
    );

    if state.phase == shooter::GamePhase::GameOver {
        r.text(
            "Game Over!",
            Vec2::new(t.screen_width / 2.0, t.screen_height / 2.0),
            Anchor::Center,
            TextSize::Small,
            colors::GAME_OVER,
        );
    }

    r.present();
}

fn end_screen<R: Renderer + ?Sized>(r: &mut R, center: Vec2, title: &str, score: u64, high: u64) {
    r.sprite(
        Sprite::Logo,
        &Rect::new(center.x - 50.0, center.y - 230.0, 100.0, 100.0),
    );
    r.text(title, center - Vec2::new(0.0, 100.0), Anchor::Center, TextSize::Large, colors::TITLE);
    r.text(
        &format!("Score: {}  High Score: {}", score, high),
        center,
        Anchor::Center,
        TextSize::Small,
        colors::WHITE,
    );
    r.text(
        "Click to play again",
        center + Vec2::new(0.0, 60.0),
        Anchor::Center,
        TextSize::Small,
        colors::WHITE,
    );
    r.present();
}
