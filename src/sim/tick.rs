//! Per-frame simulation step
//!
//! Advances the session by exactly one tick. Rendering and persistence are
//! handled by the caller based on the returned [`TickOutcome`].

use super::collision::rects_collide;
use super::spawner::{is_spawn_tick, spawn_obstacle};
use super::state::{GamePhase, GameSession};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened
    Skipped,
    /// Tick completed. `score_changed` carries the new integer score when
    /// it differs from the last one shown.
    Advanced { score_changed: Option<u64> },
    /// The player hit an obstacle; the session is now in `GameOver`
    Collided,
}

/// Advance the session by one tick
pub fn tick(session: &mut GameSession) -> TickOutcome {
    if session.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }

    session.time_ticks += 1;
    if is_spawn_tick(session.time_ticks, session.config.spawn_interval) {
        spawn_obstacle(session);
    }

    session.speed = (session.speed + session.config.accel).min(session.config.max_speed);

    // Newest first so removal doesn't disturb the indices still to visit
    let player_box = session.player.bounds();
    let despawn_y = session.layout.viewport.height + session.config.despawn_margin;
    for i in (0..session.obstacles.len()).rev() {
        let ob = &mut session.obstacles[i];
        ob.rect.pos.y += session.speed;
        if ob.rect.pos.y > despawn_y {
            session.obstacles.remove(i);
            continue;
        }
        if rects_collide(&player_box, &ob.rect) {
            log::debug!("Collision with {:?} at tick {}", ob.kind, session.time_ticks);
            session.phase = GamePhase::GameOver;
            return TickOutcome::Collided;
        }
    }

    session.player.ease_toward_target(session.config.player_easing);

    session.score += session.config.score_base
        + session.speed as f64 / session.config.score_speed_divisor;
    let floored = session.floored_score();
    let score_changed = if floored != session.displayed_score {
        session.displayed_score = floored;
        Some(floored)
    } else {
        None
    };

    TickOutcome::Advanced { score_changed }
}
