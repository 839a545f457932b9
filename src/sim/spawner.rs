//! Obstacle spawning

use rand::Rng;

use super::collision::Rect;
use super::state::{GameSession, Obstacle, ObstacleKind};

/// True on ticks where an obstacle should appear
#[inline]
pub fn is_spawn_tick(time_ticks: u64, interval: u64) -> bool {
    interval > 0 && time_ticks % interval == 0
}

/// Create one obstacle in a random lane, just above the top edge
pub fn spawn_obstacle(session: &mut GameSession) -> &Obstacle {
    let config = &session.config;
    let layout = &session.layout;
    let rng = &mut session.rng;

    let lane = rng.random_range(0..layout.lane_count().max(1));
    let w = layout.lane_width * config.obstacle_width_ratio;
    let (min_h, max_h) = (config.obstacle_min_height, config.obstacle_max_height);
    let h = if max_h > min_h {
        rng.random_range(min_h..max_h)
    } else {
        min_h
    };
    let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];

    let x = layout.lane_x(lane) - w / 2.0;
    session.obstacles.push(Obstacle {
        rect: Rect::new(x, -h, w, h),
        kind,
    });
    log::trace!("Spawned {:?} in lane {} at tick {}", kind, lane, session.time_ticks);

    let last = session.obstacles.len() - 1;
    &session.obstacles[last]
}
