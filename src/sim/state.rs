//! Game session state
//!
//! Everything a tick mutates lives in [`GameSession`]: player, obstacles,
//! speed, score, phase and the spawn RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::layout::{Layout, Viewport};
use crate::config::GameConfig;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Simulation ticking
    Running,
    /// Collided; waiting for a restart
    GameOver,
}

/// Obstacle palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Owl,
    Bear,
    Bird,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Owl, ObstacleKind::Bear, ObstacleKind::Bird];

    pub fn index(self) -> usize {
        match self {
            ObstacleKind::Owl => 0,
            ObstacleKind::Bear => 1,
            ObstacleKind::Bird => 2,
        }
    }
}

/// An obstacle sliding down a lane
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner and size
    pub rect: Rect,
    pub kind: ObstacleKind,
}

/// The player's sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub lane: usize,
    /// Center x, eased toward `target_x` each tick
    pub x: f32,
    pub target_x: f32,
    /// Center y
    pub y: f32,
    pub size: Vec2,
}

impl Player {
    /// Place the player in `lane`, snapped to its center
    pub fn placed(lane: usize, layout: &Layout) -> Self {
        let x = layout.lane_x(lane);
        Self {
            lane: lane.min(layout.lane_count().saturating_sub(1)),
            x,
            target_x: x,
            y: layout.player_y,
            size: layout.player_size,
        }
    }

    /// Bounding box centered on the current position
    pub fn bounds(&self) -> Rect {
        Rect::centered(Vec2::new(self.x, self.y), self.size)
    }

    /// Move `x` a fixed fraction of the way toward the target
    pub fn ease_toward_target(&mut self, fraction: f32) {
        self.x += (self.target_x - self.x) * fraction;
    }

    /// Re-map to a new layout, keeping the lane index
    pub fn relayout(&mut self, layout: &Layout) {
        let x = layout.lane_x(self.lane);
        self.x = x;
        self.target_x = x;
        self.y = layout.player_y;
        self.size = layout.player_size;
    }
}

/// One game session: the whole mutable state graph of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub layout: Layout,
    pub phase: GamePhase,
    /// Ticks since the session started
    pub time_ticks: u64,
    /// Current fall speed (pixels per tick)
    pub speed: f32,
    /// Fractional score accumulator
    pub score: f64,
    /// Last integer score handed to the HUD
    pub displayed_score: u64,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let layout = Layout::compute(viewport, &config);
        let player = Player::placed(config.clamped_start_lane(), &layout);
        Self {
            speed: config.base_speed,
            config,
            layout,
            phase: GamePhase::Idle,
            time_ticks: 0,
            score: 0.0,
            displayed_score: 0,
            player,
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Clear per-session state and enter `Running`
    pub fn reset(&mut self) {
        self.time_ticks = 0;
        self.score = 0.0;
        self.displayed_score = 0;
        self.obstacles.clear();
        self.speed = self.config.base_speed;
        self.player = Player::placed(self.config.clamped_start_lane(), &self.layout);
        self.phase = GamePhase::Running;
    }

    /// Install a layout for a new viewport size
    pub fn resize(&mut self, viewport: Viewport) {
        let layout = Layout::compute(viewport, &self.config);
        self.player.relayout(&layout);
        self.layout = layout;
    }

    /// Score as shown to the player
    pub fn floored_score(&self) -> u64 {
        self.score.floor().max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), Viewport::new(400.0, 700.0, 1.0), 7)
    }

    #[test]
    fn test_new_session_is_idle_in_start_lane() {
        let s = session();
        assert_eq!(s.phase, GamePhase::Idle);
        assert_eq!(s.player.lane, 1);
        assert_eq!(s.player.x, 150.0);
        assert_eq!(s.player.target_x, 150.0);
        assert_eq!(s.speed, 3.0);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut s = session();
        s.score = 42.7;
        s.displayed_score = 42;
        s.time_ticks = 500;
        s.speed = 9.0;
        s.player.lane = 3;
        s.obstacles.push(Obstacle {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            kind: ObstacleKind::Owl,
        });

        s.reset();
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.displayed_score, 0);
        assert_eq!(s.time_ticks, 0);
        assert_eq!(s.speed, 3.0);
        assert!(s.obstacles.is_empty());
        assert_eq!(s.player.lane, 1);
    }

    #[test]
    fn test_resize_keeps_lane() {
        let mut s = session();
        s.player.lane = 3;
        s.resize(Viewport::new(1200.0, 900.0, 1.0));
        assert_eq!(s.player.lane, 3);
        assert_eq!(s.player.target_x, 840.0);
        assert_eq!(s.player.x, 840.0);
        assert_eq!(s.player.y, 900.0 - 120.0 - 20.0);
        assert_eq!(s.layout.lanes_x, vec![360.0, 520.0, 680.0, 840.0]);
    }

    #[test]
    fn test_player_bounds_centered() {
        let s = session();
        let b = s.player.bounds();
        assert!((b.pos.x + b.size.x / 2.0 - s.player.x).abs() < 1e-4);
        assert!((b.pos.y + b.size.y / 2.0 - s.player.y).abs() < 1e-4);
    }

    #[test]
    fn test_floored_score() {
        let mut s = session();
        s.score = 12.99;
        assert_eq!(s.floored_score(), 12);
    }
}
