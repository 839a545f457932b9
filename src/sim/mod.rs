//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduled frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod layout;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_collide};
pub use input::{InputEvent, InputRouter, Intent, Key, LaneShift, apply_shift, shift_lane};
pub use layout::{Layout, Viewport};
pub use spawner::{is_spawn_tick, spawn_obstacle};
pub use state::{GamePhase, GameSession, Obstacle, ObstacleKind, Player};
pub use tick::{TickOutcome, tick};
