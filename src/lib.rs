//! Lane Runner - a lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, input, spawning, collisions, tick)
//! - `renderer`: Canvas 2D drawing through a `Surface` trait
//! - `game`: Start / game-over flow and high score
//! - `platform`: Frame scheduling and storage backends
//! - `config`: Data-driven game tuning

pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{FrameOutcome, Game, GameOverReport};
pub use highscores::HighScore;
