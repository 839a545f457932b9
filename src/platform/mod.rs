//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (animation frames vs. a synchronous driver)
//! - Storage (LocalStorage on web, memory elsewhere)

pub mod storage;
pub mod ticker;

pub use storage::{MemoryStore, ScoreStore};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use ticker::{LoopControl, ManualTicks, TickSource};
