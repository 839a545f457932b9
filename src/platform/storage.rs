//! High-score storage backends

use crate::error::GameError;

/// LocalStorage key holding the best score
pub const HIGH_SCORE_KEY: &str = "trackrunner_high";

/// Durable home for the single high-score value
pub trait ScoreStore {
    /// Raw stored value, if any
    fn read(&self) -> Option<String>;
    /// Overwrite the stored value
    fn write(&mut self, value: &str) -> Result<(), GameError>;
}

/// Interpret a stored high score. Absent, non-numeric or negative values
/// read as 0; fractional values are floored.
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.floor() as u64)
        .unwrap_or(0)
}

/// In-memory store for tests and the native build
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<String>,
    /// Number of successful writes
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: &str) -> Result<(), GameError> {
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - high score will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn read(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(HIGH_SCORE_KEY)
            .ok()
            .flatten()
    }

    fn write(&mut self, value: &str) -> Result<(), GameError> {
        let storage = self.storage.as_ref().ok_or(GameError::StorageUnavailable)?;
        storage
            .set_item(HIGH_SCORE_KEY, value)
            .map_err(|_| GameError::StorageUnavailable)
    }
}
