//! Game flow: Idle -> Running -> GameOver -> Running ...
//!
//! [`Game`] owns the session, the input router and the high score. The
//! platform layer feeds it events and calls [`Game::frame`] once per display
//! refresh while it reports [`LoopControl::Continue`].

use crate::config::GameConfig;
use crate::highscores::HighScore;
use crate::platform::storage::ScoreStore;
use crate::platform::ticker::LoopControl;
use crate::renderer::{SpriteSet, Surface, render};
use crate::sim::{
    GamePhase, GameSession, InputEvent, InputRouter, Intent, TickOutcome, Viewport, apply_shift,
    tick,
};

/// Final numbers of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub score: u64,
    pub high_score: u64,
    pub new_record: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not running; the loop should stop
    Stopped,
    /// Ticked and rendered. Carries the new integer score when it changed.
    Running { score_changed: Option<u64> },
    /// Collision this frame; nothing was rendered
    GameOver(GameOverReport),
}

impl FrameOutcome {
    pub fn control(&self) -> LoopControl {
        match self {
            FrameOutcome::Running { .. } => LoopControl::Continue,
            FrameOutcome::Stopped | FrameOutcome::GameOver(_) => LoopControl::Stop,
        }
    }
}

pub struct Game<S: ScoreStore> {
    session: GameSession,
    router: InputRouter,
    high: HighScore<S>,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64, store: S) -> Self {
        let router = InputRouter::new(config.swipe_threshold);
        Self {
            session: GameSession::new(config, viewport, seed),
            router,
            high: HighScore::load(store),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access for tests and debugging tools
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn high_score(&self) -> u64 {
        self.high.best()
    }

    pub fn high_score_store(&self) -> &S {
        self.high.store()
    }

    /// Begin a fresh session. Ignored (returns false) while already running.
    pub fn start(&mut self) -> bool {
        if self.session.is_running() {
            return false;
        }
        let from = self.session.phase;
        self.session.reset();
        log::info!("Game started (from {:?})", from);
        true
    }

    /// Route a device event. Returns the intent that was acted on.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Intent> {
        let running = self.session.is_running();
        let width = self.session.layout.viewport.width;
        let intent = self.router.route(event, running, width)?;
        match intent {
            Intent::Start => {
                self.start();
            }
            Intent::Shift(shift) => apply_shift(&mut self.session, shift),
        }
        Some(intent)
    }

    /// Recompute lane geometry for a new viewport size
    pub fn resize(&mut self, viewport: Viewport) {
        self.session.resize(viewport);
        log::debug!(
            "Resized to {}x{} (lane width {})",
            viewport.width,
            viewport.height,
            self.session.layout.lane_width
        );
    }

    /// Advance one tick without drawing
    pub fn step(&mut self) -> FrameOutcome {
        match tick(&mut self.session) {
            TickOutcome::Skipped => FrameOutcome::Stopped,
            TickOutcome::Advanced { score_changed } => FrameOutcome::Running { score_changed },
            TickOutcome::Collided => FrameOutcome::GameOver(self.finish()),
        }
    }

    /// Advance one tick and, unless it ended the game, draw the result
    pub fn frame<Sf: Surface>(
        &mut self,
        sprites: &SpriteSet<Sf::Image>,
        surface: &mut Sf,
    ) -> FrameOutcome {
        let outcome = self.step();
        if let FrameOutcome::Running { .. } = outcome {
            render(&self.session, sprites, surface);
        }
        outcome
    }

    fn finish(&mut self) -> GameOverReport {
        let score = self.session.floored_score();
        let new_record = self.high.record(score);
        let report = GameOverReport {
            score,
            high_score: self.high.best(),
            new_record,
        };
        log::info!(
            "Game over: score {} (high {}{})",
            report.score,
            report.high_score,
            if new_record { ", new record" } else { "" }
        );
        report
    }
}
