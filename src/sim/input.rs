//! Input routing: raw device events to lane shifts and start requests

use super::layout::Layout;
use super::state::{GameSession, Player};

/// Direction of a one-lane move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShift {
    Left,
    Right,
}

impl LaneShift {
    pub fn delta(self) -> isize {
        match self {
            LaneShift::Left => -1,
            LaneShift::Right => 1,
        }
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Space" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Raw input event; x-coordinates are relative to the play area's left edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    Click { x: f32 },
    /// Start or restart button
    StartButton,
}

/// What the game should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Shift(LaneShift),
}

/// Turns device events into intents.
///
/// Holds the only cross-event state: where the current touch began.
#[derive(Debug, Clone)]
pub struct InputRouter {
    touch_start_x: Option<f32>,
    swipe_threshold: f32,
}

impl InputRouter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            touch_start_x: None,
            swipe_threshold,
        }
    }

    /// Route one event. While not running only start actions get through.
    pub fn route(&mut self, event: InputEvent, running: bool, play_width: f32) -> Option<Intent> {
        if !running {
            self.touch_start_x = None;
            return match event {
                InputEvent::KeyDown(Key::Space)
                | InputEvent::TouchStart { .. }
                | InputEvent::StartButton => Some(Intent::Start),
                _ => None,
            };
        }

        match event {
            InputEvent::KeyDown(Key::ArrowLeft) => Some(Intent::Shift(LaneShift::Left)),
            InputEvent::KeyDown(Key::ArrowRight) => Some(Intent::Shift(LaneShift::Right)),
            InputEvent::KeyDown(_) | InputEvent::StartButton => None,
            InputEvent::TouchStart { x } => {
                self.touch_start_x = Some(x);
                None
            }
            InputEvent::TouchEnd { x } => {
                let start = self.touch_start_x.take()?;
                swipe_direction(x - start, self.swipe_threshold).map(Intent::Shift)
            }
            InputEvent::Click { x } => Some(Intent::Shift(tap_direction(x, play_width))),
        }
    }
}

/// Direction of a swipe, if it travelled farther than `threshold`
pub fn swipe_direction(dx: f32, threshold: f32) -> Option<LaneShift> {
    if dx.abs() > threshold {
        Some(if dx < 0.0 {
            LaneShift::Left
        } else {
            LaneShift::Right
        })
    } else {
        None
    }
}

/// Left half of the play area moves left, right half moves right
pub fn tap_direction(x: f32, play_width: f32) -> LaneShift {
    if x < play_width / 2.0 {
        LaneShift::Left
    } else {
        LaneShift::Right
    }
}

/// Clamp the lane change and retarget; the drawn position only eases
pub fn shift_lane(player: &mut Player, layout: &Layout, shift: LaneShift) {
    let last = layout.lane_count().saturating_sub(1) as isize;
    let lane = (player.lane as isize + shift.delta()).clamp(0, last);
    player.lane = lane as usize;
    player.target_x = layout.lane_x(player.lane);
}

/// Apply a shift to a running session
pub fn apply_shift(session: &mut GameSession, shift: LaneShift) {
    shift_lane(&mut session.player, &session.layout, shift);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::layout::Viewport;

    fn layout() -> Layout {
        Layout::compute(Viewport::new(400.0, 700.0, 1.0), &GameConfig::default())
    }

    #[test]
    fn test_shift_clamps_left() {
        let layout = layout();
        let mut player = Player::placed(0, &layout);
        shift_lane(&mut player, &layout, LaneShift::Left);
        assert_eq!(player.lane, 0);
        assert_eq!(player.target_x, 50.0);
    }

    #[test]
    fn test_shift_clamps_right() {
        let layout = layout();
        let mut player = Player::placed(3, &layout);
        shift_lane(&mut player, &layout, LaneShift::Right);
        assert_eq!(player.lane, 3);
        assert_eq!(player.target_x, 350.0);
    }

    #[test]
    fn test_shift_retargets_without_snapping() {
        let layout = layout();
        let mut player = Player::placed(1, &layout);
        shift_lane(&mut player, &layout, LaneShift::Right);
        assert_eq!(player.lane, 2);
        assert_eq!(player.target_x, 250.0);
        assert_eq!(player.x, 150.0);
    }

    #[test]
    fn test_idle_only_starts() {
        let mut router = InputRouter::new(50.0);
        assert_eq!(router.route(InputEvent::KeyDown(Key::Space), false, 400.0), Some(Intent::Start));
        assert_eq!(router.route(InputEvent::StartButton, false, 400.0), Some(Intent::Start));
        assert_eq!(
            router.route(InputEvent::TouchStart { x: 10.0 }, false, 400.0),
            Some(Intent::Start)
        );
        assert_eq!(router.route(InputEvent::KeyDown(Key::ArrowLeft), false, 400.0), None);
        assert_eq!(router.route(InputEvent::Click { x: 10.0 }, false, 400.0), None);
        assert_eq!(router.route(InputEvent::TouchEnd { x: 300.0 }, false, 400.0), None);
    }

    #[test]
    fn test_running_ignores_start_actions() {
        let mut router = InputRouter::new(50.0);
        assert_eq!(router.route(InputEvent::KeyDown(Key::Space), true, 400.0), None);
        assert_eq!(router.route(InputEvent::StartButton, true, 400.0), None);
    }

    #[test]
    fn test_arrow_keys() {
        let mut router = InputRouter::new(50.0);
        assert_eq!(
            router.route(InputEvent::KeyDown(Key::ArrowLeft), true, 400.0),
            Some(Intent::Shift(LaneShift::Left))
        );
        assert_eq!(
            router.route(InputEvent::KeyDown(Key::ArrowRight), true, 400.0),
            Some(Intent::Shift(LaneShift::Right))
        );
    }

    #[test]
    fn test_swipe_threshold() {
        let mut router = InputRouter::new(50.0);

        // Exactly the threshold is not enough
        router.route(InputEvent::TouchStart { x: 200.0 }, true, 400.0);
        assert_eq!(router.route(InputEvent::TouchEnd { x: 250.0 }, true, 400.0), None);

        router.route(InputEvent::TouchStart { x: 200.0 }, true, 400.0);
        assert_eq!(
            router.route(InputEvent::TouchEnd { x: 120.0 }, true, 400.0),
            Some(Intent::Shift(LaneShift::Left))
        );

        router.route(InputEvent::TouchStart { x: 100.0 }, true, 400.0);
        assert_eq!(
            router.route(InputEvent::TouchEnd { x: 151.0 }, true, 400.0),
            Some(Intent::Shift(LaneShift::Right))
        );
    }

    #[test]
    fn test_swipe_evaluated_once_per_gesture() {
        let mut router = InputRouter::new(50.0);
        router.route(InputEvent::TouchStart { x: 0.0 }, true, 400.0);
        assert!(router.route(InputEvent::TouchEnd { x: 200.0 }, true, 400.0).is_some());
        // A second release without a new press does nothing
        assert_eq!(router.route(InputEvent::TouchEnd { x: 300.0 }, true, 400.0), None);
    }

    #[test]
    fn test_tap_halves() {
        assert_eq!(tap_direction(10.0, 400.0), LaneShift::Left);
        assert_eq!(tap_direction(199.9, 400.0), LaneShift::Left);
        assert_eq!(tap_direction(200.0, 400.0), LaneShift::Right);
        assert_eq!(tap_direction(390.0, 400.0), LaneShift::Right);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("KeyA"), Key::Other);
    }
}
