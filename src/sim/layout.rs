//! Lane geometry derived from the viewport

use glam::Vec2;

use crate::config::GameConfig;

/// Viewport size in CSS pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self { width, height, dpr }
    }

    /// Canvas backing-store size in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = if self.dpr > 0.0 { self.dpr } else { 1.0 };
        (
            (self.width * dpr).round().max(0.0) as u32,
            (self.height * dpr).round().max(0.0) as u32,
        )
    }
}

/// Lane positions and player dimensions for one viewport size.
///
/// Built in one go by [`Layout::compute`] so a half-updated layout is never
/// observable by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub lane_width: f32,
    /// Lane center x-coordinates, left to right
    pub lanes_x: Vec<f32>,
    pub player_size: Vec2,
    /// Player center y-coordinate
    pub player_y: f32,
}

impl Layout {
    pub fn compute(viewport: Viewport, config: &GameConfig) -> Self {
        let count = config.lane_count.max(1);
        let n = count as f32;
        let lane_width = config.lane_width_cap.min(viewport.width / n);
        let first = viewport.width / 2.0 - (n / 2.0 - 0.5) * lane_width;
        let lanes_x = (0..count).map(|i| first + i as f32 * lane_width).collect();

        let player_w = config
            .player_width_cap
            .min(lane_width * config.player_width_ratio);
        let player_h = player_w * config.player_aspect;
        let player_y = viewport.height - player_h - config.player_bottom_margin;

        Self {
            viewport,
            lane_width,
            lanes_x,
            player_size: Vec2::new(player_w, player_h),
            player_y,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes_x.len()
    }

    /// Center x of a lane, clamped to the last lane
    pub fn lane_x(&self, lane: usize) -> f32 {
        let last = self.lanes_x.len().saturating_sub(1);
        self.lanes_x.get(lane.min(last)).copied().unwrap_or(0.0)
    }

    /// X-coordinates of the dividers between adjacent lanes
    pub fn divider_xs(&self) -> impl Iterator<Item = f32> + '_ {
        let n = self.lane_count() as f32;
        let left = self.viewport.width / 2.0 - (n / 2.0) * self.lane_width;
        (1..self.lane_count()).map(move |i| left + i as f32 * self.lane_width)
    }
}
