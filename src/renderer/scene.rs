//! Frame composition
//!
//! Draw order: background gradient, lane dividers, obstacles, player.
//! Rendering only reads the session.

use super::assets::{SpriteId, SpriteSet, Visual};
use crate::sim::{GameSession, Rect};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const BACKGROUND_TOP: &str = "#1a0f0a";
    pub const BACKGROUND_BOTTOM: &str = "#000";
    pub const LANE_MARK: &str = "rgba(139, 69, 19, 0.2)";
    pub const OBSTACLE: &str = "#8b4513";
    pub const PLAYER: &str = "rgba(210, 105, 30, 0.9)";
}

/// Lane divider dash geometry
pub const DASH_PERIOD: f32 = 60.0;
pub const DASH_LENGTH: f32 = 30.0;
pub const DASH_WIDTH: f32 = 4.0;

/// A 2D drawing target
pub trait Surface {
    type Image;

    /// Fill `area` with a top-to-bottom gradient
    fn fill_gradient(&mut self, area: Rect, top: &str, bottom: &str);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
}

/// Paint one frame of `session`
pub fn render<S: Surface>(session: &GameSession, sprites: &SpriteSet<S::Image>, surface: &mut S) {
    let viewport = session.layout.viewport;
    surface.fill_gradient(
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
        colors::BACKGROUND_TOP,
        colors::BACKGROUND_BOTTOM,
    );

    // Dashes scroll down with distance travelled
    let offset = (session.time_ticks as f32 * session.speed) % DASH_PERIOD;
    for sx in session.layout.divider_xs() {
        let mut y = -offset;
        while y < viewport.height {
            surface.fill_rect(
                Rect::new(sx - DASH_WIDTH / 2.0, y, DASH_WIDTH, DASH_LENGTH),
                colors::LANE_MARK,
            );
            y += DASH_PERIOD;
        }
    }

    for ob in &session.obstacles {
        draw_sprite(surface, sprites.get(SpriteId::Obstacle(ob.kind)), ob.rect, colors::OBSTACLE);
    }

    draw_sprite(
        surface,
        sprites.get(SpriteId::Player),
        session.player.bounds(),
        colors::PLAYER,
    );
}

fn draw_sprite<S: Surface>(surface: &mut S, visual: &Visual<S::Image>, rect: Rect, fallback: &str) {
    match visual {
        Visual::Ready(image) => surface.draw_image(image, rect),
        Visual::Placeholder => surface.fill_rect(rect, fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Obstacle, ObstacleKind, Viewport};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Gradient(Rect),
        Fill(Rect, &'static str),
        Image(&'static str, Rect),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        type Image = &'static str;

        fn fill_gradient(&mut self, area: Rect, _top: &str, _bottom: &str) {
            self.ops.push(Op::Gradient(area));
        }

        fn fill_rect(&mut self, rect: Rect, color: &str) {
            let color = match color {
                colors::LANE_MARK => "lane",
                colors::OBSTACLE => "obstacle",
                colors::PLAYER => "player",
                _ => "other",
            };
            self.ops.push(Op::Fill(rect, color));
        }

        fn draw_image(&mut self, image: &&'static str, rect: Rect) {
            self.ops.push(Op::Image(*image, rect));
        }
    }

    fn session() -> GameSession {
        let mut s = GameSession::new(GameConfig::default(), Viewport::new(400.0, 600.0, 1.0), 3);
        s.reset();
        s.obstacles.push(Obstacle {
            rect: Rect::new(15.0, 100.0, 70.0, 80.0),
            kind: ObstacleKind::Owl,
        });
        s.obstacles.push(Obstacle {
            rect: Rect::new(215.0, 20.0, 70.0, 60.0),
            kind: ObstacleKind::Bird,
        });
        s
    }

    #[test]
    fn test_draw_order_with_placeholders() {
        let s = session();
        let mut rec = Recorder::default();
        render(&s, &SpriteSet::new(), &mut rec);

        assert_eq!(rec.ops[0], Op::Gradient(Rect::new(0.0, 0.0, 400.0, 600.0)));
        // 3 dividers x 10 dashes (600 / 60) at offset 0
        let lanes = rec.ops.iter().filter(|op| matches!(op, Op::Fill(_, "lane"))).count();
        assert_eq!(lanes, 30);

        let n = rec.ops.len();
        assert_eq!(rec.ops[n - 3], Op::Fill(s.obstacles[0].rect, "obstacle"));
        assert_eq!(rec.ops[n - 2], Op::Fill(s.obstacles[1].rect, "obstacle"));
        assert_eq!(rec.ops[n - 1], Op::Fill(s.player.bounds(), "player"));
    }

    #[test]
    fn test_ready_sprites_are_drawn_as_images() {
        let s = session();
        let mut sprites = SpriteSet::new();
        sprites.mark_ready(SpriteId::Player, "bee");
        sprites.mark_ready(SpriteId::Obstacle(ObstacleKind::Owl), "owl");

        let mut rec = Recorder::default();
        render(&s, &sprites, &mut rec);

        let n = rec.ops.len();
        assert_eq!(rec.ops[n - 3], Op::Image("owl", s.obstacles[0].rect));
        // Bird sprite still loading
        assert_eq!(rec.ops[n - 2], Op::Fill(s.obstacles[1].rect, "obstacle"));
        assert_eq!(rec.ops[n - 1], Op::Image("bee", s.player.bounds()));
    }

    #[test]
    fn test_lane_marks_scroll() {
        let mut s = session();
        s.obstacles.clear();
        s.time_ticks = 5;
        s.speed = 4.0;
        let mut rec = Recorder::default();
        render(&s, &SpriteSet::new(), &mut rec);

        // offset = 20, first dash starts above the top edge
        match &rec.ops[1] {
            Op::Fill(rect, "lane") => {
                assert_eq!(rect.pos.y, -20.0);
                assert_eq!(rect.pos.x, 98.0);
                assert_eq!(rect.size.x, DASH_WIDTH);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }
}
