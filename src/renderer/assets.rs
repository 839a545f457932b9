//! Sprite availability
//!
//! Each sprite starts as a placeholder and flips to ready exactly once, when
//! its image finishes loading. Rendering never asks the image itself.

use crate::sim::ObstacleKind;

/// How a sprite is currently drawn
#[derive(Debug, Clone, PartialEq)]
pub enum Visual<I> {
    Ready(I),
    Placeholder,
}

impl<I> Visual<I> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Visual::Ready(_))
    }
}

/// Identifies one sprite slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Obstacle(ObstacleKind),
}

impl SpriteId {
    /// Every sprite the game loads
    pub fn all() -> impl Iterator<Item = SpriteId> {
        std::iter::once(SpriteId::Player).chain(ObstacleKind::ALL.into_iter().map(SpriteId::Obstacle))
    }

    /// Image path relative to the page
    pub fn path(self) -> &'static str {
        match self {
            SpriteId::Player => "images/bee2.png",
            SpriteId::Obstacle(ObstacleKind::Owl) => "images/owl.png",
            SpriteId::Obstacle(ObstacleKind::Bear) => "images/bear.png",
            SpriteId::Obstacle(ObstacleKind::Bird) => "images/bird.png",
        }
    }
}

/// Player sprite plus one sprite per obstacle kind
#[derive(Debug, Clone)]
pub struct SpriteSet<I> {
    player: Visual<I>,
    obstacles: [Visual<I>; 3],
}

impl<I> Default for SpriteSet<I> {
    fn default() -> Self {
        Self {
            player: Visual::Placeholder,
            obstacles: std::array::from_fn(|_| Visual::Placeholder),
        }
    }
}

impl<I> SpriteSet<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SpriteId) -> &Visual<I> {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Obstacle(kind) => &self.obstacles[kind.index()],
        }
    }

    /// Resolve a slot once its image has loaded
    pub fn mark_ready(&mut self, id: SpriteId, image: I) {
        let slot = match id {
            SpriteId::Player => &mut self.player,
            SpriteId::Obstacle(kind) => &mut self.obstacles[kind.index()],
        };
        *slot = Visual::Ready(image);
        log::debug!(
            "Sprite ready: {} ({}/{})",
            id.path(),
            self.ready_count(),
            SpriteId::all().count()
        );
    }

    pub fn ready_count(&self) -> usize {
        SpriteId::all().filter(|id| self.get(*id).is_ready()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_placeholders() {
        let sprites: SpriteSet<u8> = SpriteSet::new();
        assert_eq!(sprites.ready_count(), 0);
        for id in SpriteId::all() {
            assert_eq!(sprites.get(id), &Visual::Placeholder);
        }
    }

    #[test]
    fn test_mark_ready_touches_one_slot() {
        let mut sprites = SpriteSet::new();
        sprites.mark_ready(SpriteId::Obstacle(ObstacleKind::Bear), 7u8);
        assert_eq!(sprites.get(SpriteId::Obstacle(ObstacleKind::Bear)), &Visual::Ready(7));
        assert_eq!(sprites.get(SpriteId::Obstacle(ObstacleKind::Owl)), &Visual::Placeholder);
        assert_eq!(sprites.get(SpriteId::Player), &Visual::Placeholder);
        assert_eq!(sprites.ready_count(), 1);
    }

    #[test]
    fn test_every_sprite_has_a_distinct_path() {
        let mut paths: Vec<_> = SpriteId::all().map(SpriteId::path).collect();
        assert_eq!(paths.len(), 4);
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }
}
