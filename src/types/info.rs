//! Map metadata.

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    pub resolution: f32,
    /// Origin of cell (0, 0) in world coordinates (meters).
    pub origin: Vec2,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            resolution: 0.05,
            origin: Vec2::ZERO,
        }
    }
}

impl MapInfo {
    pub fn square(width: u32, resolution: f32) -> Self {
        Self {
            width,
            height: width,
            resolution,
            ..Default::default()
        }
    }

    /// Width of the map in world units (meters).
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.resolution
    }

    /// Height of the map in world units (meters).
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.resolution
    }

    /// Center of the map in 2D world coordinates.
    #[inline]
    pub fn world_center(&self) -> Vec2 {
        self.origin + Vec2::new(0.5 * self.world_width(), 0.5 * self.world_height())
    }

    /// Whether a 2D world position falls inside the mapped region.
    /// Convention: [origin, origin + extent) on both axes.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.origin.x
            && pos.y >= self.origin.y
            && pos.x < self.origin.x + self.world_width()
            && pos.y < self.origin.y + self.world_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_half_open_extent() {
        let info = MapInfo {
            width: 10,
            height: 20,
            resolution: 0.5,
            origin: Vec2::new(-1.0, 2.0),
        };

        assert!(info.contains(Vec2::new(-1.0, 2.0)));
        assert!(info.contains(Vec2::new(3.99, 11.99)));
        assert!(!info.contains(Vec2::new(4.0, 5.0)));
        assert!(!info.contains(Vec2::new(0.0, 12.0)));
        assert!(!info.contains(Vec2::new(-1.01, 5.0)));
    }

    #[test]
    fn world_extent_helpers() {
        let info = MapInfo::square(40, 0.05);
        assert_eq!(info.world_width(), 2.0);
        assert_eq!(info.world_height(), 2.0);
        assert_eq!(info.world_center(), Vec2::new(1.0, 1.0));
    }
}
