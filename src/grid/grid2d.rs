use glam::{UVec2, Vec2};

use crate::types::{FootholdError, MapInfo, Result};

/// Row-major 2D grid of cells over a [`MapInfo`].
///
/// Cell (0, 0) sits at the map origin; x grows to the right, y upward.
#[derive(Debug, Clone)]
pub struct Grid2d<T> {
    info: MapInfo,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(info: MapInfo, data: Vec<T>) -> Result<Self> {
        let expected_len = (info.width as usize) * (info.height as usize);
        if data.len() != expected_len {
            return Err(FootholdError::InvalidMetadata(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    pub fn new_with_value(info: MapInfo, value: T) -> Self
    where
        T: Clone,
    {
        let len = (info.width as usize) * (info.height as usize);
        Self {
            info,
            data: vec![value; len],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(info: MapInfo, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity((info.width as usize) * (info.height as usize));
        for y in 0..info.height {
            for x in 0..info.width {
                data.push(f(x, y));
            }
        }
        Self { info, data }
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn get(&self, cell: UVec2) -> Option<&T> {
        if cell.x >= self.info.width || cell.y >= self.info.height {
            return None;
        }
        Some(&self.data[self.index(cell)])
    }

    pub fn set(&mut self, cell: UVec2, value: T) -> Result<()> {
        if cell.x >= self.info.width || cell.y >= self.info.height {
            return Err(FootholdError::InvalidMetadata(format!(
                "cell ({}, {}) out of bounds for map {}x{}",
                cell.x, cell.y, self.info.width, self.info.height
            )));
        }
        let idx = self.index(cell);
        self.data[idx] = value;
        Ok(())
    }

    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.info.width as usize) + (cell.x as usize)
    }

    /// Cell containing a world position, if inside the map.
    pub fn world_to_cell(&self, pos: Vec2) -> Option<UVec2> {
        let local = (pos - self.info.origin) / self.info.resolution;
        if local.x < 0.0
            || local.y < 0.0
            || local.x >= self.info.width as f32
            || local.y >= self.info.height as f32
        {
            return None;
        }
        Some(UVec2::new(local.x as u32, local.y as u32))
    }

    /// World coordinates of a cell's center.
    pub fn cell_center(&self, cell: UVec2) -> Vec2 {
        self.info.origin
            + Vec2::new(
                (cell.x as f32 + 0.5) * self.info.resolution,
                (cell.y as f32 + 0.5) * self.info.resolution,
            )
    }

    /// Cells whose extent overlaps a world-axis-aligned rectangle.
    /// The rectangle is clamped to the map; an empty or fully-outside
    /// rectangle yields no cells.
    pub fn cells_in_world_aabb(&self, min: Vec2, max: Vec2) -> impl Iterator<Item = UVec2> + '_ {
        let local_min = (min - self.info.origin) / self.info.resolution;
        let local_max = (max - self.info.origin) / self.info.resolution;

        let x0 = local_min.x.floor().max(0.0);
        let y0 = local_min.y.floor().max(0.0);
        let x1 = local_max.x.floor().min(self.info.width as f32 - 1.0);
        let y1 = local_max.y.floor().min(self.info.height as f32 - 1.0);

        let (x_range, y_range) = if x1 < x0 || y1 < y0 {
            (0..0, 0..0)
        } else {
            (x0 as u32..x1 as u32 + 1, y0 as u32..y1 as u32 + 1)
        };

        y_range.flat_map(move |y| x_range.clone().map(move |x| UVec2::new(x, y)))
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid(width: u32, height: u32) -> Grid2d<f32> {
        let info = MapInfo {
            width,
            height,
            resolution: 1.0,
            origin: Vec2::ZERO,
        };
        Grid2d::new_with_value(info, 0.0)
    }

    #[test]
    fn world_cell_round_trip() {
        let grid = unit_grid(10, 10);

        let cell = grid.world_to_cell(Vec2::new(2.3, 7.9)).unwrap();
        assert_eq!(cell, UVec2::new(2, 7));
        assert_eq!(grid.cell_center(cell), Vec2::new(2.5, 7.5));

        assert!(grid.world_to_cell(Vec2::new(-0.1, 5.0)).is_none());
        assert!(grid.world_to_cell(Vec2::new(10.0, 5.0)).is_none());
    }

    #[test]
    fn new_rejects_mismatched_data() {
        let info = MapInfo {
            width: 4,
            height: 4,
            resolution: 1.0,
            origin: Vec2::ZERO,
        };
        assert!(Grid2d::new(info, vec![0.0f32; 15]).is_err());
    }

    #[test]
    fn aabb_scan_covers_overlapping_cells() {
        let grid = unit_grid(8, 8);

        let cells: Vec<UVec2> = grid
            .cells_in_world_aabb(Vec2::new(1.2, 2.2), Vec2::new(3.8, 3.1))
            .collect();

        assert!(cells.contains(&UVec2::new(1, 2)));
        assert!(cells.contains(&UVec2::new(3, 3)));
        assert!(!cells.contains(&UVec2::new(0, 2)));
        assert!(!cells.contains(&UVec2::new(4, 3)));
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn aabb_scan_clamps_to_map() {
        let grid = unit_grid(4, 4);

        let cells: Vec<UVec2> = grid
            .cells_in_world_aabb(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 10.0))
            .collect();
        assert_eq!(cells.len(), 16);

        let outside: Vec<UVec2> = grid
            .cells_in_world_aabb(Vec2::new(10.0, 10.0), Vec2::new(12.0, 12.0))
            .collect();
        assert!(outside.is_empty());
    }

    #[test]
    fn from_fn_fills_row_major() {
        let info = MapInfo {
            width: 3,
            height: 2,
            resolution: 1.0,
            origin: Vec2::ZERO,
        };
        let grid = Grid2d::from_fn(info, |x, y| (y * 10 + x) as f32);
        assert_eq!(grid.get(UVec2::new(2, 0)), Some(&2.0));
        assert_eq!(grid.get(UVec2::new(0, 1)), Some(&10.0));
        assert_eq!(grid.get(UVec2::new(3, 0)), None);
    }
}
