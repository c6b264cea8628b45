//! Height-field terrain maps.
//!
//! A [`TerrainMap`] is a set of named `f32` layers over a common [`MapInfo`],
//! following the grid-map convention of elevation data under a well-known
//! layer name. Unknown cells hold `f32::NAN`.

use std::collections::HashMap;

use glam::Vec2;

use crate::grid::Grid2d;
use crate::types::{FootholdError, MapInfo, Result};

/// Layer name holding terrain elevation in meters.
pub const ELEVATION_LAYER: &str = "elevation";

#[derive(Debug, Clone)]
pub struct TerrainMap {
    info: MapInfo,
    layers: HashMap<String, Grid2d<f32>>,
}

impl TerrainMap {
    pub fn new(info: MapInfo) -> Self {
        Self {
            info,
            layers: HashMap::new(),
        }
    }

    /// Create a map whose elevation layer is filled by `f(x, y)` per cell.
    pub fn from_elevation_fn(info: MapInfo, f: impl FnMut(u32, u32) -> f32) -> Self {
        let elevation = Grid2d::from_fn(info.clone(), f);
        let mut map = Self::new(info);
        map.layers.insert(ELEVATION_LAYER.to_string(), elevation);
        map
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// Add or replace a layer. The layer's metadata must match the map's.
    pub fn add_layer(&mut self, name: impl Into<String>, layer: Grid2d<f32>) -> Result<()> {
        if *layer.info() != self.info {
            return Err(FootholdError::InvalidMetadata(
                "layer metadata does not match map metadata".to_string(),
            ));
        }
        self.layers.insert(name.into(), layer);
        Ok(())
    }

    pub fn layer(&self, name: &str) -> Option<&Grid2d<f32>> {
        self.layers.get(name)
    }

    /// Whether a 2D world position lies inside the mapped region.
    #[inline]
    pub fn is_inside(&self, pos: Vec2) -> bool {
        self.info.contains(pos)
    }

    /// Elevation at a world position, `None` outside the map or without an
    /// elevation layer, `NaN` for unknown cells.
    pub fn elevation_at(&self, pos: Vec2) -> Option<f32> {
        let elevation = self.layer(ELEVATION_LAYER)?;
        let cell = elevation.world_to_cell(pos)?;
        elevation.get(cell).copied()
    }
}
