//! Box-vs-height-field collision primitive.
//!
//! [`FootBoxChecker`] answers whether an oriented box intersects the terrain
//! column of a height-field snapshot. It holds its own copy of the elevation
//! layer: results reflect the snapshot pushed by the last
//! [`set_height_field`](FootBoxChecker::set_height_field), not the live map.
//! The checker takes `&mut self` per query and is not thread-safe; callers
//! serialize access externally.

use glam::{Mat3, Vec2, Vec3};

use crate::grid::Grid2d;
use crate::terrain::TerrainMap;
use crate::types::{FootholdError, Result};

/// Pose of one probe box: world origin of the box center plus its rotation.
#[derive(Debug, Clone, Copy)]
pub struct BoxPose {
    pub origin: Vec3,
    pub rotation: Mat3,
}

pub struct FootBoxChecker {
    half_extents: Vec3,
    height_field: Option<Grid2d<f32>>,
    num_queries: u64,
}

impl FootBoxChecker {
    /// Checker for boxes of the given dimensions (meters).
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            half_extents: 0.5 * Vec3::new(length, width, height),
            height_field: None,
            num_queries: 0,
        }
    }

    /// Replace the internal height-field snapshot with the named layer of
    /// `map`. Must be called again after the map changes for queries to see
    /// the new terrain.
    pub fn set_height_field(&mut self, map: &TerrainMap, layer: &str) -> Result<()> {
        let field = map
            .layer(layer)
            .ok_or_else(|| FootholdError::MissingLayer(layer.to_string()))?;
        self.height_field = Some(field.clone());
        Ok(())
    }

    /// Whether any of the given boxes intersects the terrain.
    ///
    /// Without a snapshot no box collides. Unknown (`NaN`) cells never
    /// collide.
    pub fn check_collision(&mut self, poses: &[BoxPose]) -> bool {
        self.num_queries += 1;
        let Some(field) = &self.height_field else {
            return false;
        };
        poses
            .iter()
            .any(|pose| box_collides(field, pose, self.half_extents))
    }

    /// Number of collision queries answered so far.
    pub fn num_queries(&self) -> u64 {
        self.num_queries
    }
}

/// Terrain-column test: the box collides when a known cell under its
/// footprint has elevation above the lowest corner of the box's bottom face.
/// Assumes near-upright boxes; the footprint is the horizontal projection of
/// the bottom face, with a half-cell margin so boxes smaller than a cell
/// still probe the cell beneath them.
fn box_collides(field: &Grid2d<f32>, pose: &BoxPose, half: Vec3) -> bool {
    let axis_x = pose.rotation.x_axis;
    let axis_y = pose.rotation.y_axis;
    let axis_z = pose.rotation.z_axis;

    let mut bottom = f32::INFINITY;
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            let corner =
                pose.origin + axis_x * (sx * half.x) + axis_y * (sy * half.y) - axis_z * half.z;
            bottom = bottom.min(corner.z);
            min = min.min(corner.truncate());
            max = max.max(corner.truncate());
        }
    }

    let margin = 0.5 * field.info().resolution;
    let center = pose.origin.truncate();
    let long_axis = axis_x.truncate().try_normalize().unwrap_or(Vec2::X);
    let lat_axis = axis_y.truncate().try_normalize().unwrap_or(Vec2::Y);

    let pad = Vec2::splat(margin);
    for cell in field.cells_in_world_aabb(min - pad, max + pad) {
        let d = field.cell_center(cell) - center;
        if d.dot(long_axis).abs() > half.x + margin || d.dot(lat_axis).abs() > half.y + margin {
            continue;
        }
        if let Some(z) = field.get(cell) {
            if z.is_finite() && *z > bottom {
                return true;
            }
        }
    }
    false
}
