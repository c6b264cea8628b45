use std::path::{Path, PathBuf};

use glam::Vec2;
use image::GenericImageView;
use serde::Deserialize;

use crate::grid::Grid2d;
use crate::terrain::{ELEVATION_LAYER, TerrainMap};
use crate::types::{FootholdError, MapInfo, Result};

#[derive(Debug, Deserialize)]
struct HeightmapMetadata {
    image: String,
    resolution: f32,
    origin: [f32; 2],
    min_height: f32,
    max_height: f32,
    /// Raw 16-bit pixel value marking unknown cells, if any.
    #[serde(default)]
    unknown_value: Option<u16>,
}

/// Load a terrain map from a YAML metadata file referencing a grayscale
/// heightmap image.
///
/// Pixel values scale linearly from `min_height` (0) to `max_height`
/// (full-scale 16-bit). Image rows are flipped so grid y grows upward.
/// Pixels equal to `unknown_value` become unknown (`NaN`) cells.
pub fn load_terrain_map(yaml_path: impl AsRef<Path>) -> Result<TerrainMap> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let metadata: HeightmapMetadata = serde_yaml::from_str(&yaml_str)?;

    if metadata.resolution <= 0.0 {
        return Err(FootholdError::InvalidMetadata(
            "resolution must be positive".to_string(),
        ));
    }
    if metadata.max_height <= metadata.min_height {
        return Err(FootholdError::InvalidMetadata(
            "max_height must be greater than min_height".to_string(),
        ));
    }

    let image_path = resolve_image_path(yaml_path, &metadata.image);
    let image = image::open(&image_path)?;
    let (width, height) = image.dimensions();
    let luma = image.to_luma16();

    let span = metadata.max_height - metadata.min_height;
    let mut data = vec![f32::NAN; (width as usize) * (height as usize)];

    for y in 0..height {
        for x in 0..width {
            let value = luma.get_pixel(x, y).0[0];
            let elevation = if metadata.unknown_value == Some(value) {
                f32::NAN
            } else {
                metadata.min_height + (value as f32 / u16::MAX as f32) * span
            };

            let grid_y = height - y - 1;
            let idx = (grid_y as usize) * (width as usize) + (x as usize);
            data[idx] = elevation;
        }
    }

    let info = MapInfo {
        width,
        height,
        resolution: metadata.resolution,
        origin: Vec2::new(metadata.origin[0], metadata.origin[1]),
    };

    let elevation = Grid2d::new(info.clone(), data)?;
    let mut map = TerrainMap::new(info);
    map.add_layer(ELEVATION_LAYER, elevation)?;

    log::info!(
        "loaded heightmap {} ({}x{} cells @ {} m)",
        image_path.display(),
        width,
        height,
        metadata.resolution
    );
    Ok(map)
}

fn resolve_image_path(yaml_path: &Path, image_ref: &str) -> PathBuf {
    let image_path = PathBuf::from(image_ref);
    if image_path.is_absolute() {
        return image_path;
    }

    match yaml_path.parent() {
        Some(parent) => parent.join(image_path),
        None => image_path,
    }
}
