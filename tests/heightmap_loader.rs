use std::path::Path;

use approx::assert_relative_eq;
use foothold::{FootholdError, load_terrain_map};
use glam::Vec2;

#[test]
fn loads_heightmap_fixture() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let yaml_path = manifest_dir.join("tests/fixtures/terrain.yaml");

    let map = load_terrain_map(&yaml_path).expect("map should load");

    let info = map.info();
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 4);
    assert_eq!(info.resolution, 0.5);
    assert_eq!(info.origin, Vec2::new(1.0, -1.0));

    assert!(map.is_inside(Vec2::new(1.5, 0.0)));
    assert!(!map.is_inside(Vec2::new(3.5, 0.0)));

    // Top image row becomes the highest grid row.
    assert_relative_eq!(
        map.elevation_at(Vec2::new(1.75, 0.75)).unwrap(),
        64.0 / 255.0 * 2.0,
        epsilon = 1e-4
    );
    assert_relative_eq!(
        map.elevation_at(Vec2::new(2.75, 0.75)).unwrap(),
        2.0,
        epsilon = 1e-4
    );
    // Bottom image row becomes grid row 0.
    assert_relative_eq!(
        map.elevation_at(Vec2::new(2.75, -0.75)).unwrap(),
        128.0 / 255.0 * 2.0,
        epsilon = 1e-4
    );

    // Pixels matching unknown_value decode as unknown cells.
    assert!(map.elevation_at(Vec2::new(1.25, -0.75)).unwrap().is_nan());
}

#[test]
fn rejects_degenerate_height_range() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let yaml_path = manifest_dir.join("tests/fixtures/inverted.yaml");

    assert!(matches!(
        load_terrain_map(&yaml_path),
        Err(FootholdError::InvalidMetadata(_))
    ));
}
