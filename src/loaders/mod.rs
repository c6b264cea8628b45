pub mod heightmap;

pub use heightmap::load_terrain_map;
