//! Foot-placement validity and clearance evaluation on height-field terrain.
//!
//! The crate answers one question for sampling-based legged-robot planners:
//! is this candidate body pose a physically admissible stance, and if graded
//! clearance is enabled, how close is it to becoming invalid? See
//! [`FootPlacementEvaluator`] for the evaluation model.

pub mod checker;
pub mod evaluator;
pub mod grid;
pub mod loaders;
pub mod sampler;
pub mod terrain;
pub mod types;

pub use checker::{BoxPose, FootBoxChecker};
pub use evaluator::{CostWeights, FootPlacementEvaluator};
pub use grid::Grid2d;
pub use loaders::load_terrain_map;
pub use sampler::GoalPoseSampler;
pub use terrain::{ELEVATION_LAYER, TerrainMap};
pub use types::{FootholdConfig, FootholdError, MapInfo, Pose3};
