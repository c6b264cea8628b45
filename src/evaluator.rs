//! Foot-placement validity and clearance evaluation.
//!
//! [`FootPlacementEvaluator`] is the per-state oracle consumed by a
//! sampling-based planner: given a candidate 6-DOF body pose it derives the
//! four foot stance poses and answers valid/invalid, or a graded clearance
//! cost, against the bound terrain map.
//!
//! Two distinct 9-point stencils are involved and intentionally kept apart:
//!
//! - [`is_valid`](FootPlacementEvaluator::is_valid) in graded mode runs a
//!   parametrized 3×3 grid search per foot and accepts the foot as soon as
//!   any sub-box is clear (partial foot-patch contact).
//! - [`clearance`](FootPlacementEvaluator::clearance) probes a fixed
//!   named-point pattern (center, longitudinal, lateral, diagonal) whose
//!   weights are keyed to point identity, and never exits early.
//!
//! The collision checker is a single shared mutable object; every query
//! into it is serialized by one mutex whose critical section covers only the
//! pose staging and the collision test itself.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::{Mutex, RwLock};

use crate::checker::{BoxPose, FootBoxChecker};
use crate::terrain::{ELEVATION_LAYER, TerrainMap};
use crate::types::{ClearanceConfig, FootholdConfig, FootholdError, MapInfo, Pose3, Result};

/// Number of sub-boxes the foot reach envelope is split into, per axis, for
/// the graded-mode grid search.
const N_LONG_SPLIT: u32 = 3;
const N_LAT_SPLIT: u32 = 3;

/// Weights of the fixed clearance stencil, keyed by point identity.
#[derive(Debug, Clone, Copy)]
pub struct CostWeights {
    pub center: f32,
    pub lon: f32,
    pub lat: f32,
    pub diag: f32,
    max_cost: f32,
}

impl CostWeights {
    pub fn new(center: f32, lon: f32, lat: f32, diag: f32) -> Self {
        Self {
            center,
            lon,
            lat,
            diag,
            // Cost if all 4 feet x 9 stencil points were invalid at once.
            max_cost: 4.0 * (center + 2.0 * lon + 2.0 * lat + 4.0 * diag),
        }
    }

    pub fn from_config(config: &ClearanceConfig) -> Self {
        Self::new(
            config.cost_center,
            config.cost_lon,
            config.cost_lat,
            config.cost_diag,
        )
    }

    /// Clearance returned when every stencil point is clear.
    #[inline]
    pub fn max_cost(&self) -> f32 {
        self.max_cost
    }
}

/// Per-state validity and clearance oracle for a quadruped on height-field
/// terrain.
///
/// Construction fixes the box footprint, stance offsets, policy flag and
/// cost weights; only the map handle and the checker's height-field snapshot
/// change afterwards. All query methods take `&self` and are safe to call
/// from multiple planner threads through an `Arc`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use foothold::{FootPlacementEvaluator, FootholdConfig, MapInfo, Pose3, TerrainMap};
///
/// let config = FootholdConfig::default();
/// let evaluator = FootPlacementEvaluator::new(&config);
///
/// let map = Arc::new(TerrainMap::from_elevation_fn(
///     MapInfo::square(100, 0.05),
///     |_, _| 0.0,
/// ));
/// evaluator.set_map(map);
/// evaluator.update_height_field()?;
///
/// // Feet hover above flat terrain: every foot box is clear.
/// assert!(evaluator.is_valid(&Pose3::from_xyz(2.5, 2.5, 1.0)));
/// # Ok::<(), foothold::FootholdError>(())
/// ```
pub struct FootPlacementEvaluator {
    box_length: f32,
    box_width: f32,
    foot_offset: Vec2,
    clearance_enabled: bool,
    unknown_space_untraversable: bool,
    weights: CostWeights,
    map: RwLock<Option<Arc<TerrainMap>>>,
    checker: Mutex<FootBoxChecker>,
}

impl FootPlacementEvaluator {
    pub fn new(config: &FootholdConfig) -> Self {
        let reach = &config.robot.feet.reach;
        let clearance = &config.objectives.clearance;

        // Graded mode probes the reach envelope piecewise as sub-boxes;
        // binary mode checks it as one box.
        let (box_length, box_width) = if clearance.enable {
            (reach.x / N_LONG_SPLIT as f32, reach.y / N_LAT_SPLIT as f32)
        } else {
            (reach.x, reach.y)
        };

        Self {
            box_length,
            box_width,
            foot_offset: Vec2::new(config.robot.feet.offset.x, config.robot.feet.offset.y),
            clearance_enabled: clearance.enable,
            unknown_space_untraversable: config.planner.unknown_space_untraversable,
            weights: CostWeights::from_config(clearance),
            map: RwLock::new(None),
            checker: Mutex::new(FootBoxChecker::new(box_length, box_width, reach.z)),
        }
    }

    /// Rebind the terrain map handle. Queries keep answering against the
    /// checker's current snapshot until [`update_height_field`] runs.
    ///
    /// [`update_height_field`]: FootPlacementEvaluator::update_height_field
    pub fn set_map(&self, map: Arc<TerrainMap>) {
        log::debug!(
            "binding terrain map ({}x{} cells @ {} m)",
            map.info().width,
            map.info().height,
            map.info().resolution
        );
        *self.map.write() = Some(map);
    }

    /// Whether a terrain map is currently bound.
    pub fn has_map(&self) -> bool {
        self.map.read().is_some()
    }

    /// Metadata of the bound terrain map, if any.
    pub fn map_info(&self) -> Option<MapInfo> {
        self.map.read().as_ref().map(|map| map.info().clone())
    }

    /// Push the bound map's elevation layer into the collision checker.
    ///
    /// Must be called after every [`set_map`](FootPlacementEvaluator::set_map)
    /// (or terrain update) before validity queries reflect the new terrain.
    /// Contends on the checker mutex with all validity queries.
    pub fn update_height_field(&self) -> Result<()> {
        let map = self.map.read().clone().ok_or(FootholdError::NoMapBound)?;
        let mut checker = self.checker.lock();
        checker.set_height_field(&map, ELEVATION_LAYER)?;
        log::debug!("refreshed height field snapshot");
        Ok(())
    }

    /// The four foot stance poses derived from a body pose: front-left,
    /// front-right, rear-left, rear-right.
    pub fn foot_poses(&self, pose: &Pose3) -> [Pose3; 4] {
        let Vec2 { x, y } = self.foot_offset;
        [
            *pose * Pose3::from_xyz(x, y, 0.0),
            *pose * Pose3::from_xyz(x, -y, 0.0),
            *pose * Pose3::from_xyz(-x, y, 0.0),
            *pose * Pose3::from_xyz(-x, -y, 0.0),
        ]
    }

    /// Whether a single foot box is clear of terrain at `pose`.
    ///
    /// Outside the mapped region (or with no map bound) the answer is the
    /// `unknown_space_untraversable` policy, not an error.
    pub fn box_is_valid_at_pose(&self, pose: &Pose3) -> bool {
        let map = self.map.read().clone();
        let inside = map
            .as_ref()
            .is_some_and(|map| map.is_inside(pose.translation.truncate()));
        if !inside {
            return !self.unknown_space_untraversable;
        }

        let box_pose = BoxPose {
            origin: pose.translation,
            rotation: pose.rotation_matrix(),
        };
        let mut checker = self.checker.lock();
        !checker.check_collision(&[box_pose])
    }

    /// All boxes clear at all poses. Stops at the first invalid pose; the
    /// empty sequence is valid.
    pub fn boxes_are_valid_at_poses(&self, poses: &[Pose3]) -> bool {
        poses.iter().all(|pose| self.box_is_valid_at_pose(pose))
    }

    /// Whether the body pose admits a valid stance for all four feet.
    ///
    /// Binary mode checks each foot's full reach envelope as one box. Graded
    /// mode grid-searches each foot's reach as 3x3 sub-boxes and accepts the
    /// foot as soon as one sub-box is clear.
    pub fn is_valid(&self, pose: &Pose3) -> bool {
        let foot_poses = self.foot_poses(pose);
        if !self.clearance_enabled {
            return self.boxes_are_valid_at_poses(&foot_poses);
        }

        for foot_pose in &foot_poses {
            let mut foot_valid = false;
            let mut long_mult = -1i32;
            'foot: for _ in 0..N_LONG_SPLIT {
                let mut lat_mult = -1i32;
                for _ in 0..N_LAT_SPLIT {
                    let probe = *foot_pose
                        * Pose3::from_xyz(
                            self.box_length * long_mult as f32,
                            self.box_width * lat_mult as f32,
                            0.0,
                        );
                    if self.box_is_valid_at_pose(&probe) {
                        // One clear sub-box is enough for this foot.
                        foot_valid = true;
                        break 'foot;
                    }
                    lat_mult += 1;
                }
                long_mult += 1;
            }
            // Need all four feet valid, so one failed foot fails the pose.
            if !foot_valid {
                return false;
            }
        }
        true
    }

    /// Clearance cost of a body pose: `max_cost` minus the summed weights of
    /// invalid stencil points. Higher means more clearance; `max_cost` when
    /// everything is clear, 0 when all 36 points are invalid.
    ///
    /// All stencil points are always evaluated; the magnitude of the deficit
    /// matters, not just validity.
    pub fn clearance(&self, pose: &Pose3) -> f32 {
        let w = &self.weights;
        let length = self.box_length;
        let width = self.box_width;

        let mut cost = 0.0;
        for foot_pose in self.foot_poses(pose) {
            // Center.
            if !self.box_is_valid_at_pose(&foot_pose) {
                cost += w.center;
            }
            // Longitudinal.
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(length, 0.0, 0.0))) {
                cost += w.lon;
            }
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(-length, 0.0, 0.0))) {
                cost += w.lon;
            }
            // Lateral.
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(0.0, width, 0.0))) {
                cost += w.lat;
            }
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(0.0, -width, 0.0))) {
                cost += w.lat;
            }
            // Diagonal.
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(length, width, 0.0))) {
                cost += w.diag;
            }
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(length, -width, 0.0))) {
                cost += w.diag;
            }
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(-length, width, 0.0))) {
                cost += w.diag;
            }
            if !self.box_is_valid_at_pose(&(foot_pose * Pose3::from_xyz(-length, -width, 0.0))) {
                cost += w.diag;
            }
        }

        w.max_cost - cost
    }

    /// The clearance stencil weights in effect.
    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Total collision queries answered by the owned checker. Diagnostic.
    pub fn num_collision_checks(&self) -> u64 {
        self.checker.lock().num_queries()
    }
}
