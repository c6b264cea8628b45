//! Goal-pose rejection sampling.
//!
//! A thin layer over the evaluator for the planner's goal-region logic:
//! draw uniform poses over the mapped region and keep the first one the
//! evaluator accepts, up to a sample cap.

use std::f32::consts::PI;
use std::sync::Arc;

use glam::{Quat, Vec3};
use rand::Rng;

use crate::evaluator::FootPlacementEvaluator;
use crate::types::Pose3;

pub struct GoalPoseSampler {
    evaluator: Arc<FootPlacementEvaluator>,
    max_num_samples: u32,
}

impl GoalPoseSampler {
    pub fn new(evaluator: Arc<FootPlacementEvaluator>, max_num_samples: u32) -> Self {
        Self {
            evaluator,
            max_num_samples,
        }
    }

    /// Sample a valid pose near the goal region: uniform x/y over the bound
    /// map, uniform yaw, height taken from `goal`. Falls back to the
    /// unmodified goal pose when the cap is exhausted or no map is bound.
    pub fn sample_goal<R: Rng>(&self, rng: &mut R, goal: &Pose3) -> Pose3 {
        if let Some(info) = self.evaluator.map_info() {
            for _ in 0..self.max_num_samples {
                let x = rng.gen_range(info.origin.x..info.origin.x + info.world_width());
                let y = rng.gen_range(info.origin.y..info.origin.y + info.world_height());
                let yaw = rng.gen_range(-PI..PI);
                let candidate = Pose3::new(
                    Vec3::new(x, y, goal.translation.z),
                    Quat::from_rotation_z(yaw),
                );
                if self.evaluator.is_valid(&candidate) {
                    return candidate;
                }
            }
        }
        log::debug!(
            "goal sampling exhausted after {} samples, keeping goal pose",
            self.max_num_samples
        );
        *goal
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::terrain::TerrainMap;
    use crate::types::{FootholdConfig, MapInfo};

    fn evaluator(untraversable: bool, elevation: f32) -> Arc<FootPlacementEvaluator> {
        let mut config = FootholdConfig::default();
        config.planner.unknown_space_untraversable = untraversable;
        let evaluator = Arc::new(FootPlacementEvaluator::new(&config));
        let map = Arc::new(TerrainMap::from_elevation_fn(
            MapInfo::square(100, 0.05),
            move |_, _| elevation,
        ));
        evaluator.set_map(map);
        evaluator.update_height_field().unwrap();
        evaluator
    }

    #[test]
    fn finds_a_valid_pose_on_flat_terrain() {
        let evaluator = evaluator(true, 0.0);
        let sampler = GoalPoseSampler::new(evaluator.clone(), 100);
        let goal = Pose3::from_xyz(2.5, 2.5, 1.0);

        let mut rng = StdRng::seed_from_u64(7);
        let sampled = sampler.sample_goal(&mut rng, &goal);
        assert!(evaluator.is_valid(&sampled));
    }

    #[test]
    fn falls_back_to_goal_when_nothing_is_valid() {
        // Terrain above every box bottom and unknown space untraversable:
        // no sample can succeed.
        let evaluator = evaluator(true, 10.0);
        let sampler = GoalPoseSampler::new(evaluator, 50);
        let goal = Pose3::from_xyz(2.5, 2.5, 1.0);

        let mut rng = StdRng::seed_from_u64(7);
        let sampled = sampler.sample_goal(&mut rng, &goal);
        assert_eq!(sampled, goal);
    }
}
