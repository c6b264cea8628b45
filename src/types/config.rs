//! Configuration for the foot-placement evaluator.

use std::path::Path;

use serde::Deserialize;

use crate::types::error::Result;

/// Top-level configuration tree, loaded from YAML.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FootholdConfig {
    pub robot: RobotConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub objectives: ObjectivesConfig,
}

impl FootholdConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml_str = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&yaml_str)?)
    }
}

/// Robot physical parameters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RobotConfig {
    pub feet: FeetConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeetConfig {
    /// Reachable envelope of one foot around its stance position (meters).
    pub reach: ReachConfig,
    /// Stance offset from body center to each foot (meters, absolute values).
    pub offset: OffsetConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReachConfig {
    #[serde(default = "default_reach_x")]
    pub x: f32,
    #[serde(default = "default_reach_y")]
    pub y: f32,
    #[serde(default = "default_reach_z")]
    pub z: f32,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            x: default_reach_x(),
            y: default_reach_y(),
            z: default_reach_z(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OffsetConfig {
    #[serde(default = "default_offset_x")]
    pub x: f32,
    #[serde(default = "default_offset_y")]
    pub y: f32,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            x: default_offset_x(),
            y: default_offset_y(),
        }
    }
}

/// Planner-facing policy knobs.
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Whether poses outside the mapped region count as untraversable.
    #[serde(default)]
    pub unknown_space_untraversable: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unknown_space_untraversable: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ObjectivesConfig {
    #[serde(default)]
    pub clearance: ClearanceConfig,
}

/// Graded clearance objective. When disabled the evaluator answers binary
/// valid/invalid only.
#[derive(Clone, Debug, Deserialize)]
pub struct ClearanceConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default = "default_cost_center")]
    pub cost_center: f32,
    #[serde(default = "default_cost_lon")]
    pub cost_lon: f32,
    #[serde(default = "default_cost_lat")]
    pub cost_lat: f32,
    #[serde(default = "default_cost_diag")]
    pub cost_diag: f32,
}

impl Default for ClearanceConfig {
    fn default() -> Self {
        Self {
            enable: false,
            cost_center: default_cost_center(),
            cost_lon: default_cost_lon(),
            cost_lat: default_cost_lat(),
            cost_diag: default_cost_diag(),
        }
    }
}

fn default_reach_x() -> f32 {
    0.3
}

fn default_reach_y() -> f32 {
    0.3
}

fn default_reach_z() -> f32 {
    0.6
}

fn default_offset_x() -> f32 {
    0.36
}

fn default_offset_y() -> f32 {
    0.23
}

fn default_cost_center() -> f32 {
    1.0
}

fn default_cost_lon() -> f32 {
    0.5
}

fn default_cost_lat() -> f32 {
    0.5
}

fn default_cost_diag() -> f32 {
    0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = r#"
robot:
  feet:
    reach: {x: 0.6, y: 0.6}
    offset: {x: 0.4, y: 0.25}
"#;
        let config: FootholdConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.robot.feet.reach.x, 0.6);
        assert_eq!(config.robot.feet.reach.z, default_reach_z());
        assert!(!config.planner.unknown_space_untraversable);
        assert!(!config.objectives.clearance.enable);
        assert_eq!(config.objectives.clearance.cost_center, 1.0);
    }

    #[test]
    fn clearance_weights_parse() {
        let yaml = r#"
robot:
  feet:
    reach: {x: 0.6, y: 0.6, z: 1.0}
    offset: {x: 0.4, y: 0.25}
objectives:
  clearance:
    enable: true
    cost_center: 8.0
    cost_lon: 4.0
    cost_lat: 2.0
    cost_diag: 1.0
"#;
        let config: FootholdConfig = serde_yaml::from_str(yaml).unwrap();

        let clearance = &config.objectives.clearance;
        assert!(clearance.enable);
        assert_eq!(clearance.cost_center, 8.0);
        assert_eq!(clearance.cost_diag, 1.0);
    }
}
