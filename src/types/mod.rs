pub mod config;
pub mod error;
pub mod info;
pub mod pose;

pub use config::{ClearanceConfig, FootholdConfig, PlannerConfig, RobotConfig};
pub use error::{FootholdError, Result};
pub use info::MapInfo;
pub use pose::Pose3;
