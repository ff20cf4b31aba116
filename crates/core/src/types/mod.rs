pub mod detection_mode;
pub mod requirement;
pub mod standalone_player;

pub use detection_mode::DetectionMode;
pub use requirement::{Requirement, RequirementType};
pub use standalone_player::StandalonePlayer;
