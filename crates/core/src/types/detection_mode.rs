use serde::{Deserialize, Serialize};
use std::fmt;

/// How the Unity installation used by a build step is located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Look the installation up on the agent by version
    #[default]
    Auto,
    /// Use the installation root given in the parameters
    Manual,
}

impl DetectionMode {
    pub const AUTO: &'static str = "auto";
    pub const MANUAL: &'static str = "manual";

    /// Parse a raw parameter value, falling back to [`DetectionMode::Auto`]
    /// for anything but an exact `manual`
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(Self::MANUAL) => DetectionMode::Manual,
            _ => DetectionMode::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Auto => Self::AUTO,
            DetectionMode::Manual => Self::MANUAL,
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
