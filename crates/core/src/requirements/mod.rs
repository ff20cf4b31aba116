//! Agent requirement resolution for Unity build steps

use crate::{
    params::{ParameterMapping, keys},
    types::{DetectionMode, Requirement},
};
use tracing::debug;

/// Derives the agent requirements implied by a build step's parameters
pub struct RequirementResolver<'a> {
    parameters: &'a ParameterMapping,
}

impl<'a> RequirementResolver<'a> {
    pub fn new(parameters: &'a ParameterMapping) -> Self {
        Self { parameters }
    }

    /// A Unity requirement is emitted unless the installation is pinned
    /// manually or the step runs inside a container image
    pub fn resolve(&self) -> Vec<Requirement> {
        let detection_mode = DetectionMode::parse(self.parameters.get(keys::DETECTION_MODE));
        let unity_version = self.parameters.get(keys::UNITY_VERSION);
        let is_virtual = self
            .parameters
            .get(keys::DOCKER_IMAGE)
            .is_some_and(|image| !image.is_empty());

        if detection_mode == DetectionMode::Manual {
            debug!("Detection mode is manual, no Unity requirement");
            return Vec::new();
        }

        if is_virtual {
            debug!("Step runs in a container image, no Unity requirement");
            return Vec::new();
        }

        let requirement = Requirement::unity(unity_version);
        debug!(
            "Unity requirement for version {:?}: {}",
            unity_version, requirement.property_name
        );
        vec![requirement]
    }
}

/// Requirements the agent must satisfy before the step can be scheduled
pub fn resolve_requirements(parameters: &ParameterMapping) -> Vec<Requirement> {
    RequirementResolver::new(parameters).resolve()
}
