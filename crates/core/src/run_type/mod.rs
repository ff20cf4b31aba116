//! Unity run type as seen by the host's run-configuration subsystem
//!
//! The host owns registration, UI pages and requirement matching. This
//! module only answers the questions the host asks about the run type.

use crate::{
    describe::describe_parameters,
    params::{ParameterMapping, keys},
    requirements::resolve_requirements,
    types::{DetectionMode, Requirement},
};
use tracing::debug;

pub const RUNNER_TYPE: &str = "unity";
pub const RUNNER_DISPLAY_NAME: &str = "Unity";
pub const RUNNER_DESCRIPTION: &str = "Provides Unity build support";

/// Run type id registered by the other Unity plugin
pub const COMPETING_RUNNER_TYPE: &str = "unityRunner";

/// Order id of the extension that wraps steps into a container
pub const DOCKER_WRAPPER_ID: &str = "dockerWrapper";

/// Lookup into the host's run type registry
pub trait RunTypeRegistry {
    /// Whether a run type with `id` is already registered
    fn find_run_type(&self, id: &str) -> bool;
}

/// Host extension that may apply to run types
pub trait RunTypeExtension {
    /// Position id, for extensions that take part in step ordering
    fn order_id(&self) -> Option<&str> {
        None
    }

    /// Answer used when the run type has no opinion of its own
    fn supports_by_default(&self) -> bool {
        false
    }
}

/// The Unity build step run type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnityRunType {
    display_name: String,
}

impl UnityRunType {
    /// Settle the display name against what is already registered
    pub fn new(registry: &dyn RunTypeRegistry) -> Self {
        let display_name = if registry.find_run_type(COMPETING_RUNNER_TYPE) {
            debug!(
                "Run type '{}' already registered, disambiguating display name",
                COMPETING_RUNNER_TYPE
            );
            format!("{} (JetBrains plugin)", RUNNER_DISPLAY_NAME)
        } else {
            RUNNER_DISPLAY_NAME.to_string()
        };
        Self { display_name }
    }

    pub fn run_type(&self) -> &'static str {
        RUNNER_TYPE
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &'static str {
        RUNNER_DESCRIPTION
    }

    /// Properties a freshly added step starts with
    pub fn default_properties(&self) -> ParameterMapping {
        ParameterMapping::new().with(keys::DETECTION_MODE, DetectionMode::AUTO)
    }

    pub fn describe_parameters(&self, parameters: &ParameterMapping) -> String {
        describe_parameters(parameters)
    }

    pub fn requirements(&self, parameters: &ParameterMapping) -> Vec<Requirement> {
        resolve_requirements(parameters)
    }

    /// Container wrapping is always supported; other extensions decide
    /// for themselves
    pub fn supports(&self, extension: &dyn RunTypeExtension) -> bool {
        if extension.order_id() == Some(DOCKER_WRAPPER_ID) {
            return true;
        }
        extension.supports_by_default()
    }
}
