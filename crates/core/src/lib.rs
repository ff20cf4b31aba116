//! unity-runner - Agent requirements and step descriptions for Unity builds
//!
//! This crate provides functionality to:
//! - Derive the agent capability requirements a Unity build step needs
//! - Summarize a step's effective configuration for build configuration pages and logs
//! - Answer the host's run type questions (display name, defaults, supported extensions)
//!
//! Both core operations are pure: same parameters in, same output out, no
//! shared state.
pub mod describe;
pub mod error;
pub mod params;
pub mod requirements;
pub mod run_type;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use describe::describe_parameters;
pub use params::ParameterMapping;
pub use requirements::{RequirementResolver, resolve_requirements};
pub use run_type::{RunTypeExtension, RunTypeRegistry, UnityRunType};
