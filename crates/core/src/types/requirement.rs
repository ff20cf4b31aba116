use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::{escape_version, non_blank};

/// Qualifier the host uses to treat a property name as a regular expression
pub const EXISTS_QUALIFIER: &str = "exists=>";

/// Agent property prefix under which Unity installations are reported
pub const UNITY_PROPERTY_PREFIX: &str = "unity\\.path\\.";

/// How the host evaluates a requirement against agent properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    Exists,
    /// Only produced through [`Requirement::equals`]
    Equals,
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementType::Exists => f.write_str("exists"),
            RequirementType::Equals => f.write_str("equals"),
        }
    }
}

/// Capability declaration an agent must satisfy to run a build step
///
/// Only constructed here; matching belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    pub property_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub kind: RequirementType,
}

impl Requirement {
    pub fn exists(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: None,
            kind: RequirementType::Exists,
        }
    }

    /// Not emitted by the resolver; for hosts that build their own
    /// requirements alongside the Unity one
    pub fn equals(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: Some(value.into()),
            kind: RequirementType::Equals,
        }
    }

    /// Requirement on a Unity installation of the given version
    ///
    /// `None` (or a blank version) asks for any installed Unity.
    pub fn unity(version: Option<&str>) -> Self {
        let version = version
            .and_then(non_blank)
            .map(escape_version)
            .unwrap_or_default();
        Self::exists(format!(
            "{}{}{}.*",
            EXISTS_QUALIFIER, UNITY_PROPERTY_PREFIX, version
        ))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.property_name)?;
        if let Some(ref value) = self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_requirement_with_version() {
        let requirement = Requirement::unity(Some("2021.3.16"));
        assert_eq!(requirement.kind, RequirementType::Exists);
        assert_eq!(requirement.value, None);
        assert_eq!(
            requirement.property_name,
            "exists=>unity\\.path\\.2021\\.3\\.16.*"
        );
    }

    #[test]
    fn test_unity_requirement_without_version() {
        assert_eq!(
            Requirement::unity(None).property_name,
            "exists=>unity\\.path\\..*"
        );
        assert_eq!(Requirement::unity(Some("")), Requirement::unity(None));
        assert_eq!(Requirement::unity(Some("  ")), Requirement::unity(None));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Requirement::unity(Some("2020.1")).to_string(),
            "exists exists=>unity\\.path\\.2020\\.1.*"
        );
        assert_eq!(
            Requirement::equals("teamcity.agent.jvm.os.name", "Linux").to_string(),
            "equals teamcity.agent.jvm.os.name Linux"
        );
    }
}
