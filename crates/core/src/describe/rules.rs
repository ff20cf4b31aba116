//! Ordered description rules, one per describable parameter

use crate::{
    params::{ParameterMapping, keys},
    types::{DetectionMode, StandalonePlayer},
};

/// What a rule gets to look at
#[derive(Debug, Clone, Copy)]
pub struct DescriptionContext<'a> {
    pub parameters: &'a ParameterMapping,
    pub detection_mode: DetectionMode,
}

impl<'a> DescriptionContext<'a> {
    pub fn new(parameters: &'a ParameterMapping) -> Self {
        Self {
            parameters,
            detection_mode: DetectionMode::parse(parameters.get(keys::DETECTION_MODE)),
        }
    }
}

/// A single parameter's contribution to a step description
///
/// Rules are independent: whether one produces a line has no effect on any
/// other.
#[derive(Clone, Copy)]
pub struct DescriptionRule {
    pub name: &'static str,
    line: fn(&DescriptionContext<'_>) -> Option<String>,
}

impl DescriptionRule {
    const fn new(name: &'static str, line: fn(&DescriptionContext<'_>) -> Option<String>) -> Self {
        Self { name, line }
    }

    /// The line this rule contributes, if any
    pub fn line(&self, context: &DescriptionContext<'_>) -> Option<String> {
        (self.line)(context)
    }
}

impl std::fmt::Debug for DescriptionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionRule")
            .field("name", &self.name)
            .finish()
    }
}

/// Emission order of description lines
pub const RULES: [DescriptionRule; 9] = [
    DescriptionRule::new("project path", project_path),
    DescriptionRule::new("execute method", execute_method),
    DescriptionRule::new("build target", build_target),
    DescriptionRule::new("build player", build_player),
    DescriptionRule::new("run editor tests", run_editor_tests),
    DescriptionRule::new("activate license", activate_license),
    DescriptionRule::new("cache server", cache_server),
    DescriptionRule::new("unity version", unity_version),
    DescriptionRule::new("unity root", unity_root),
];

fn project_path(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .non_blank(keys::PROJECT_PATH)
        .map(|value| format!("Project path: {}", value))
}

fn execute_method(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .non_blank(keys::EXECUTE_METHOD)
        .map(|value| format!("Execute method: {}", value))
}

fn build_target(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .non_blank(keys::BUILD_TARGET)
        .map(|value| format!("Build target: {}", value))
}

fn build_player(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .get(keys::BUILD_PLAYER)
        .and_then(StandalonePlayer::try_parse)
        .map(|player| format!("Build player: {}", player.description()))
}

fn run_editor_tests(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .flag(keys::RUN_EDITOR_TESTS)
        .then(|| "Run editor tests: ON".to_string())
}

fn activate_license(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .flag(keys::ACTIVATE_LICENSE)
        .then(|| "Activate Unity license: ON".to_string())
}

fn cache_server(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.parameters
        .non_blank(keys::CACHE_SERVER)
        .map(|value| format!("Cache server: {}", value))
}

/// Auto mode only: the version is what locates the installation
fn unity_version(ctx: &DescriptionContext<'_>) -> Option<String> {
    match ctx.detection_mode {
        DetectionMode::Auto => ctx
            .parameters
            .non_blank(keys::UNITY_VERSION)
            .map(|value| format!("Unity version: {}", value)),
        DetectionMode::Manual => None,
    }
}

/// Manual mode: the root is the installation. Auto mode: the root is only
/// shown next to a version, never in its place.
fn unity_root(ctx: &DescriptionContext<'_>) -> Option<String> {
    let root = ctx.parameters.non_blank(keys::UNITY_ROOT)?;
    match ctx.detection_mode {
        DetectionMode::Manual => Some(format!("Unity root: {}", root)),
        DetectionMode::Auto => ctx
            .parameters
            .non_blank(keys::UNITY_VERSION)
            .map(|_| format!("Unity root: {}", root)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> DescriptionRule {
        RULES
            .iter()
            .copied()
            .find(|rule| rule.name == name)
            .unwrap()
    }

    fn line(name: &str, pairs: &[(&str, &str)]) -> Option<String> {
        let parameters: ParameterMapping = pairs.iter().copied().collect();
        rule(name).line(&DescriptionContext::new(&parameters))
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "project path",
                "execute method",
                "build target",
                "build player",
                "run editor tests",
                "activate license",
                "cache server",
                "unity version",
                "unity root",
            ]
        );
    }

    #[test]
    fn test_text_rules_skip_blank_values() {
        assert_eq!(
            line("project path", &[(keys::PROJECT_PATH, "game")]),
            Some("Project path: game".to_string())
        );
        assert_eq!(line("project path", &[(keys::PROJECT_PATH, " ")]), None);
        assert_eq!(line("execute method", &[]), None);
        assert_eq!(
            line("execute method", &[(keys::EXECUTE_METHOD, "Builder.Build")]),
            Some("Execute method: Builder.Build".to_string())
        );
        assert_eq!(
            line("build target", &[(keys::BUILD_TARGET, "WebGL")]),
            Some("Build target: WebGL".to_string())
        );
    }

    #[test]
    fn test_build_player_rule() {
        assert_eq!(
            line("build player", &[(keys::BUILD_PLAYER, "buildLinux64Player")]),
            Some("Build player: Linux 64-bit".to_string())
        );
        assert_eq!(line("build player", &[(keys::BUILD_PLAYER, "PS5")]), None);
        assert_eq!(line("build player", &[(keys::BUILD_PLAYER, "")]), None);
    }

    #[test]
    fn test_flag_rules() {
        assert_eq!(
            line("run editor tests", &[(keys::RUN_EDITOR_TESTS, "true")]),
            Some("Run editor tests: ON".to_string())
        );
        assert_eq!(line("run editor tests", &[(keys::RUN_EDITOR_TESTS, "on")]), None);
        assert_eq!(
            line("activate license", &[(keys::ACTIVATE_LICENSE, "true")]),
            Some("Activate Unity license: ON".to_string())
        );
        assert_eq!(line("activate license", &[(keys::ACTIVATE_LICENSE, "false")]), None);
        assert_eq!(line("activate license", &[]), None);
    }

    #[test]
    fn test_cache_server_ignores_detection_mode() {
        for mode in ["auto", "manual"] {
            assert_eq!(
                line(
                    "cache server",
                    &[
                        (keys::DETECTION_MODE, mode),
                        (keys::CACHE_SERVER, "localhost:8080/cs")
                    ]
                ),
                Some("Cache server: localhost:8080/cs".to_string())
            );
        }
    }

    #[test]
    fn test_unity_version_only_in_auto_mode() {
        assert_eq!(
            line("unity version", &[(keys::UNITY_VERSION, "2020.1.1")]),
            Some("Unity version: 2020.1.1".to_string())
        );
        assert_eq!(
            line(
                "unity version",
                &[(keys::DETECTION_MODE, "manual"), (keys::UNITY_VERSION, "2020.1.1")]
            ),
            None
        );
    }

    #[test]
    fn test_unity_root_depends_on_mode() {
        let root = Some("Unity root: path/to/unity".to_string());
        assert_eq!(
            line(
                "unity root",
                &[(keys::DETECTION_MODE, "manual"), (keys::UNITY_ROOT, "path/to/unity")]
            ),
            root
        );
        assert_eq!(
            line(
                "unity root",
                &[(keys::DETECTION_MODE, "auto"), (keys::UNITY_ROOT, "path/to/unity")]
            ),
            None
        );
        assert_eq!(
            line(
                "unity root",
                &[
                    (keys::DETECTION_MODE, "auto"),
                    (keys::UNITY_VERSION, "2020.1.1"),
                    (keys::UNITY_ROOT, "path/to/unity")
                ]
            ),
            root
        );
    }
}
