//! Recognized parameter names

/// How the Unity installation is located: `auto` or `manual`
pub const DETECTION_MODE: &str = "detectionMode";
/// Unity version to look up on the agent
pub const UNITY_VERSION: &str = "unityVersion";
/// Explicit Unity installation root
pub const UNITY_ROOT: &str = "unityRoot";
/// Container image the step runs in
pub const DOCKER_IMAGE: &str = "plugin.docker.imageId";

pub const PROJECT_PATH: &str = "projectPath";
pub const EXECUTE_METHOD: &str = "executeMethod";
pub const BUILD_TARGET: &str = "buildTarget";
pub const BUILD_PLAYER: &str = "buildPlayer";
pub const RUN_EDITOR_TESTS: &str = "runEditorTests";
pub const ACTIVATE_LICENSE: &str = "activateLicense";
pub const CACHE_SERVER: &str = "cacheServer";

/// Every key the resolver or the describer reads
pub const ALL: [&str; 11] = [
    DETECTION_MODE,
    UNITY_VERSION,
    UNITY_ROOT,
    DOCKER_IMAGE,
    PROJECT_PATH,
    EXECUTE_METHOD,
    BUILD_TARGET,
    BUILD_PLAYER,
    RUN_EDITOR_TESTS,
    ACTIVATE_LICENSE,
    CACHE_SERVER,
];

/// Whether `key` belongs to the recognized vocabulary
pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
