//! Loading step parameters from disk and describing them

use std::fs;
use tempfile::TempDir;
use unity_runner_core::{Error, ParameterMapping, describe_parameters, params::keys};

#[test]
fn test_describe_step_loaded_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("step.json");
    let step = serde_json::json!({
        "detectionMode": "auto",
        "unityVersion": "2022.3.10f1",
        "projectPath": "clients/mobile",
        "buildTarget": "Android",
        "runEditorTests": "true",
        "teamcity.step.mode": "default"
    });
    fs::write(&file, serde_json::to_string_pretty(&step).unwrap()).unwrap();

    let parameters = ParameterMapping::from_file(&file).unwrap();
    assert_eq!(parameters.get(keys::BUILD_TARGET), Some("Android"));

    assert_eq!(
        describe_parameters(&parameters),
        "Project path: clients/mobile\n Build target: Android\n Run editor tests: ON\n Unity version: 2022.3.10f1"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ParameterMapping::from_file(&temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_non_string_values_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("step.json");
    fs::write(&file, r#"{"runEditorTests": true}"#).unwrap();

    let result = ParameterMapping::from_file(&file);
    assert!(matches!(result, Err(Error::SerializationError(_))));
}

#[test]
fn test_mapping_serializes_as_flat_object() {
    let parameters = ParameterMapping::new()
        .with(keys::DETECTION_MODE, "manual")
        .with(keys::UNITY_ROOT, "/opt/unity");

    let json = serde_json::to_value(&parameters).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"detectionMode": "manual", "unityRoot": "/opt/unity"})
    );
}
