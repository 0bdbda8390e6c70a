//! Configuration system tests
//!
//! Tests for config paths, file round-trips and the effect of clamped
//! values on a running session.

mod common;
use common::*;

use pip_drag::config::{ConfigError, PipConfig};
use pip_drag::config_paths;
use pip_drag::model::{InteractionState, PipModel};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("pip-drag"));
    }
}

#[test]
fn test_config_file_is_yaml_in_config_dir() {
    if let (Some(dir), Some(file)) = (config_paths::config_dir(), config_paths::config_file()) {
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(file.extension().and_then(|e| e.to_str()), Some("yaml"));
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(dir), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&dir));
        assert!(logs.ends_with("logs"));
    }
}

// ========================================================================
// File Round-Trip Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = PipConfig {
        final_scale: 0.35,
        flick_velocity: 1800.0,
        ..PipConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = PipConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PipConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_load_clamps_out_of_range_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "final_scale: 3.0\nfinal_alpha: -1\nbottom_margin: 400\ndrag_sensitivity: -2\n",
    )
    .unwrap();

    let config = PipConfig::load_from(&path).unwrap();
    assert_eq!(config.final_scale, 1.0);
    assert_eq!(config.final_alpha, 0.0);
    assert_eq!(config.bottom_margin, 100.0);
    assert_eq!(config.drag_sensitivity, 0.0);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "{}\n").unwrap();
    assert_eq!(PipConfig::load_from(&path).unwrap(), PipConfig::default());
}

// ========================================================================
// Session Behaviour Tests
// ========================================================================

#[test]
fn test_model_sanitizes_config() {
    let config = PipConfig {
        final_scale: 2.0,
        bottom_margin: -10.0,
        ..test_config()
    };
    let model = PipModel::new(config, phone());
    assert_eq!(model.config().final_scale, 1.0);
    assert_eq!(model.config().bottom_margin, 0.0);
}

#[test]
fn test_zero_sensitivity_keeps_panel_expanded() {
    let mut model = PipModel::new(
        PipConfig {
            drag_sensitivity: 0.0,
            ..test_config()
        },
        phone(),
    );
    session(
        &mut model,
        pip_drag::messages::SessionMsg::Present {
            panels: panels(),
            initial_frame: None,
        },
    );
    drag(&mut model, pip_drag::messages::DragSample::began());
    drag(&mut model, pip_drag::messages::DragSample::changed(0.0, 200.0));

    // The panel never leaves the top margin, so it stays clamped at top
    assert_eq!(model.state(), InteractionState::Top);
    assert_eq!(model.geometry(), Some(&model.expanded_geometry()));
}

#[test]
fn test_lower_flick_threshold_dismisses_slower_throws() {
    let mut model = PipModel::new(
        PipConfig {
            flick_velocity: 500.0,
            ..test_config()
        },
        phone(),
    );
    session(
        &mut model,
        pip_drag::messages::SessionMsg::Present {
            panels: panels(),
            initial_frame: None,
        },
    );
    pan(&mut model, &[(0.0, 700.0)], 0.0, 0.0);
    settle(&mut model);
    assert_eq!(model.state(), InteractionState::Bottom);

    pan(&mut model, &[(10.0, 0.0)], 800.0, 0.0);
    settle(&mut model);
    assert_eq!(model.state(), InteractionState::Undisplayed);
}
