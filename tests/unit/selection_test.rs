//! Unit tests for startup model selection

use model_bundle_gateway::config::Settings;
use model_bundle_gateway::model::{discover_first_model, ModelSelection, SelectionSource};
use model_bundle_gateway::AppState;
use std::fs;

#[test]
fn test_single_subdirectory_is_discovered() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("SxQL3iGyoDo")).unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

    assert_eq!(discover_first_model(tmp.path()), Some("SxQL3iGyoDo".to_string()));

    let selection = ModelSelection::resolve(tmp.path(), None);
    assert_eq!(selection.id(), "SxQL3iGyoDo");
    assert_eq!(selection.source(), SelectionSource::Discovered);
    assert_eq!(selection.dir(), Some(tmp.path().join("SxQL3iGyoDo").as_path()));
}

#[test]
fn test_discovery_picks_one_of_several_directories() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["alpha", "beta", "gamma"] {
        fs::create_dir(tmp.path().join(name)).unwrap();
    }

    let id = discover_first_model(tmp.path()).unwrap();
    assert!(["alpha", "beta", "gamma"].contains(&id.as_str()));
}

#[test]
fn test_empty_downloads_dir() {
    let tmp = tempfile::tempdir().unwrap();

    let selection = ModelSelection::resolve(tmp.path(), None);
    assert_eq!(selection.id(), "");
    assert!(!selection.is_configured());
}

#[test]
fn test_downloads_path_is_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("downloads");
    fs::write(&file, "not a directory").unwrap();

    assert_eq!(discover_first_model(&file), None);
}

#[test]
fn test_override_wins_over_discovery() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("discovered")).unwrap();

    let selection = ModelSelection::resolve(tmp.path(), Some("configured"));
    assert_eq!(selection.id(), "configured");
    assert_eq!(selection.source(), SelectionSource::Override);
}

#[test]
fn test_app_state_from_settings() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("downloads").join("model-x")).unwrap();

    let mut settings = Settings::default();
    settings.bundle.root_dir = tmp.path().to_string_lossy().into_owned();

    let state = AppState::from_settings(settings);
    assert_eq!(state.selection.id(), "model-x");
    assert_eq!(state.proxy_script, tmp.path().join("JSNetProxy.js"));
}
