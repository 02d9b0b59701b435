//! Integration tests loading the toggle-mute plugin as a native library.

use std::env::consts::{DLL_EXTENSION, DLL_PREFIX};
use std::fs;
use std::path::{Path, PathBuf};

use webdeck_core::config::PluginConfig;
use webdeck_plugin::{ActionOrigin, ActionRegistry, PluginLoader};

/// Finds the `plugin-toggle-mute` shared library built alongside this test.
fn built_plugin() -> PathBuf {
    let exe = std::env::current_exe().unwrap();
    let deps = exe.parent().unwrap();
    let wanted = format!("{DLL_PREFIX}plugin_toggle_mute");

    [deps, deps.parent().unwrap()]
        .into_iter()
        .filter_map(|dir| fs::read_dir(dir).ok())
        .flatten()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .find(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            name.starts_with(&wanted)
                && path.extension().and_then(|ext| ext.to_str()) == Some(DLL_EXTENSION)
        })
        .unwrap_or_else(|| panic!("{wanted}.{DLL_EXTENSION} not found next to {}", exe.display()))
}

fn loader_for(dir: &Path) -> PluginLoader {
    PluginLoader::new(PluginConfig {
        directory: dir.to_string_lossy().into_owned(),
        ..PluginConfig::default()
    })
}

#[test]
fn test_load_toggle_mute_library() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        built_plugin(),
        dir.path()
            .join(format!("{DLL_PREFIX}toggle_mute.{DLL_EXTENSION}")),
    )
    .unwrap();

    let mut registry = ActionRegistry::new();
    let descriptors = loader_for(dir.path()).load_directory(&mut registry);

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].unit, "toggle_mute");
    assert_eq!(descriptors[0].metadata.name, "Toggle Mute");
    assert_eq!(descriptors[0].actions, vec!["mute_foreground_app".to_string()]);
    assert!(descriptors[0].rejected.is_empty());
    assert_eq!(
        registry.origin_of("mute_foreground_app"),
        Some(&ActionOrigin::Plugin("toggle_mute".to_string()))
    );
}

#[test]
fn test_excluded_copy_is_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let library = built_plugin();
    fs::copy(&library, dir.path().join(format!("_disabled.{DLL_EXTENSION}"))).unwrap();
    fs::copy(&library, dir.path().join(format!("enabled.{DLL_EXTENSION}"))).unwrap();

    let mut registry = ActionRegistry::new();
    let descriptors = loader_for(dir.path()).load_directory(&mut registry);

    let units: Vec<_> = descriptors.iter().map(|d| d.unit.as_str()).collect();
    assert_eq!(units, vec!["enabled"]);
    assert_eq!(registry.len(), 1);
}
