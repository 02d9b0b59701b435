//! Plugin discovery and registration.
//!
//! Every plugin unit is loaded in isolation: a unit that fails to open,
//! declares the wrong ABI, or panics while describing itself is logged and
//! skipped, and loading continues with the next file.

use std::env::consts::{DLL_EXTENSION, DLL_PREFIX};
use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use webdeck_core::config::PluginConfig;
use webdeck_core::naming::normalize;

use crate::capability::Capability;
use crate::descriptor::PluginDescriptor;
use crate::error::LoadError;
use crate::ffi::DynamicLoader;
use crate::handler::ActionHandler;
use crate::registry::{ActionOrigin, ActionRegistry};

/// Discovers plugin libraries and registers their operations.
#[derive(Debug)]
pub struct PluginLoader {
    /// Plugin configuration.
    config: PluginConfig,
    /// Native library loader.
    dynamic: DynamicLoader,
}

impl PluginLoader {
    /// Creates a loader for the configured plugin directory.
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            dynamic: DynamicLoader::new(),
        }
    }

    /// Returns the configured plugin directory.
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(&self.config.directory)
    }

    /// Lists loadable plugin files in `dir`, sorted by file name.
    ///
    /// Only regular files with the platform's library extension are
    /// returned; names starting with the exclude prefix are skipped.
    /// Subdirectories are not searched. A missing directory yields an
    /// empty list.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        if !dir.exists() {
            info!(path = %dir.display(), "Plugin directory does not exist, no plugins loaded");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|source| LoadError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(DLL_EXTENSION) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !self.config.exclude_prefix.is_empty()
                && file_name.starts_with(&self.config.exclude_prefix)
            {
                debug!(file = %file_name, "Skipping excluded plugin file");
                continue;
            }
            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Loads every plugin in the configured directory into `registry`.
    ///
    /// Failures are logged per unit; the returned descriptors cover the
    /// units that loaded.
    pub fn load_directory(&self, registry: &mut ActionRegistry) -> Vec<PluginDescriptor> {
        if !self.config.auto_load {
            info!("Plugin auto-load disabled");
            return Vec::new();
        }

        let dir = self.directory();
        let files = match self.discover(&dir) {
            Ok(files) => files,
            Err(e) => {
                error!(error = %e, "Plugin discovery failed");
                return Vec::new();
            }
        };

        let mut loaded = Vec::new();
        for path in files {
            let unit = unit_name(&path);
            match self.load_file(&unit, &path, registry) {
                Ok(Some(descriptor)) => loaded.push(descriptor),
                Ok(None) => debug!(unit = %unit, "File is not a WebDeck plugin, skipped"),
                Err(e) => error!(unit = %unit, error = %e, "Failed to load plugin"),
            }
        }

        info!(count = loaded.len(), actions = registry.len(), "Plugin loading complete");
        loaded
    }

    fn load_file(
        &self,
        unit: &str,
        path: &Path,
        registry: &mut ActionRegistry,
    ) -> Result<Option<PluginDescriptor>, LoadError> {
        match self.dynamic.load(unit, path)? {
            Some(capability) => register_capability(unit, capability, registry).map(Some),
            None => Ok(None),
        }
    }
}

/// Derives a unit name from a library path: the file stem without the
/// platform library prefix (`libfoo.so` becomes `foo`).
pub fn unit_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_prefix(DLL_PREFIX) {
        Some(stripped) if !DLL_PREFIX.is_empty() && !stripped.is_empty() => stripped.to_string(),
        _ => stem,
    }
}

/// Registers every exposed operation of `capability` under `unit`.
///
/// Operations whose normalized name is already taken are left out and
/// listed in the descriptor's `rejected` field.
pub fn register_capability(
    unit: &str,
    capability: Arc<dyn Capability>,
    registry: &mut ActionRegistry,
) -> Result<PluginDescriptor, LoadError> {
    let described = catch_unwind(AssertUnwindSafe(|| {
        (capability.metadata(), capability.operations())
    }));
    let (metadata, operations) = described.map_err(|_| LoadError::Enumeration {
        unit: unit.to_string(),
    })?;

    let mut actions = Vec::new();
    let mut rejected = Vec::new();

    for operation in operations.iter().filter(|op| op.is_exposed()) {
        let identifier = normalize(&operation.name);
        let handler = ActionHandler::from_capability(Arc::clone(&capability), operation);
        let origin = ActionOrigin::Plugin(unit.to_string());

        if registry.register(&identifier, origin, handler) {
            actions.push(identifier);
        } else {
            let owner = registry
                .origin_of(&identifier)
                .map(ToString::to_string)
                .unwrap_or_default();
            warn!(
                unit = %unit,
                action = %identifier,
                owner = %owner,
                "Action already registered, keeping existing handler"
            );
            rejected.push(identifier);
        }
    }

    info!(
        unit = %unit,
        name = %metadata.name,
        actions = actions.len(),
        "Plugin registered"
    );

    Ok(PluginDescriptor {
        unit: unit.to_string(),
        metadata,
        actions,
        rejected,
        loaded_at: Utc::now(),
        capability,
    })
}
