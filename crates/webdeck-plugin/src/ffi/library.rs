//! Dynamic plugin loader using `libloading`.

use std::path::Path;
use std::sync::Arc;

use libloading::Library;
use serde_json::Value;
use tracing::{debug, info};

use webdeck_core::error::ActionError;
use webdeck_core::types::action::Payload;

use crate::capability::{Capability, OperationSpec, PluginMetadata};
use crate::error::LoadError;

use super::abi::{
    CapabilityHandle, CreateCapabilityFn, DECLARATION_SYMBOL, PLUGIN_ABI_VERSION, PluginDeclaration,
};
use super::safety::c_str_to_string;

/// Capability living inside a loaded library.
///
/// Field order matters: the capability is dropped before the library that
/// holds its code is unloaded.
struct DynamicCapability {
    /// The plugin's capability instance.
    inner: Box<dyn Capability>,
    /// The library backing `inner`.
    _library: Library,
}

impl Capability for DynamicCapability {
    fn metadata(&self) -> PluginMetadata {
        self.inner.metadata()
    }

    fn operations(&self) -> Vec<OperationSpec> {
        self.inner.operations()
    }

    fn invoke(&self, operation: &str, payload: Option<&Payload>) -> Result<Value, ActionError> {
        self.inner.invoke(operation, payload)
    }
}

/// Loads plugin capabilities from shared libraries (.so / .dll / .dylib).
#[derive(Debug, Default)]
pub struct DynamicLoader;

impl DynamicLoader {
    /// Creates a new dynamic loader.
    pub fn new() -> Self {
        Self
    }

    /// Opens the library at `path` and instantiates its capability.
    ///
    /// Returns `Ok(None)` when the library does not export a plugin
    /// declaration, which is not an error.
    ///
    /// Loading a library runs its initializers, so only trusted plugin
    /// directories should be configured.
    pub fn load(&self, unit: &str, path: &Path) -> Result<Option<Arc<dyn Capability>>, LoadError> {
        let library = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let (abi_version, core_version, create) = {
            let symbol = match unsafe { library.get::<*const PluginDeclaration>(DECLARATION_SYMBOL) } {
                Ok(symbol) => symbol,
                Err(e) => {
                    debug!(unit = %unit, error = %e, "No plugin declaration exported");
                    return Ok(None);
                }
            };
            let declaration = unsafe { &**symbol };
            (
                declaration.abi_version,
                unsafe { c_str_to_string(declaration.core_version) },
                declaration.create,
            )
        };

        if abi_version != PLUGIN_ABI_VERSION {
            return Err(LoadError::AbiMismatch {
                unit: unit.to_string(),
                found: abi_version,
                expected: PLUGIN_ABI_VERSION,
            });
        }

        let host_version = env!("CARGO_PKG_VERSION");
        let core_version = core_version.unwrap_or_default();
        if core_version != host_version {
            return Err(LoadError::VersionMismatch {
                unit: unit.to_string(),
                found: core_version,
                expected: host_version.to_string(),
            });
        }

        let Some(create) = create else {
            return Ok(None);
        };

        let inner = instantiate(unit, create)?;

        info!(unit = %unit, path = %path.display(), "Dynamic plugin loaded");

        Ok(Some(Arc::new(DynamicCapability {
            inner,
            _library: library,
        })))
    }
}

fn instantiate(unit: &str, create: CreateCapabilityFn) -> Result<Box<dyn Capability>, LoadError> {
    let raw = unsafe { create() };
    if raw.is_null() {
        return Err(LoadError::Instantiation {
            unit: unit.to_string(),
        });
    }
    Ok(unsafe { CapabilityHandle::from_raw(raw) })
}
