//! Plugin loading errors.

use std::path::PathBuf;

use thiserror::Error;

use webdeck_core::error::{AppError, ErrorKind};

/// Failure to load a single plugin unit. Never fatal to the server.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The plugin directory could not be read.
    #[error("failed to read plugin directory '{}': {source}", .path.display())]
    Directory {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The shared library could not be opened.
    #[error("failed to open plugin library '{}': {source}", .path.display())]
    Open {
        /// Library path.
        path: PathBuf,
        /// Underlying loader error.
        #[source]
        source: libloading::Error,
    },

    /// The unit was built against an incompatible plugin ABI.
    #[error("plugin '{unit}' uses ABI v{found}, host expects v{expected}")]
    AbiMismatch {
        /// Unit name.
        unit: String,
        /// ABI version declared by the unit.
        found: u32,
        /// ABI version of the host.
        expected: u32,
    },

    /// The unit was built against a different `webdeck-plugin` release.
    #[error("plugin '{unit}' was built against webdeck-plugin {found}, host runs {expected}")]
    VersionMismatch {
        /// Unit name.
        unit: String,
        /// Version declared by the unit.
        found: String,
        /// Version of the host.
        expected: String,
    },

    /// The capability constructor failed or panicked.
    #[error("plugin '{unit}' failed to instantiate its capability")]
    Instantiation {
        /// Unit name.
        unit: String,
    },

    /// The capability panicked while reporting its operations.
    #[error("plugin '{unit}' panicked while listing its operations")]
    Enumeration {
        /// Unit name.
        unit: String,
    },
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::with_source(ErrorKind::Plugin, err.to_string(), err)
    }
}
