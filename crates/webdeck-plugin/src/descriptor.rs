//! Descriptors of loaded plugin units.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::capability::{Capability, PluginMetadata};

/// A loaded plugin unit and what it contributed to the registry.
///
/// Produced once by the loader and never mutated afterwards.
#[derive(Clone, Serialize)]
pub struct PluginDescriptor {
    /// Unit name (library file stem without the platform prefix).
    pub unit: String,
    /// Metadata reported by the capability.
    pub metadata: PluginMetadata,
    /// Identifiers registered for this unit.
    pub actions: Vec<String>,
    /// Identifiers rejected because another handler already owned them.
    pub rejected: Vec<String>,
    /// When the unit was loaded.
    pub loaded_at: DateTime<Utc>,
    /// The capability instance shared by the unit's handlers.
    #[serde(skip)]
    pub capability: Arc<dyn Capability>,
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("unit", &self.unit)
            .field("metadata", &self.metadata)
            .field("actions", &self.actions)
            .field("rejected", &self.rejected)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
