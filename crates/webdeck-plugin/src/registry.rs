//! Action registry — maps canonical action identifiers to handlers.
//!
//! The registry is filled once during startup (built-ins first, then
//! plugins) and then frozen behind an `Arc`. It has no interior
//! mutability, so concurrent request tasks read it without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use webdeck_core::naming::normalize;

use crate::handler::ActionHandler;

/// Where a registered action came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "unit", rename_all = "lowercase")]
pub enum ActionOrigin {
    /// Compiled into the server.
    Builtin,
    /// Provided by the named plugin unit.
    Plugin(String),
}

impl std::fmt::Display for ActionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Plugin(unit) => write!(f, "plugin:{unit}"),
        }
    }
}

/// Registry entry.
#[derive(Debug, Clone)]
pub struct RegisteredAction {
    /// Origin of the handler.
    pub origin: ActionOrigin,
    /// The handler.
    pub handler: ActionHandler,
}

/// Mapping from action identifier to handler. First registration wins.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    /// Identifier → entry.
    actions: HashMap<String, RegisteredAction>,
}

impl ActionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under the normalized form of `identifier`.
    ///
    /// Returns `false` without touching the existing entry when the
    /// identifier is already taken; the caller is responsible for logging
    /// the collision.
    pub fn register(
        &mut self,
        identifier: &str,
        origin: ActionOrigin,
        handler: ActionHandler,
    ) -> bool {
        let identifier = normalize(identifier);

        if self.actions.contains_key(&identifier) {
            return false;
        }

        debug!(action = %identifier, origin = %origin, "Action registered");
        self.actions
            .insert(identifier, RegisteredAction { origin, handler });
        true
    }

    /// Looks up a canonical identifier.
    pub fn resolve(&self, identifier: &str) -> Option<&RegisteredAction> {
        self.actions.get(identifier)
    }

    /// Returns whether an identifier is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.actions.contains_key(identifier)
    }

    /// Returns the origin of a registered identifier.
    pub fn origin_of(&self, identifier: &str) -> Option<&ActionOrigin> {
        self.actions.get(identifier).map(|entry| &entry.origin)
    }

    /// Returns all registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
