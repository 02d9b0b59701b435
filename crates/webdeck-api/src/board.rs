//! In-memory copy of the button layout.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use webdeck_core::error::AppError;
use webdeck_core::result::AppResult;
use webdeck_core::traits::ButtonStore;
use webdeck_core::types::button::ButtonDescriptor;

/// Serves the button layout and re-reads it on demand.
#[derive(Debug)]
pub struct ButtonBoard {
    /// Backing store.
    store: Arc<dyn ButtonStore>,
    /// Last layout read.
    buttons: RwLock<Vec<ButtonDescriptor>>,
}

impl ButtonBoard {
    /// Creates a board and performs the initial read.
    ///
    /// A failed initial read leaves the board empty; `/reload` can recover
    /// once the file is fixed.
    pub async fn load(store: Arc<dyn ButtonStore>) -> Self {
        let board = Self {
            store,
            buttons: RwLock::new(Vec::new()),
        };
        if let Err(e) = board.reload().await {
            warn!(error = %e, "Initial button layout read failed, starting with no buttons");
        }
        board
    }

    /// Re-reads the layout from the store. Returns the number of buttons.
    pub async fn reload(&self) -> AppResult<usize> {
        let store = Arc::clone(&self.store);
        let buttons = tokio::task::spawn_blocking(move || store.read_buttons())
            .await
            .map_err(|e| AppError::internal(format!("Button layout read was cancelled: {e}")))??;

        let count = buttons.len();
        *self.buttons.write().await = buttons;
        info!(count, "Button layout loaded");
        Ok(count)
    }

    /// Returns the current layout.
    pub async fn current(&self) -> Vec<ButtonDescriptor> {
        self.buttons.read().await.clone()
    }
}
