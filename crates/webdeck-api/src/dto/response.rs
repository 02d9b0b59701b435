//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Reported by `/discover` and `/status` while the server runs.
pub const ONLINE: &str = "online";

/// `GET /discover` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    /// Always `"online"`.
    pub status: String,
    /// Greeting shown by the client.
    pub message: String,
    /// Server hostname.
    pub hostname: String,
    /// Listening port.
    pub port: u16,
}

/// `GET /status` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"online"`.
    pub status: String,
    /// Server hostname.
    pub hostname: String,
    /// Listening port.
    pub port: u16,
}
