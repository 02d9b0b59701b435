//! Host identity.

/// Returns the machine's hostname, falling back to the device name.
pub fn hostname() -> String {
    match whoami::fallible::hostname() {
        Ok(name) if !name.is_empty() => name,
        _ => whoami::devicename(),
    }
}
