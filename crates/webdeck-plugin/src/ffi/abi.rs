//! ABI definitions for dynamic plugins.
//!
//! A plugin library exports one static, `webdeck_plugin_declaration`,
//! normally generated by [`export_capability!`](crate::export_capability).
//! The host reads the version fields before calling `create`, so a unit
//! built against another release is rejected instead of crashing.
//!
//! The capability crosses the boundary as a Rust trait object, which means
//! plugins must be compiled with the same toolchain as the server.

use std::os::raw::{c_char, c_void};

use crate::capability::Capability;

/// Version of the declaration layout below.
pub const PLUGIN_ABI_VERSION: u32 = 1;

/// Symbol name of the exported declaration (NUL-terminated).
pub const DECLARATION_SYMBOL: &[u8] = b"webdeck_plugin_declaration\0";

/// `webdeck-plugin` version the unit was compiled against (NUL-terminated).
pub const CORE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Owning wrapper that keeps the capability pointer thin across the boundary.
pub struct CapabilityHandle(pub Box<dyn Capability>);

impl CapabilityHandle {
    /// Boxes a capability.
    pub fn new<C: Capability>(capability: C) -> Self {
        Self(Box::new(capability))
    }

    /// Leaks the handle into an opaque pointer for [`CreateCapabilityFn`].
    pub fn into_raw(self) -> *mut c_void {
        Box::into_raw(Box::new(self)).cast::<c_void>()
    }

    /// Reclaims a pointer produced by [`CapabilityHandle::into_raw`].
    ///
    /// # Safety
    /// `ptr` must come from `into_raw` of the same `webdeck-plugin` build and
    /// must not be reclaimed twice.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Box<dyn Capability> {
        let handle = unsafe { Box::from_raw(ptr.cast::<CapabilityHandle>()) };
        handle.0
    }
}

/// Capability constructor exported by a plugin.
///
/// Returns an opaque pointer produced by `Box::into_raw` on a
/// `Box<CapabilityHandle>`, or null when the constructor failed. The host
/// takes ownership of the box.
pub type CreateCapabilityFn = unsafe extern "C" fn() -> *mut c_void;

/// Declaration exported by every plugin library.
#[repr(C)]
pub struct PluginDeclaration {
    /// Must equal [`PLUGIN_ABI_VERSION`].
    pub abi_version: u32,
    /// `webdeck-plugin` version the unit was compiled against.
    pub core_version: *const c_char,
    /// Capability constructor; `None` when the unit exposes no capability.
    pub create: Option<CreateCapabilityFn>,
}

// The only pointer points into a `'static` string literal.
unsafe impl Sync for PluginDeclaration {}

impl PluginDeclaration {
    /// Builds the declaration for a constructor.
    pub const fn new(create: CreateCapabilityFn) -> Self {
        Self {
            abi_version: PLUGIN_ABI_VERSION,
            core_version: CORE_VERSION.as_ptr().cast::<c_char>(),
            create: Some(create),
        }
    }
}
