//! Convenience macros for plugin development.

/// Exports a capability type from a plugin library.
///
/// The type must implement [`Capability`](crate::Capability) and
/// `Default`. The macro emits the `webdeck_plugin_declaration` static the
/// host looks up, plus a constructor that returns null instead of
/// unwinding across the boundary when `Default::default` panics.
///
/// Use it once per plugin crate, which must be built as a `cdylib`.
///
/// # Example
/// ```rust,ignore
/// use webdeck_plugin::prelude::*;
///
/// #[derive(Default)]
/// struct Hello;
///
/// impl Capability for Hello {
///     fn operations(&self) -> Vec<OperationSpec> {
///         vec![OperationSpec::no_args("SayHello")]
///     }
///
///     fn invoke(&self, _operation: &str, _payload: Option<&Payload>) -> Result<Value, ActionError> {
///         Ok(json!({"status": "success", "message": "Hello!"}))
///     }
/// }
///
/// export_capability!(Hello);
/// ```
#[macro_export]
macro_rules! export_capability {
    ($capability:ty) => {
        #[doc(hidden)]
        unsafe extern "C" fn __webdeck_create_capability() -> *mut ::std::os::raw::c_void {
            match ::std::panic::catch_unwind(<$capability as ::std::default::Default>::default) {
                Ok(capability) => $crate::ffi::CapabilityHandle::new(capability).into_raw(),
                Err(_) => ::std::ptr::null_mut(),
            }
        }

        #[doc(hidden)]
        #[allow(non_upper_case_globals)]
        #[unsafe(no_mangle)]
        pub static webdeck_plugin_declaration: $crate::ffi::PluginDeclaration =
            $crate::ffi::PluginDeclaration::new(__webdeck_create_capability);
    };
}
