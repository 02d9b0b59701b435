//! Native plugin boundary: the exported declaration and the host-side loader.

pub mod abi;
pub mod library;
pub mod safety;

pub use abi::{CapabilityHandle, DECLARATION_SYMBOL, PLUGIN_ABI_VERSION, PluginDeclaration};
pub use library::DynamicLoader;
