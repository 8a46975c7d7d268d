pub mod harness;
pub mod hooks;
pub mod host;
pub mod menu;
pub mod overlay;
pub mod plugin;
pub mod store;

pub use host::GridHost;
pub use plugin::CustomBorders;
