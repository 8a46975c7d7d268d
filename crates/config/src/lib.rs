// Configuration loading

pub mod borders;
pub mod error;
pub mod settings;

pub use borders::{BorderEntry, CustomBordersSetting, EntryTarget};
pub use error::ConfigError;
pub use settings::GridSettings;
