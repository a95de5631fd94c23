mod consts;
mod logging;
mod store;

pub use logging::init_logger;
pub use store::{FileSettingsStore, JsonFileSettingsStore, Settings, SettingsStore};
