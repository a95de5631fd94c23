pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "vcard-qr";
pub const APP_NAME: &str = "vcard-qr";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "vcard-qr.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DARK_COLOR: &str = "#000000";
pub const DEFAULT_LIGHT_COLOR: &str = "#FFFFFF";
