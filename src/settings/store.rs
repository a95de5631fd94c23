use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string_pretty};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;
use vcard_qr::{EcLevel, TargetPixelSize};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_DARK_COLOR, DEFAULT_LIGHT_COLOR,
    SETTINGS_FILE,
};

/// Render defaults applied when a command does not override them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_color: String,
    pub light_color: String,
    pub transparent_background: bool,
    pub target_pixel_size: TargetPixelSize,
    pub error_correction: EcLevel,
    /// Where `render` writes when no output path is given. Current directory when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_color: DEFAULT_DARK_COLOR.to_owned(),
            light_color: DEFAULT_LIGHT_COLOR.to_owned(),
            transparent_background: false,
            target_pixel_size: TargetPixelSize::default(),
            error_correction: EcLevel::default(),
            output_dir: None,
        }
    }
}

pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create settings directory: {}", parent.display())
        })?;
    }
    fs::write(path, to_string_pretty(settings)?)
        .with_context(|| format!("Failed to persist settings file: {}", path.display()))
}

fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    from_str(content).with_context(|| {
        format!(
            "Failed to deserialize settings: {}\nPlease make sure the settings file is valid.",
            path.display()
        )
    })
}

pub struct FileSettingsStore {
    directory: PathBuf, // platform config directory (from ProjectDirs)
    file: &'static str, // "settings.json"
}

impl FileSettingsStore {
    /// Build from ProjectDirs config directory:
    ///   - Windows:   %APPDATA%\<org>\<app>\config\settings.json
    ///   - macOS:     ~/Library/Application Support/<qualifier>.<org>.<app>/settings.json
    ///   - Linux:     ~/.config/<app>/settings.json
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;

        Ok(Self {
            directory: project_dirs.config_dir().to_path_buf(),
            file: SETTINGS_FILE,
        })
    }

    fn path(&self) -> PathBuf {
        self.directory.join(self.file)
    }
}

impl SettingsStore for FileSettingsStore {
    /// Creates the file with defaults on first use.
    fn load(&self) -> Result<Settings> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %path.display(), "No settings file, writing defaults");
                let defaults = Settings::default();
                self.save(&defaults)?;
                return Ok(defaults);
            }
        };
        parse_settings(&content, &path)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        write_settings(&self.path(), settings)
    }
}

/// Settings at an explicit path, as given with `--settings`.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    /// A missing file yields defaults without creating it.
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Settings file not found, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        parse_settings(&content, &self.path)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        write_settings(&self.path, settings)
    }
}
