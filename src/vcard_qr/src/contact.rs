use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Free-form contact fields. Nothing here is validated: an email without an
/// `@` or a phone number with letters is encoded exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    pub last_name: String,
    pub first_name: String,
    pub full_name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl ContactRecord {
    /// Trims surrounding whitespace from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            last_name: self.last_name.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            full_name: self.full_name.trim().to_owned(),
            role: self.role.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            website: self.website.trim().to_owned(),
        }
    }

    /// Load a record from a JSON file with camelCase keys. Missing keys are empty.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contact file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to deserialize contact file: {}", path.display()))
    }
}
