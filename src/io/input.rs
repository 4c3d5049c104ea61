use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::DocumentFormat;
use crate::config::FieldConfig;

impl FieldConfig {
    /// Parse a field config document in the given format.
    pub fn from_document_str(contents: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => serde_json::from_str::<FieldConfig>(contents)
                .with_context(|| "failed to parse JSON field config"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => serde_yaml::from_str::<FieldConfig>(contents)
                .with_context(|| "failed to parse YAML field config"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => toml::from_str::<FieldConfig>(contents)
                .with_context(|| "failed to parse TOML field config"),
        }
    }
}

/// Read a field config from disk, picking the format from the extension.
pub fn load_field_config(path: impl AsRef<Path>) -> Result<FieldConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read field config {}", path.display()))?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), %format, "loading field config");
    FieldConfig::from_document_str(&contents, format)
        .with_context(|| format!("invalid field config {}", path.display()))
}
