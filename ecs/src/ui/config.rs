//! Editor settings loaded from TOML.
//!
//! ```toml
//! window_name = "Scene"
//! filter_panel_width = 240.0
//! show_entity_ids = false
//!
//! [[type_rule]]
//! pattern = "glam::f32::vec3::Vec3"
//! replacement = "Vec3"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use redlilium_inspect::TypeNameError;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    TypeRule(#[from] TypeNameError),
}

/// A type-name rewrite rule applied on top of the built-in ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRule {
    /// Regular expression matched against normalized type names.
    pub pattern: String,
    pub replacement: String,
}

/// Settings of a [`RegistryEditor`](super::RegistryEditor).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Title of the window opened by
    /// [`show_window`](super::RegistryEditor::show_window).
    pub window_name: String,
    /// Width of the component filter panel, in points.
    pub filter_panel_width: f32,
    /// Show each entity's index as a read-only `id` row.
    pub show_entity_ids: bool,
    #[serde(rename = "type_rule")]
    pub type_rules: Vec<TypeRule>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_name: "Registry Editor".into(),
            filter_panel_width: 200.0,
            show_entity_ids: true,
            type_rules: Vec::new(),
        }
    }
}

impl EditorConfig {
    /// Loads a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded editor config \"{}\" from {}",
            config.window_name,
            path.display()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        if !(config.filter_panel_width.is_finite() && config.filter_panel_width > 0.0) {
            log::warn!(
                "filter_panel_width {} is not a positive number, using the default",
                config.filter_panel_width
            );
            return Ok(Self {
                filter_panel_width: Self::default().filter_panel_width,
                ..config
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = EditorConfig::from_toml_str(
            r#"
            window_name = "Scene"
            filter_panel_width = 240.0
            show_entity_ids = false

            [[type_rule]]
            pattern = "Vec3"
            replacement = "V3"
            "#,
        )
        .unwrap();

        assert_eq!(config.window_name, "Scene");
        assert_eq!(config.filter_panel_width, 240.0);
        assert!(!config.show_entity_ids);
        assert_eq!(
            config.type_rules,
            vec![TypeRule {
                pattern: "Vec3".into(),
                replacement: "V3".into(),
            }]
        );
    }

    #[test]
    fn non_positive_width_falls_back() {
        let config = EditorConfig::from_toml_str("filter_panel_width = 0.0").unwrap();
        assert_eq!(config.filter_panel_width, 200.0);
    }

    #[test]
    fn nan_width_falls_back() {
        let config = EditorConfig::from_toml_str("filter_panel_width = nan").unwrap();
        assert_eq!(config.filter_panel_width, 200.0);

        let config = EditorConfig::from_toml_str("filter_panel_width = inf").unwrap();
        assert_eq!(config.filter_panel_width, 200.0);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = EditorConfig::from_toml_str("window_name = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = EditorConfig::load(Path::new("/nonexistent/editor.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
