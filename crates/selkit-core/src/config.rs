use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SelkitError};
use crate::selection::Cardinality;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelkitConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { columns: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub caption: Option<String>,
    pub cardinality: Cardinality,
    /// Emit `selkit-*` classes; off renders bare markup.
    pub styled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            caption: None,
            cardinality: Cardinality::Multiple,
            styled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub options_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3002,
            options_path: None,
        }
    }
}

impl SelkitConfig {
    /// Load from a JSON file; missing sections take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.check()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    pub fn check(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SelkitError::Config("server.port must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: SelkitConfig = serde_json::from_str(r#"{"layout": {"columns": 2}}"#).unwrap();
        assert_eq!(config.layout.columns, 2);
        assert_eq!(config.server.port, 3002);
        assert!(config.render.styled);
        assert_eq!(config.render.cardinality, Cardinality::Multiple);
    }

    #[test]
    fn test_cardinality_names() {
        let config: SelkitConfig = serde_json::from_str(
            r#"{"render": {"cardinality": "single", "styled": false, "caption": "Pick"}}"#,
        )
        .unwrap();
        assert_eq!(config.render.cardinality, Cardinality::Single);
        assert_eq!(config.render.caption.as_deref(), Some("Pick"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = SelkitConfig::default();
        config.server.port = 0;
        assert!(matches!(config.check(), Err(SelkitError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SelkitConfig::load("/nonexistent/selkit.json").unwrap_err();
        assert!(matches!(err, SelkitError::Io(_)));
    }
}
