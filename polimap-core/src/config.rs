use std::path::Path;

use serde::{Deserialize, Serialize};

use polimap_graphs::layout::LayoutParams;

use crate::error::ConfigError;

/// Top-level Polimap configuration, matching `polimap.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolimapConfig {
    #[serde(default)]
    pub fetch: FetchSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSection {
    /// Analysis service endpoint. Empty means no remote configured;
    /// callers fall back to the mock fixture.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Viewport width below which tiers stack into rows.
    pub breakpoint: f64,
    pub padding_side_by_side: f64,
    pub padding_stacked: f64,
}

impl Default for LayoutSection {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            breakpoint: params.breakpoint,
            padding_side_by_side: params.padding_side_by_side,
            padding_stacked: params.padding_stacked,
        }
    }
}

impl LayoutSection {
    pub fn params(&self) -> LayoutParams {
        LayoutParams {
            breakpoint: self.breakpoint,
            padding_side_by_side: self.padding_side_by_side,
            padding_stacked: self.padding_stacked,
        }
    }
}

impl PolimapConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::NotFound(path.display().to_string()))?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from an optional path: `None` yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_layout_params() {
        let config = PolimapConfig::default();
        assert!((config.layout.breakpoint - 768.0).abs() < f64::EPSILON);
        assert!((config.layout.params().padding_stacked - 40.0).abs() < f64::EPSILON);
        assert!(config.fetch.endpoint.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: PolimapConfig = toml::from_str(
            r#"
            [fetch]
            endpoint = "https://api.example.com/generate"
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.fetch.endpoint, "https://api.example.com/generate");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!((config.layout.breakpoint - 768.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = PolimapConfig::load(Path::new("/nonexistent/polimap.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fetch").unwrap();
        let err = PolimapConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = PolimapConfig::load_or_default(None).unwrap();
        assert!(config.fetch.endpoint.is_empty());
    }
}
