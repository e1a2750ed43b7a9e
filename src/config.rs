//! Run configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! [embedding]
//! dimension = 3
//! delay = 2
//!
//! [render]
//! scale = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::EmbeddingParams;
use crate::error::{Result, TextureError};

/// Default pixel block size per texture cell.
pub const DEFAULT_SCALE: u32 = 4;
/// Largest accepted pixel block size per texture cell.
pub const MAX_SCALE: u32 = 256;

/// Image output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Each texture cell is drawn as a `scale x scale` block.
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub embedding: EmbeddingParams,
    pub render: RenderConfig,
}

impl Config {
    /// Load and validate a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TextureError::io(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            TextureError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject zero-valued parameters.
    pub fn validate(&self) -> Result<()> {
        if self.embedding.dimension == 0 {
            return Err(TextureError::Config(
                "embedding.dimension must be greater than 0".into(),
            ));
        }
        if self.embedding.delay == 0 {
            return Err(TextureError::Config(
                "embedding.delay must be greater than 0".into(),
            ));
        }
        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            return Err(TextureError::Config(format!(
                "render.scale must be between 1 and {MAX_SCALE}, got {}",
                self.render.scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.embedding, EmbeddingParams::new(2, 1));
        assert_eq!(config.render.scale, DEFAULT_SCALE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[embedding]\ndelay = 3\n").unwrap();
        assert_eq!(config.embedding.dimension, 2);
        assert_eq!(config.embedding.delay, 3);
        assert_eq!(config.render.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[embedding]\ndimension = 4\ndelay = 2\n\n[render]\nscale = 1\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.embedding, EmbeddingParams::new(4, 2));
        assert_eq!(config.render.scale, 1);
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[embedding]\ndimension = 0\n").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(TextureError::Config(_))
        ));

        let config = Config {
            render: RenderConfig { scale: 0 },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scale_upper_bound() {
        let mut config = Config::default();
        config.render.scale = MAX_SCALE;
        assert!(config.validate().is_ok());

        config.render.scale = 700_000_000;
        assert!(matches!(config.validate(), Err(TextureError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[embedding\n").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(TextureError::Config(_))
        ));
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = Config {
            embedding: EmbeddingParams::new(5, 3),
            render: RenderConfig { scale: 2 },
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
