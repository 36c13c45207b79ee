use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    fonts::DirFontSource,
    foundation::error::{OgError, OgResult},
};

/// Where the two font weights live on disk.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory holding the font files.
    pub dir: PathBuf,
    /// Family prefix of the file names.
    pub family: String,
    /// File extension. Only `ttf`/`otf` faces can be parsed.
    pub format: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/fonts"),
            family: "Inter".to_string(),
            format: "ttf".to_string(),
        }
    }
}

impl FontConfig {
    /// Font source following `<dir>/<family>-<Weight>.<format>`.
    pub fn source(&self) -> DirFontSource {
        DirFontSource::new(&self.dir, &self.family, &self.format)
    }
}

/// Site identity shown in the header of every image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Two-letter mark inside the colored square.
    pub mark: String,
    /// Label next to the square.
    pub label: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            mark: "AB".to_string(),
            label: "adrien.brage.fr".to_string(),
        }
    }
}

/// Generator settings, loadable from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Font location.
    pub fonts: FontConfig,
    /// Header identity.
    pub brand: Brand,
}

impl GeneratorConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> OgResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: GeneratorConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> OgResult<()> {
        if self.fonts.family.trim().is_empty() {
            return Err(OgError::configuration("fonts.family must be non-empty"));
        }
        if self.fonts.format.trim().is_empty() {
            return Err(OgError::configuration("fonts.format must be non-empty"));
        }
        if self.brand.label.trim().is_empty() {
            return Err(OgError::configuration("brand.label must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
