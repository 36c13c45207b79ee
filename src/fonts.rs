//! Font assets: where the two weights come from and the load-once cache that holds them.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use sha2::Digest as _;

use crate::foundation::error::{AssetLoadError, OgError, OgResult};

/// One of the two weights the pipeline renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Weight 400.
    Regular,
    /// Weight 700.
    Bold,
}

impl FontWeight {
    /// Both weights, in load order.
    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

    /// Numeric CSS weight.
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    /// Map a numeric weight back to a variant; only 400 and 700 exist.
    pub fn from_numeric(w: u16) -> Option<Self> {
        match w {
            400 => Some(FontWeight::Regular),
            700 => Some(FontWeight::Bold),
            _ => None,
        }
    }

    /// Filename suffix used by the `<family>-<Suffix>.<fmt>` convention.
    pub fn file_suffix(self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Bold => "Bold",
        }
    }
}

/// Read-only provider of font bytes.
pub trait FontSource: Send + Sync {
    /// Read the bytes for one weight.
    fn read(&self, weight: FontWeight) -> Result<Vec<u8>, AssetLoadError>;

    /// Where `weight` comes from, for error messages.
    fn location(&self, weight: FontWeight) -> String {
        format!("<memory:{}>", weight.file_suffix())
    }
}

/// Fonts stored on disk as `<dir>/<family>-Regular.<format>` and `<dir>/<family>-Bold.<format>`.
#[derive(Clone, Debug)]
pub struct DirFontSource {
    dir: PathBuf,
    family: String,
    format: String,
}

impl DirFontSource {
    /// Create a source rooted at `dir`.
    pub fn new(
        dir: impl Into<PathBuf>,
        family: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            family: family.into(),
            format: format.into(),
        }
    }

    /// Path the given weight is read from.
    pub fn path_for(&self, weight: FontWeight) -> PathBuf {
        self.dir
            .join(format!("{}-{}.{}", self.family, weight.file_suffix(), self.format))
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FontSource for DirFontSource {
    fn read(&self, weight: FontWeight) -> Result<Vec<u8>, AssetLoadError> {
        let path = self.path_for(weight);
        std::fs::read(&path).map_err(|e| AssetLoadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn location(&self, weight: FontWeight) -> String {
        self.path_for(weight).display().to_string()
    }
}

/// Fonts already in memory, e.g. embedded with `include_bytes!`.
#[derive(Clone, Debug)]
pub struct MemoryFontSource {
    regular: Arc<[u8]>,
    bold: Arc<[u8]>,
}

impl MemoryFontSource {
    /// Wrap the two weights.
    pub fn new(regular: impl Into<Arc<[u8]>>, bold: impl Into<Arc<[u8]>>) -> Self {
        Self {
            regular: regular.into(),
            bold: bold.into(),
        }
    }
}

impl FontSource for MemoryFontSource {
    fn read(&self, weight: FontWeight) -> Result<Vec<u8>, AssetLoadError> {
        let bytes = match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        };
        if bytes.is_empty() {
            return Err(AssetLoadError {
                path: self.location(weight),
                message: "font data is empty".to_string(),
            });
        }
        Ok(bytes.to_vec())
    }
}

/// Regular and bold font binaries of a single family.
pub struct FontSet {
    regular: Vec<u8>,
    bold: Vec<u8>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("regular_len", &self.regular.len())
            .field("bold_len", &self.bold.len())
            .finish()
    }
}

impl FontSet {
    /// Build a set directly from bytes.
    pub fn new(regular: Vec<u8>, bold: Vec<u8>) -> Self {
        Self { regular, bold }
    }

    /// Bytes of one weight.
    pub fn bytes(&self, weight: FontWeight) -> &[u8] {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// SHA-256 of one weight, lowercase hex.
    pub fn sha256_hex(&self, weight: FontWeight) -> String {
        let digest = sha2::Sha256::digest(self.bytes(weight));
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}

/// Load-once holder of the [`FontSet`].
///
/// The first [`FontCache::ensure_loaded`] call reads both weights; callers racing with it block
/// until it finishes and see the same outcome. A failed load is kept as well: the assets are
/// fixed at build time, so reading them again would fail the same way.
pub struct FontCache {
    source: Box<dyn FontSource>,
    slot: OnceLock<Result<Arc<FontSet>, AssetLoadError>>,
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl FontCache {
    /// Create an empty cache over `source`. Nothing is read until first use.
    pub fn new(source: impl FontSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slot: OnceLock::new(),
        }
    }

    /// Return the font set, loading it on first call.
    pub fn ensure_loaded(&self) -> OgResult<Arc<FontSet>> {
        self.slot
            .get_or_init(|| self.load())
            .clone()
            .map_err(OgError::from)
    }

    /// `true` only once a complete font set is available.
    pub fn is_loaded(&self) -> bool {
        matches!(self.slot.get(), Some(Ok(_)))
    }

    fn load(&self) -> Result<Arc<FontSet>, AssetLoadError> {
        tracing::debug!("loading font set");
        let result = self
            .read_checked(FontWeight::Regular)
            .and_then(|regular| Ok((regular, self.read_checked(FontWeight::Bold)?)));
        match result {
            Ok((regular, bold)) => {
                tracing::debug!(
                    regular_bytes = regular.len(),
                    bold_bytes = bold.len(),
                    "font set loaded"
                );
                Ok(Arc::new(FontSet::new(regular, bold)))
            }
            Err(e) => {
                tracing::warn!(path = %e.path, error = %e.message, "font set load failed");
                Err(e)
            }
        }
    }

    /// Read one weight and reject data that holds no parseable face.
    fn read_checked(&self, weight: FontWeight) -> Result<Vec<u8>, AssetLoadError> {
        let bytes = self.source.read(weight)?;
        let mut db = usvg::fontdb::Database::new();
        db.load_font_data(bytes.clone());
        if db.faces().next().is_none() {
            return Err(AssetLoadError {
                path: self.source.location(weight),
                message: "not a TrueType/OpenType font".to_string(),
            });
        }
        Ok(bytes)
    }
}

#[cfg(test)]
#[path = "../tests/unit/fonts.rs"]
mod tests;
