/// Convenience result type used across ogimage.
pub type OgResult<T> = Result<T, OgError>;

/// A required font binary could not be read.
///
/// Clonable so a single failed load can be handed to every caller that was waiting on it.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("failed to read font '{path}': {message}")]
pub struct AssetLoadError {
    /// Location of the asset that failed, as reported by the font source.
    pub path: String,
    /// Underlying reason.
    pub message: String,
}

/// Top-level error taxonomy of the image pipeline.
#[derive(thiserror::Error, Debug)]
pub enum OgError {
    /// Font assets are missing or unreadable.
    #[error("asset load error: {0}")]
    AssetLoad(#[from] AssetLoadError),

    /// Invalid request fields or a layout node outside the closed style vocabulary.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The layout/vector stage could not resolve the tree.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OgError {
    /// Build an [`OgError::AssetLoad`] value.
    pub fn asset_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetLoad(AssetLoadError {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Build an [`OgError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an [`OgError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
