use std::path::{Path, PathBuf};

/// Convenience result type used across the crate.
pub type JourneyResult<T> = Result<T, JourneyError>;

/// Top-level error taxonomy for manifest loading, layer compositing and output.
#[derive(thiserror::Error, Debug)]
pub enum JourneyError {
    /// The manifest file is missing or unreadable.
    #[error("manifest read error: '{}': {cause}", .path.display())]
    ManifestRead {
        /// Manifest path that was opened.
        path: PathBuf,
        /// Underlying IO failure.
        cause: String,
    },

    /// The manifest is not valid JSON or lacks a required field.
    #[error("manifest parse error: {0}")]
    ManifestParse(String),

    /// A layer image is missing, unreadable or undecodable.
    #[error("asset not found: '{}': {cause}", .path.display())]
    AssetNotFound {
        /// Resolved layer file path.
        path: PathBuf,
        /// Underlying read or decode failure.
        cause: String,
    },

    /// An attribute field cannot be used as a path segment.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A journey item name cannot be used as an output file name.
    #[error("invalid journey name: {0}")]
    InvalidName(String),

    /// The output directory or an output file could not be written.
    #[error("output write error: '{}': {cause}", .path.display())]
    OutputWrite {
        /// Output path that was written.
        path: PathBuf,
        /// Underlying IO failure.
        cause: String,
    },

    /// The finished canvas could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JourneyError {
    /// Build a [`JourneyError::ManifestRead`] value.
    pub fn manifest_read(path: impl AsRef<Path>, cause: impl std::fmt::Display) -> Self {
        Self::ManifestRead {
            path: path.as_ref().to_path_buf(),
            cause: cause.to_string(),
        }
    }

    /// Build a [`JourneyError::ManifestParse`] value.
    pub fn manifest_parse(msg: impl Into<String>) -> Self {
        Self::ManifestParse(msg.into())
    }

    /// Build a [`JourneyError::AssetNotFound`] value.
    pub fn asset_not_found(path: impl AsRef<Path>, cause: impl std::fmt::Display) -> Self {
        Self::AssetNotFound {
            path: path.as_ref().to_path_buf(),
            cause: cause.to_string(),
        }
    }

    /// Build a [`JourneyError::InvalidAttribute`] value.
    pub fn invalid_attribute(msg: impl Into<String>) -> Self {
        Self::InvalidAttribute(msg.into())
    }

    /// Build a [`JourneyError::InvalidName`] value.
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Build a [`JourneyError::OutputWrite`] value.
    pub fn output_write(path: impl AsRef<Path>, cause: impl std::fmt::Display) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            cause: cause.to_string(),
        }
    }

    /// Build a [`JourneyError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`JourneyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
