//! Share-link codec errors.

use thiserror::Error;

use cardlink_core::error::AppError;

/// Errors produced by the share-link codec.
#[derive(Debug, Error)]
pub enum ShareLinkError {
    /// Serialization or compression failed while building a token.
    #[error("Could not create share link: {0}")]
    EncodingFailure(String),

    /// The token could not be decoded back into a payload.
    ///
    /// Bad base64, a corrupt or truncated compression stream, and
    /// structurally invalid JSON all collapse into this variant. Callers
    /// must treat the link as invalid without applying any part of it.
    #[error("Malformed share link: {0}")]
    MalformedShareLink(String),
}

impl From<ShareLinkError> for AppError {
    fn from(e: ShareLinkError) -> Self {
        match e {
            ShareLinkError::EncodingFailure(msg) => {
                AppError::serialization(format!("Share link encoding failed: {msg}"))
            }
            ShareLinkError::MalformedShareLink(msg) => {
                AppError::validation(format!("Invalid share link: {msg}"))
            }
        }
    }
}
