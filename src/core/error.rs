//! Error kinds surfaced by dialogue operations.
use thiserror::Error;

/// The two failure modes a dialogue operation can surface. Both wrap
/// the underlying cause unchanged; there is no local recovery or
/// retry at this layer.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Any failure from the model collaborator: network, provider
    /// error status, or a malformed response body.
    #[error("model call failed: {0}")]
    ModelCall(anyhow::Error),

    /// The uploaded document could not be parsed (corrupt, wrong
    /// format, password-protected).
    #[error("document extraction failed: {0}")]
    DocumentExtraction(anyhow::Error),
}
