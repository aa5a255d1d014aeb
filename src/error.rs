//! Error types for the editor content bridge.

use thiserror::Error;

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur across the bridge.
///
/// All of these are degrade-style failures: callers at the interop boundary
/// are expected to log them and fall back to a safe default (empty content,
/// default toolbar, skipped embed) rather than tear down the session.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// No live editor session is registered under the given identity.
    #[error("Editor session not found: {0}")]
    SessionNotFound(String),

    /// A container element required for initialization was not found.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// A content payload could not be decoded as a Delta document.
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The upload endpoint rejected the request.
    #[error("Upload failed with status {status}: {message}")]
    UploadRejected { status: u16, message: String },

    /// Transport-level upload failure (connection refused, timeout, ...).
    #[error("Upload transport error: {0}")]
    UploadTransport(String),
}

impl BridgeError {
    /// Creates a SessionNotFound error.
    pub fn session_not_found(identity: impl Into<String>) -> Self {
        Self::SessionNotFound(identity.into())
    }

    /// Creates a ContainerNotFound error.
    pub fn container_not_found(container: impl Into<String>) -> Self {
        Self::ContainerNotFound(container.into())
    }

    /// Creates an UploadRejected error.
    pub fn upload_rejected(status: u16, message: impl Into<String>) -> Self {
        Self::UploadRejected {
            status,
            message: message.into(),
        }
    }

    /// Creates an UploadTransport error.
    pub fn upload_transport(msg: impl Into<String>) -> Self {
        Self::UploadTransport(msg.into())
    }
}

#[cfg(feature = "upload")]
impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        BridgeError::UploadTransport(err.to_string())
    }
}
