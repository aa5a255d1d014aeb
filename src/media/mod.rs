//! Media upload module.
//!
//! Paste/drop image interception, the media type policy it applies, and the
//! upload gateway client half.

pub mod interceptor;
pub mod policy;

#[cfg(feature = "upload")]
pub mod client;

// Re-exports for convenience
pub use interceptor::{LogNotifier, MediaInterceptor, MediaUploader, UploadNotifier, UploadOutcome};
pub use policy::{MediaTypePolicy, MediaTypeRule, TransferItem, TransferKind, PASTE_IMAGE_FORMATS};

#[cfg(feature = "upload")]
pub use client::{HttpUploadClient, UPLOAD_FIELD_NAME};
