//! QuillBridge - content synchronization bridge for embedded rich-text editors.
//!
//! This crate provides the boundary between a browser-hosted rich-text editor
//! and a server-side content holder:
//!
//! - **Delta document model**: rich text as an ordered sequence of insert
//!   operations, round-tripping the editor's own JSON wire shape
//! - **Editor session adapter**: identity-keyed registry of live editor
//!   instances, forwarding edits to a change subscriber and applying
//!   subscriber updates back without re-firing the change loop
//! - **Paste/drop media interceptor**: image payloads are uploaded instead of
//!   inlined, and the returned URLs embedded at the cursor
//! - **Media upload gateway**: client and server halves of the single
//!   multipart upload endpoint
//!
//! # Example
//!
//! ```rust
//! use quillbridge::{ApplyMode, BufferEngine, EditorOptions, EditorRegistry, EditorSession};
//!
//! let mut registry = EditorRegistry::new();
//! let session = EditorSession::new(BufferEngine::new(), EditorOptions::default());
//! registry.initialize("editor-1", session);
//!
//! // A server-originated update: applied silently so the subscriber that
//! // issued it is not notified right back.
//! registry
//!     .set_content_document("editor-1", r#"{"ops":[{"insert":"hello"}]}"#, ApplyMode::Silent)
//!     .unwrap();
//! assert_eq!(registry.content_markup("editor-1").unwrap(), "<p>hello</p>");
//! ```

pub mod delta;
pub mod editor;
pub mod error;
pub mod media;

// Upload gateway server half (only compiled when server feature enabled)
#[cfg(feature = "server")]
pub mod server;

// Re-exports for convenience
pub use delta::{Delta, DeltaOp, Embed, Insert};
pub use editor::{
    ApplyMode, BufferEngine, ChangeSubscriber, EditorEngine, EditorOptions, EditorRegistry,
    EditorSession, Selection, ToolbarSpec,
};
pub use error::{BridgeError, BridgeResult};
pub use media::{
    MediaInterceptor, MediaTypePolicy, MediaTypeRule, MediaUploader, TransferItem, TransferKind,
    UploadNotifier, UploadOutcome,
};

#[cfg(feature = "upload")]
pub use media::HttpUploadClient;

#[cfg(feature = "wasm")]
pub use editor::JsEditorBridge;
