//! Editor session adapter module.
//!
//! Owns the live editor instances, keyed by identity, and translates between
//! user-originated edit events and subscriber-issued content updates.

pub mod buffer;
pub mod engine;
pub mod options;
pub mod registry;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use buffer::BufferEngine;
pub use engine::{EditorEngine, Selection};
pub use options::{EditorOptions, ToolbarSpec, DEFAULT_THEME, DEFAULT_UPLOAD_ENDPOINT};
pub use registry::EditorRegistry;
pub use session::{ApplyMode, ChangeSubscriber, EditorSession};

#[cfg(feature = "wasm")]
pub use wasm::JsEditorBridge;
