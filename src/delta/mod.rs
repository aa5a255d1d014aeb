//! Delta document module.
//!
//! Structural representation of rich text as an ordered sequence of insert
//! operations, plus the markup renderer used for change-notification
//! snapshots.

pub mod markup;
pub mod model;

// Re-exports for convenience
pub use model::{Delta, DeltaOp, Embed, Insert};
