//! The seam to the live editor widget.

use crate::delta::{Delta, Embed};

/// A cursor selection inside the editor, in editor index units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start index.
    pub index: usize,
    /// Selected length (0 for a plain cursor).
    pub length: usize,
}

impl Selection {
    /// Creates a cursor at the given index.
    pub fn cursor(index: usize) -> Self {
        Self { index, length: 0 }
    }
}

/// One live editor instance bound to a container.
///
/// The widget itself is an external collaborator; this trait is the surface
/// the session adapter drives it through. Implementations are expected to be
/// used from a single UI thread. Constructors for DOM-hosted engines report
/// [`crate::BridgeError::ContainerNotFound`] when the container elements are
/// missing from the rendered page, in which case no session is registered.
pub trait EditorEngine {
    /// Current contents as a Delta document.
    fn contents(&self) -> Delta;

    /// Replaces the contents. Does not notify anyone; notification discipline
    /// lives in the session, not the engine.
    fn set_contents(&mut self, contents: Delta);

    /// Current rendered markup.
    fn markup(&self) -> String;

    /// Replaces the rendered markup directly (the `innerHTML` path).
    fn set_markup(&mut self, markup: &str);

    /// Inserts an embed at the given index. A selection at or after the index
    /// shifts right by one, the way a live editor transforms the cursor over
    /// an applied change.
    fn insert_embed(&mut self, index: usize, embed: Embed);

    /// Current selection, if the editor has one.
    fn selection(&self) -> Option<Selection>;
}
