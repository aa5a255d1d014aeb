//! In-process editor engine backed by a Delta buffer.

use crate::delta::{markup, Delta, Embed};

use super::engine::{EditorEngine, Selection};

/// An engine that keeps the document in memory and renders markup on demand.
///
/// This is the engine behind the wasm bridge's server-side content holder and
/// the engine used by tests; a DOM-hosted widget plugs in through the same
/// [`EditorEngine`] trait.
#[derive(Debug, Default)]
pub struct BufferEngine {
    contents: Delta,
    selection: Option<Selection>,
    /// Markup set directly via the markup path; cleared by any content edit.
    markup_override: Option<String>,
}

impl BufferEngine {
    /// Creates an empty engine with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with initial contents.
    pub fn with_contents(contents: Delta) -> Self {
        Self {
            contents,
            selection: None,
            markup_override: None,
        }
    }

    /// Sets or clears the selection, clamped to the document length.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection.map(|s| Selection {
            index: s.index.min(self.contents.length()),
            length: s.length,
        });
    }
}

impl EditorEngine for BufferEngine {
    fn contents(&self) -> Delta {
        self.contents.clone()
    }

    fn set_contents(&mut self, contents: Delta) {
        self.contents = contents;
        self.markup_override = None;
        // Keep the cursor inside the new document.
        self.selection = self.selection.map(|s| Selection {
            index: s.index.min(self.contents.length()),
            length: 0,
        });
    }

    fn markup(&self) -> String {
        match &self.markup_override {
            Some(markup) => markup.clone(),
            None => markup::render(&self.contents),
        }
    }

    fn set_markup(&mut self, markup: &str) {
        self.markup_override = Some(markup.to_string());
    }

    fn insert_embed(&mut self, index: usize, embed: Embed) {
        self.contents.insert_embed_at(index, embed);
        self.markup_override = None;
        if let Some(s) = &mut self.selection {
            if s.index >= index {
                s.index += 1;
            }
        }
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }
}
