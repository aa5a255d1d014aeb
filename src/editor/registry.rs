//! Registry of live editor sessions, keyed by identity.
//!
//! A process/session-scoped mapping owned by the adapter. It is meant to be
//! driven from a single UI thread; concurrent initialize/dispose calls for
//! the same identity are last-writer-wins and must be serialized by the
//! caller.

use std::collections::HashMap;

use tracing::{error, warn};

use crate::delta::Delta;
use crate::error::{BridgeError, BridgeResult};

use super::engine::EditorEngine;
use super::session::{ApplyMode, EditorSession};

/// Identity → live session mapping with the interop operation surface.
///
/// Lookup failures are typed errors here; the interop boundary degrades them
/// to safe defaults (see the `*_or_default` helpers and the wasm bridge).
#[derive(Default)]
pub struct EditorRegistry<E> {
    sessions: HashMap<String, EditorSession<E>>,
}

impl<E: EditorEngine> EditorRegistry<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Registers a session under an identity.
    ///
    /// Re-initializing an identity without disposing overwrites the previous
    /// registration (the identity re-enters Active with a fresh instance).
    pub fn initialize(&mut self, identity: impl Into<String>, session: EditorSession<E>) {
        let identity = identity.into();
        if self.sessions.insert(identity.clone(), session).is_some() {
            warn!(%identity, "editor re-initialized without dispose, overwriting instance");
        }
    }

    /// Returns true if a session is registered under the identity.
    pub fn is_registered(&self, identity: &str) -> bool {
        self.sessions.contains_key(identity)
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Looks up a session.
    pub fn session(&self, identity: &str) -> BridgeResult<&EditorSession<E>> {
        self.sessions
            .get(identity)
            .ok_or_else(|| BridgeError::session_not_found(identity))
    }

    /// Looks up a session mutably.
    pub fn session_mut(&mut self, identity: &str) -> BridgeResult<&mut EditorSession<E>> {
        self.sessions
            .get_mut(identity)
            .ok_or_else(|| BridgeError::session_not_found(identity))
    }

    /// Live rendered markup for an identity.
    pub fn content_markup(&self, identity: &str) -> BridgeResult<String> {
        Ok(self.session(identity)?.markup())
    }

    /// Live document for an identity.
    pub fn content_document(&self, identity: &str) -> BridgeResult<Delta> {
        Ok(self.session(identity)?.contents())
    }

    /// Live document for an identity, as its textual encoding.
    pub fn content_document_json(&self, identity: &str) -> BridgeResult<String> {
        self.session(identity)?.contents().to_json()
    }

    /// Replaces the live markup for an identity. Does not notify.
    pub fn set_content_markup(&mut self, identity: &str, markup: &str) -> BridgeResult<()> {
        self.session_mut(identity)?.set_markup(markup);
        Ok(())
    }

    /// Replaces the live document for an identity from its textual encoding.
    ///
    /// A payload that does not decode as a document is an error and leaves
    /// the editor content unchanged.
    pub fn set_content_document(
        &mut self,
        identity: &str,
        document_json: &str,
        mode: ApplyMode,
    ) -> BridgeResult<()> {
        let session = self.session_mut(identity)?;
        let contents = Delta::from_json(document_json)?;
        session.set_contents(contents, mode);
        Ok(())
    }

    /// Removes the registration for an identity.
    ///
    /// Disposing an unknown identity is an error with no other effect; after
    /// dispose, every other operation on the identity behaves as
    /// not-registered.
    pub fn dispose(&mut self, identity: &str) -> BridgeResult<()> {
        match self.sessions.remove(identity) {
            Some(_) => Ok(()),
            None => Err(BridgeError::session_not_found(identity)),
        }
    }

    /// Boundary helper: markup, or empty string with a logged error when the
    /// identity is not registered.
    pub fn content_markup_or_default(&self, identity: &str) -> String {
        self.content_markup(identity).unwrap_or_else(|err| {
            error!(%identity, %err, "markup lookup failed, returning empty content");
            String::new()
        })
    }

    /// Boundary helper: document, or the empty document with a logged error.
    pub fn content_document_or_default(&self, identity: &str) -> Delta {
        self.content_document(identity).unwrap_or_else(|err| {
            error!(%identity, %err, "document lookup failed, returning empty document");
            Delta::new()
        })
    }
}
