//! One live editor session: engine plus change-notification discipline.

use tracing::debug;

use crate::delta::{Delta, Embed};

use super::engine::{EditorEngine, Selection};
use super::options::EditorOptions;

/// Receiver of content-change notifications.
///
/// Both methods fire independently on every notifying edit, document first,
/// markup second; a consumer may care about only one. Delivery to a remote
/// subscriber is the transport's concern — note that persistent-connection
/// transports usually cap message sizes, and that cap must be raised above
/// the largest expected document for large content to survive the trip.
pub trait ChangeSubscriber {
    /// The document snapshot after an edit.
    fn on_document_changed(&self, document: &Delta);

    /// The rendered-markup snapshot after an edit.
    fn on_markup_changed(&self, markup: &str);
}

/// Whether a content mutation fires change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Notify the subscriber, like a user-originated edit.
    Notify,
    /// Apply without firing the change listener. Required when the subscriber
    /// pushes its own update back into the editor it was just notified from,
    /// otherwise the round trip loops forever.
    Silent,
}

/// Associates one live editor engine with its options and subscriber.
pub struct EditorSession<E> {
    engine: E,
    options: EditorOptions,
    subscriber: Option<Box<dyn ChangeSubscriber>>,
}

impl<E: EditorEngine> EditorSession<E> {
    /// Creates a session over an engine.
    pub fn new(engine: E, options: EditorOptions) -> Self {
        Self {
            engine,
            options,
            subscriber: None,
        }
    }

    /// Builder: Attach the change subscriber.
    pub fn with_subscriber(mut self, subscriber: Box<dyn ChangeSubscriber>) -> Self {
        self.subscriber = Some(subscriber);
        self
    }

    /// Attaches or replaces the change subscriber.
    pub fn subscribe(&mut self, subscriber: Box<dyn ChangeSubscriber>) {
        self.subscriber = Some(subscriber);
    }

    /// The session's options.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The underlying engine, mutably. Mutations through this bypass the
    /// notification discipline.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Current document snapshot.
    pub fn contents(&self) -> Delta {
        self.engine.contents()
    }

    /// Current markup snapshot.
    pub fn markup(&self) -> String {
        self.engine.markup()
    }

    /// Current selection.
    pub fn selection(&self) -> Option<Selection> {
        self.engine.selection()
    }

    /// A user-originated edit: replaces the contents and notifies.
    pub fn apply_edit(&mut self, contents: Delta) {
        self.engine.set_contents(contents);
        self.notify();
    }

    /// Replaces the contents in the given mode.
    pub fn set_contents(&mut self, contents: Delta, mode: ApplyMode) {
        self.engine.set_contents(contents);
        if mode == ApplyMode::Notify {
            self.notify();
        }
    }

    /// Replaces the rendered markup directly. Like the live editor's
    /// `innerHTML` path, this does not fire the change listener.
    pub fn set_markup(&mut self, markup: &str) {
        self.engine.set_markup(markup);
    }

    /// Inserts an embed at the current selection and notifies.
    ///
    /// With no current selection (e.g. an upload resolving after the session
    /// lost focus or was torn down) this is a no-op, not a fault.
    pub fn insert_embed_at_selection(&mut self, embed: Embed) -> bool {
        match self.engine.selection() {
            Some(selection) => {
                self.engine.insert_embed(selection.index, embed);
                self.notify();
                true
            }
            None => {
                debug!("no current selection, skipping embed insertion");
                false
            }
        }
    }

    /// The video-insert command: embeds a video URL at the selection.
    pub fn insert_video(&mut self, url: impl Into<String>) -> bool {
        self.insert_embed_at_selection(Embed::Video(url.into()))
    }

    /// Embeds an image URL at the selection.
    pub fn insert_image(&mut self, url: impl Into<String>) -> bool {
        self.insert_embed_at_selection(Embed::Image(url.into()))
    }

    /// Delivers both snapshots to the subscriber as two independent calls.
    fn notify(&self) {
        if let Some(subscriber) = &self.subscriber {
            subscriber.on_document_changed(&self.engine.contents());
            subscriber.on_markup_changed(&self.engine.markup());
        }
    }
}
