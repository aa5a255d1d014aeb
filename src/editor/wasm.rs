//! WASM bindings for the editor session adapter.
//!
//! Exposes the interop surface a page script drives: initialize, get/set
//! content as markup or document text, dispose. Lookup and decode failures
//! degrade to safe defaults with a console error, never an exception across
//! the boundary.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::delta::Delta;
use crate::error::BridgeError;

use super::buffer::BufferEngine;
use super::options::{EditorOptions, ToolbarSpec};
use super::registry::EditorRegistry;
use super::session::{ApplyMode, ChangeSubscriber, EditorSession};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(message: &str);
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// The empty document's textual encoding, the degrade value for document
/// lookups.
const EMPTY_DOCUMENT_JSON: &str = r#"{"ops":[]}"#;

/// Subscriber that forwards both notifications to JavaScript callbacks.
struct JsChangeSubscriber {
    on_document_changed: Function,
    on_markup_changed: Function,
}

impl ChangeSubscriber for JsChangeSubscriber {
    fn on_document_changed(&self, document: &Delta) {
        match document.to_json() {
            Ok(json) => {
                let _ = self
                    .on_document_changed
                    .call1(&JsValue::NULL, &JsValue::from_str(&json));
            }
            Err(err) => console_error(&format!("Failed to encode document: {err}")),
        }
    }

    fn on_markup_changed(&self, markup: &str) {
        let _ = self
            .on_markup_changed
            .call1(&JsValue::NULL, &JsValue::from_str(markup));
    }
}

/// JavaScript-friendly wrapper around the editor registry.
///
/// One bridge instance holds every live editor on the page, keyed by the
/// editor container id.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsEditorBridge {
    inner: EditorRegistry<BufferEngine>,
}

#[wasm_bindgen]
impl JsEditorBridge {
    /// Creates an empty bridge.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditorBridge {
        JsEditorBridge {
            inner: EditorRegistry::new(),
        }
    }

    /// Initializes an editor session under `editor_id`.
    ///
    /// `toolbar_options` may be a structured spec or its JSON-text encoding;
    /// anything malformed degrades to the default toolbar. The two callbacks
    /// receive the document JSON and the rendered markup on every notifying
    /// edit, as two independent calls.
    #[wasm_bindgen(js_name = initializeEditor)]
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_editor(
        &mut self,
        editor_id: &str,
        toolbar_options: JsValue,
        placeholder: &str,
        theme: &str,
        upload_image: bool,
        image_api: &str,
        on_document_changed: Function,
        on_markup_changed: Function,
    ) {
        let toolbar = if let Some(text) = toolbar_options.as_string() {
            ToolbarSpec::parse(&text)
        } else if toolbar_options.is_undefined() || toolbar_options.is_null() {
            ToolbarSpec::Default
        } else {
            match serde_wasm_bindgen::from_value::<serde_json::Value>(toolbar_options) {
                Ok(serde_json::Value::Bool(true)) => ToolbarSpec::Default,
                Ok(value) => ToolbarSpec::custom(value),
                Err(err) => {
                    console_error(&format!("Invalid toolbar options, using default: {err}"));
                    ToolbarSpec::Default
                }
            }
        };

        let options = EditorOptions::new()
            .with_toolbar(toolbar)
            .with_placeholder(placeholder)
            .with_theme(theme)
            .with_upload_enabled(upload_image)
            .with_upload_endpoint(image_api);

        let session = EditorSession::new(BufferEngine::new(), options).with_subscriber(Box::new(
            JsChangeSubscriber {
                on_document_changed,
                on_markup_changed,
            },
        ));
        self.inner.initialize(editor_id, session);
    }

    /// Rendered markup for an editor, or `""` with a console error when the
    /// editor is not registered.
    #[wasm_bindgen(js_name = getEditorContent)]
    pub fn get_editor_content(&self, editor_id: &str) -> String {
        match self.inner.content_markup(editor_id) {
            Ok(markup) => markup,
            Err(err) => {
                console_error(&err.to_string());
                String::new()
            }
        }
    }

    /// Document JSON for an editor, or the empty document with a console
    /// error when the editor is not registered.
    #[wasm_bindgen(js_name = getEditorDelta)]
    pub fn get_editor_delta(&self, editor_id: &str) -> String {
        match self.inner.content_document_json(editor_id) {
            Ok(json) => json,
            Err(err) => {
                console_error(&err.to_string());
                EMPTY_DOCUMENT_JSON.to_string()
            }
        }
    }

    /// Replaces an editor's content with the given markup.
    #[wasm_bindgen(js_name = setEditorContent)]
    pub fn set_editor_content(&mut self, editor_id: &str, content: &str) {
        if let Err(err) = self.inner.set_content_markup(editor_id, content) {
            console_error(&err.to_string());
        }
    }

    /// Replaces an editor's content with the decoded document, silently —
    /// the change listener does not fire, so a subscriber pushing back the
    /// update it was just notified of does not loop.
    #[wasm_bindgen(js_name = setEditorDelta)]
    pub fn set_editor_delta(&mut self, editor_id: &str, delta_json: &str) {
        if let Err(err) = self
            .inner
            .set_content_document(editor_id, delta_json, ApplyMode::Silent)
        {
            console_error(&err.to_string());
        }
    }

    /// Removes the registration for an editor.
    #[wasm_bindgen(js_name = disposeEditor)]
    pub fn dispose_editor(&mut self, editor_id: &str) {
        if let Err(err) = self.inner.dispose(editor_id) {
            console_error(&err.to_string());
        }
    }
}
