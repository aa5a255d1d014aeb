//! Initialization options for an editor session.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default upload endpoint path.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "/api/upload/image";

/// Default editor theme.
pub const DEFAULT_THEME: &str = "snow";

/// Toolbar configuration: the library default toolbar, or a structured spec.
///
/// A structured spec is carried opaquely as JSON; the bridge never interprets
/// it, it only hands it to the editor widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolbarSpec {
    /// Use the editor's default toolbar.
    Default,
    /// A structured toolbar spec, passed through to the editor.
    Custom(serde_json::Value),
}

impl ToolbarSpec {
    /// Creates a custom toolbar spec.
    pub fn custom(spec: serde_json::Value) -> Self {
        Self::Custom(spec)
    }

    /// Parses a textual toolbar encoding.
    ///
    /// A malformed encoding degrades to the default toolbar rather than
    /// failing; `true` (the editor's "default toolbar" literal) also maps to
    /// the default.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Bool(true)) => Self::Default,
            Ok(value) => Self::Custom(value),
            Err(err) => {
                warn!(%err, "invalid toolbar options JSON, using default toolbar");
                Self::Default
            }
        }
    }

    /// Returns true for the default toolbar.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Default for ToolbarSpec {
    fn default() -> Self {
        Self::Default
    }
}

/// Configuration surface for one editor session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    /// Toolbar configuration.
    pub toolbar: ToolbarSpec,
    /// Placeholder text shown in an empty editor.
    pub placeholder: String,
    /// Editor theme name.
    pub theme: String,
    /// Whether pasted/dropped/picked images are uploaded (vs. inlined).
    pub upload_enabled: bool,
    /// Endpoint the upload gateway client posts to.
    pub upload_endpoint: String,
}

impl EditorOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set the toolbar spec.
    pub fn with_toolbar(mut self, toolbar: ToolbarSpec) -> Self {
        self.toolbar = toolbar;
        self
    }

    /// Builder: Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Builder: Set the theme name.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Builder: Enable or disable image upload.
    pub fn with_upload_enabled(mut self, enabled: bool) -> Self {
        self.upload_enabled = enabled;
        self
    }

    /// Builder: Set the upload endpoint.
    pub fn with_upload_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.upload_endpoint = endpoint.into();
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            toolbar: ToolbarSpec::Default,
            placeholder: String::new(),
            theme: DEFAULT_THEME.to_string(),
            upload_enabled: true,
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert!(options.toolbar.is_default());
        assert_eq!(options.placeholder, "");
        assert_eq!(options.theme, "snow");
        assert!(options.upload_enabled);
        assert_eq!(options.upload_endpoint, "/api/upload/image");
    }

    #[test]
    fn test_toolbar_parse_structured() {
        let spec = ToolbarSpec::parse(r#"[["bold","italic"],["image"]]"#);
        assert!(matches!(spec, ToolbarSpec::Custom(_)));
    }

    #[test]
    fn test_toolbar_parse_true_is_default() {
        assert!(ToolbarSpec::parse("true").is_default());
    }

    #[test]
    fn test_toolbar_parse_malformed_degrades_to_default() {
        assert!(ToolbarSpec::parse("[[bold").is_default());
    }
}
