//! Media type detection policy for paste and drop events.

/// How the payload arrived at the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Clipboard paste.
    Paste,
    /// Drag-and-drop.
    Drop,
}

/// One file carried by a paste or drop event.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferItem {
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    /// Original file name (extension is preserved by the upload gateway).
    pub file_name: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl TransferItem {
    /// Creates a transfer item.
    pub fn new(
        media_type: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            media_type: media_type.into(),
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// A rule deciding whether a declared media type counts as an image.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaTypeRule {
    /// Any `image/*` type.
    AnyImage,
    /// An exact image subtype allow-list, matched case-insensitively.
    /// Note that `svg` does not match `svg+xml`: the subtype must be exact.
    Formats(Vec<String>),
}

impl MediaTypeRule {
    /// Returns true if the media type is accepted.
    pub fn accepts(&self, media_type: &str) -> bool {
        let lower = media_type.to_ascii_lowercase();
        match self {
            MediaTypeRule::AnyImage => lower.starts_with("image/"),
            MediaTypeRule::Formats(formats) => match lower.strip_prefix("image/") {
                Some(subtype) => formats.iter().any(|f| f.eq_ignore_ascii_case(subtype)),
                None => false,
            },
        }
    }
}

/// The paste format allow-list inherited from the original interceptor.
pub const PASTE_IMAGE_FORMATS: [&str; 6] = ["jpeg", "jpg", "gif", "png", "svg", "webp"];

/// Per-transfer-kind image detection rules.
///
/// The defaults are intentionally asymmetric (inherited policy): drop accepts
/// any `image/*`, paste only an explicit format allow-list. Construct your
/// own to unify them deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypePolicy {
    /// Rule applied to pasted items.
    pub paste: MediaTypeRule,
    /// Rule applied to dropped items.
    pub drop: MediaTypeRule,
}

impl MediaTypePolicy {
    /// Creates a policy applying the same rule to both kinds.
    pub fn uniform(rule: MediaTypeRule) -> Self {
        Self {
            paste: rule.clone(),
            drop: rule,
        }
    }

    /// Returns true if the media type is accepted for the transfer kind.
    pub fn accepts(&self, kind: TransferKind, media_type: &str) -> bool {
        match kind {
            TransferKind::Paste => self.paste.accepts(media_type),
            TransferKind::Drop => self.drop.accepts(media_type),
        }
    }
}

impl Default for MediaTypePolicy {
    fn default() -> Self {
        Self {
            paste: MediaTypeRule::Formats(
                PASTE_IMAGE_FORMATS.iter().map(|f| f.to_string()).collect(),
            ),
            drop: MediaTypeRule::AnyImage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_allow_list() {
        let policy = MediaTypePolicy::default();
        assert!(policy.accepts(TransferKind::Paste, "image/png"));
        assert!(policy.accepts(TransferKind::Paste, "image/JPEG"));
        assert!(policy.accepts(TransferKind::Paste, "image/webp"));
        assert!(!policy.accepts(TransferKind::Paste, "image/tiff"));
        assert!(!policy.accepts(TransferKind::Paste, "text/plain"));
    }

    #[test]
    fn test_paste_rejects_svg_xml_subtype() {
        // The allow-list matches the exact subtype, so the real-world
        // `image/svg+xml` is rejected on paste but accepted on drop.
        let policy = MediaTypePolicy::default();
        assert!(!policy.accepts(TransferKind::Paste, "image/svg+xml"));
        assert!(policy.accepts(TransferKind::Drop, "image/svg+xml"));
    }

    #[test]
    fn test_drop_accepts_any_image() {
        let policy = MediaTypePolicy::default();
        assert!(policy.accepts(TransferKind::Drop, "image/tiff"));
        assert!(policy.accepts(TransferKind::Drop, "IMAGE/png"));
        assert!(!policy.accepts(TransferKind::Drop, "video/mp4"));
    }

    #[test]
    fn test_uniform_policy() {
        let policy = MediaTypePolicy::uniform(MediaTypeRule::AnyImage);
        assert!(policy.accepts(TransferKind::Paste, "image/tiff"));
        assert!(policy.accepts(TransferKind::Drop, "image/tiff"));
    }
}
