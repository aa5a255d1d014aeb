//! Paste/drop media interceptor.
//!
//! Detects image payloads in paste/drop events, uploads each via the upload
//! gateway client, and inserts the returned URL as an embed at the selection
//! current when that upload resolves.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, error};

use crate::delta::Embed;
use crate::editor::{EditorEngine, EditorSession};
use crate::error::{BridgeError, BridgeResult};

use super::policy::{MediaTypePolicy, TransferItem, TransferKind};

/// Uploads one file to an endpoint and returns the stored asset's URL.
pub trait MediaUploader {
    /// Issues the upload. Success is the response body interpreted as a URL.
    fn upload(
        &self,
        endpoint: &str,
        item: &TransferItem,
    ) -> impl Future<Output = BridgeResult<String>>;
}

/// Observable failure signal for the end user (the `alert(...)` analogue).
pub trait UploadNotifier {
    /// A single item's upload failed; processing of other items continues.
    fn upload_failed(&mut self, file_name: &str, error: &BridgeError);
}

/// Notifier that only logs. Hosts with a UI surface replace this.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl UploadNotifier for LogNotifier {
    fn upload_failed(&mut self, file_name: &str, error: &BridgeError) {
        error!(%file_name, %error, "image upload failed");
    }
}

/// What happened to one accepted item, in upload-completion order.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Uploaded and embedded at the then-current selection.
    Inserted { item: usize, url: String },
    /// Uploaded, but the session had no selection; nothing was inserted.
    NotInserted { item: usize, url: String },
    /// Upload failed; the notifier was told and no embed was inserted.
    Failed { item: usize },
}

/// Intercepts paste/drop image payloads and turns them into uploaded embeds.
pub struct MediaInterceptor<U> {
    uploader: U,
    policy: MediaTypePolicy,
}

impl<U: MediaUploader> MediaInterceptor<U> {
    /// Creates an interceptor with the default (asymmetric) media policy.
    pub fn new(uploader: U) -> Self {
        Self {
            uploader,
            policy: MediaTypePolicy::default(),
        }
    }

    /// Builder: Set the media type policy.
    pub fn with_policy(mut self, policy: MediaTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active policy.
    pub fn policy(&self) -> &MediaTypePolicy {
        &self.policy
    }

    /// Returns true if the event carries at least one accepted image — the
    /// host suppresses the default insertion exactly when this is true.
    pub fn should_intercept(&self, kind: TransferKind, items: &[TransferItem]) -> bool {
        items
            .iter()
            .any(|item| self.policy.accepts(kind, &item.media_type))
    }

    /// Uploads every accepted item and embeds each returned URL.
    ///
    /// Uploads are issued in item order but run concurrently, and each embed
    /// is inserted at the selection captured when *that* upload resolves. A
    /// rapid multi-image paste can therefore interleave insertion order with
    /// upload-completion order — known ordering hazard, kept as-is. A failed
    /// upload is reported through the notifier and skipped; later items still
    /// process. Returns outcomes in completion order, indexed by the item's
    /// position in `items`.
    pub async fn process<E: EditorEngine>(
        &self,
        kind: TransferKind,
        items: &[TransferItem],
        session: &mut EditorSession<E>,
        notifier: &mut dyn UploadNotifier,
    ) -> Vec<UploadOutcome> {
        if !session.options().upload_enabled {
            debug!("image upload disabled, leaving event to the default handler");
            return Vec::new();
        }
        let endpoint_owned = session.options().upload_endpoint.clone();
        let endpoint = endpoint_owned.as_str();
        let uploader = &self.uploader;

        let mut uploads = FuturesUnordered::new();
        for (index, item) in items.iter().enumerate() {
            if !self.policy.accepts(kind, &item.media_type) {
                continue;
            }
            uploads.push(async move { (index, uploader.upload(endpoint, item).await) });
        }

        let mut outcomes = Vec::new();
        while let Some((index, result)) = uploads.next().await {
            match result {
                Ok(url) => {
                    if session.insert_embed_at_selection(Embed::Image(url.clone())) {
                        outcomes.push(UploadOutcome::Inserted { item: index, url });
                    } else {
                        outcomes.push(UploadOutcome::NotInserted { item: index, url });
                    }
                }
                Err(error) => {
                    notifier.upload_failed(&items[index].file_name, &error);
                    outcomes.push(UploadOutcome::Failed { item: index });
                }
            }
        }
        outcomes
    }

    /// Single-file path used by the toolbar image command and the drop
    /// handler: upload one item and embed the result.
    pub async fn upload_and_insert<E: EditorEngine>(
        &self,
        item: &TransferItem,
        session: &mut EditorSession<E>,
        notifier: &mut dyn UploadNotifier,
    ) -> Option<String> {
        let endpoint = session.options().upload_endpoint.clone();
        match self.uploader.upload(&endpoint, item).await {
            Ok(url) => {
                session.insert_embed_at_selection(Embed::Image(url.clone()));
                Some(url)
            }
            Err(error) => {
                notifier.upload_failed(&item.file_name, &error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::delta::{Delta, DeltaOp, Insert};
    use crate::editor::{ApplyMode, BufferEngine, EditorOptions, EditorSession, Selection};

    /// Uploader with a controllable delay and failure set per file name.
    #[derive(Default)]
    struct FakeUploader {
        delays_ms: HashMap<String, u64>,
        failing: Vec<String>,
    }

    impl FakeUploader {
        fn delay(mut self, file_name: &str, ms: u64) -> Self {
            self.delays_ms.insert(file_name.to_string(), ms);
            self
        }

        fn fail(mut self, file_name: &str) -> Self {
            self.failing.push(file_name.to_string());
            self
        }
    }

    impl MediaUploader for FakeUploader {
        async fn upload(&self, _endpoint: &str, item: &TransferItem) -> BridgeResult<String> {
            if let Some(ms) = self.delays_ms.get(&item.file_name) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.failing.contains(&item.file_name) {
                return Err(BridgeError::upload_rejected(500, "boom"));
            }
            Ok(format!("https://cdn.test/{}", item.file_name))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Vec<String>);

    impl UploadNotifier for RecordingNotifier {
        fn upload_failed(&mut self, file_name: &str, _error: &BridgeError) {
            self.0.push(file_name.to_string());
        }
    }

    fn session_with_cursor(index: usize) -> EditorSession<BufferEngine> {
        let mut session = EditorSession::new(BufferEngine::new(), EditorOptions::default());
        session.set_contents(
            Delta::new().with_op(DeltaOp::text("doc")),
            ApplyMode::Silent,
        );
        session.engine_mut().set_selection(Some(Selection::cursor(index)));
        session
    }

    fn png(name: &str) -> TransferItem {
        TransferItem::new("image/png", name, vec![1, 2, 3])
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_order_determines_document_order() {
        // A is issued first but resolves last; B's embed lands first. This
        // pins the documented ordering hazard rather than fixing it.
        let interceptor =
            MediaInterceptor::new(FakeUploader::default().delay("a.png", 50).delay("b.png", 10));
        let mut session = session_with_cursor(0);
        let mut notifier = RecordingNotifier::default();

        let outcomes = interceptor
            .process(
                TransferKind::Paste,
                &[png("a.png"), png("b.png")],
                &mut session,
                &mut notifier,
            )
            .await;

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], UploadOutcome::Inserted { item: 1, .. }));
        assert!(matches!(outcomes[1], UploadOutcome::Inserted { item: 0, .. }));

        let contents = session.contents();
        assert_eq!(
            contents.ops[0].insert,
            Insert::Embed(crate::delta::Embed::Image("https://cdn.test/b.png".into()))
        );
        assert_eq!(
            contents.ops[1].insert,
            Insert::Embed(crate::delta::Embed::Image("https://cdn.test/a.png".into()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_item_is_reported_and_skipped() {
        let interceptor = MediaInterceptor::new(
            FakeUploader::default().fail("bad.png").delay("ok.png", 5),
        );
        let mut session = session_with_cursor(0);
        let mut notifier = RecordingNotifier::default();

        let outcomes = interceptor
            .process(
                TransferKind::Paste,
                &[png("bad.png"), png("ok.png")],
                &mut session,
                &mut notifier,
            )
            .await;

        assert_eq!(notifier.0, vec!["bad.png".to_string()]);
        assert!(outcomes.contains(&UploadOutcome::Failed { item: 0 }));
        // Exactly one embed made it in.
        let embeds = session
            .contents()
            .ops
            .iter()
            .filter(|op| matches!(op.insert, Insert::Embed(_)))
            .count();
        assert_eq!(embeds, 1);
    }

    #[tokio::test]
    async fn test_no_selection_skips_insertion() {
        let interceptor = MediaInterceptor::new(FakeUploader::default());
        let mut session = EditorSession::new(BufferEngine::new(), EditorOptions::default());
        let mut notifier = RecordingNotifier::default();

        let outcomes = interceptor
            .process(TransferKind::Drop, &[png("a.png")], &mut session, &mut notifier)
            .await;

        assert!(matches!(outcomes[0], UploadOutcome::NotInserted { item: 0, .. }));
        assert!(session.contents().is_empty());
    }

    #[tokio::test]
    async fn test_non_image_items_are_ignored() {
        let interceptor = MediaInterceptor::new(FakeUploader::default());
        let mut session = session_with_cursor(0);
        let mut notifier = RecordingNotifier::default();

        let items = [
            TransferItem::new("text/plain", "note.txt", vec![0]),
            png("a.png"),
        ];
        assert!(interceptor.should_intercept(TransferKind::Paste, &items));

        let outcomes = interceptor
            .process(TransferKind::Paste, &items, &mut session, &mut notifier)
            .await;
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], UploadOutcome::Inserted { item: 1, .. }));
    }

    #[tokio::test]
    async fn test_upload_disabled_does_nothing() {
        let interceptor = MediaInterceptor::new(FakeUploader::default());
        let options = EditorOptions::default().with_upload_enabled(false);
        let mut session = EditorSession::new(BufferEngine::new(), options);
        let mut notifier = RecordingNotifier::default();

        let outcomes = interceptor
            .process(TransferKind::Paste, &[png("a.png")], &mut session, &mut notifier)
            .await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_upload_and_insert_single_file() {
        let interceptor = MediaInterceptor::new(FakeUploader::default());
        let mut session = session_with_cursor(3);
        let mut notifier = RecordingNotifier::default();

        let url = interceptor
            .upload_and_insert(&png("pick.png"), &mut session, &mut notifier)
            .await;
        assert_eq!(url.as_deref(), Some("https://cdn.test/pick.png"));
        assert_eq!(session.contents().length(), 4);
    }
}
