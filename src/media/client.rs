//! HTTP client half of the media upload gateway.

use crate::error::{BridgeError, BridgeResult};

use super::interceptor::MediaUploader;
use super::policy::TransferItem;

/// Fixed multipart field name the gateway expects the file under.
pub const UPLOAD_FIELD_NAME: &str = "image";

/// Uploader posting multipart form data to the configured endpoint.
///
/// A 2xx response's body is the stored asset's URL; anything else is a
/// rejected upload. Unlike a browser fetch, this client does not resolve
/// relative endpoints — configure an absolute URL when using it natively.
#[derive(Debug, Clone, Default)]
pub struct HttpUploadClient {
    http: reqwest::Client,
}

impl HttpUploadClient {
    /// Creates a client with default HTTP settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client over an existing HTTP client (shared pools, proxies).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl MediaUploader for HttpUploadClient {
    async fn upload(&self, endpoint: &str, item: &TransferItem) -> BridgeResult<String> {
        let part = reqwest::multipart::Part::bytes(item.bytes.clone())
            .file_name(item.file_name.clone())
            .mime_str(&item.media_type)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.http.post(endpoint).multipart(form).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BridgeError::upload_rejected(status.as_u16(), message))
        }
    }
}
