//! Server half of the media upload gateway.
//!
//! A single multipart endpoint: validate, persist under a generated unique
//! name, answer with the fully-qualified URL the file is now retrievable at.
//! No deduplication, no content scanning, no size limit at this layer —
//! serving the stored files (and capping request sizes) is the surrounding
//! application's concern.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Host, Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tracing::{info, warn};
use uuid::Uuid;

use crate::editor::DEFAULT_UPLOAD_ENDPOINT;
use crate::media::UPLOAD_FIELD_NAME;

/// Upload gateway configuration.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory uploaded files are persisted to (created if absent).
    pub storage_dir: PathBuf,
    /// Public route prefix the files are served from.
    pub public_route: String,
    /// Scheme used when building result URLs.
    pub scheme: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("wwwroot/uploads"),
            public_route: "/uploads".to_string(),
            scheme: "http".to_string(),
        }
    }
}

/// Builds the gateway router, exposing `POST /api/upload/image`.
pub fn router(config: UploadConfig) -> Router {
    Router::new()
        .route(DEFAULT_UPLOAD_ENDPOINT, post(upload_image))
        .with_state(Arc::new(config))
}

async fn upload_image(
    State(config): State<Arc<UploadConfig>>,
    Host(host): Host,
    mut multipart: Multipart,
) -> Result<String, (StatusCode, String)> {
    let mut upload = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(UPLOAD_FIELD_NAME) {
                    continue;
                }
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
                upload = Some((file_name, bytes));
                break;
            }
            Ok(None) => break,
            Err(err) => return Err((StatusCode::BAD_REQUEST, err.to_string())),
        }
    }

    let Some((file_name, bytes)) = upload else {
        return Err((StatusCode::BAD_REQUEST, "No image uploaded.".to_string()));
    };
    if bytes.is_empty() {
        warn!(%file_name, "rejecting zero-length upload");
        return Err((StatusCode::BAD_REQUEST, "No image uploaded.".to_string()));
    }

    // Unique name, original extension preserved.
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let stored_name = format!("{}{}", Uuid::new_v4(), extension);

    tokio::fs::create_dir_all(&config.storage_dir)
        .await
        .map_err(internal_error)?;
    tokio::fs::write(config.storage_dir.join(&stored_name), &bytes)
        .await
        .map_err(internal_error)?;
    info!(%stored_name, size = bytes.len(), "stored uploaded image");

    Ok(format!(
        "{}://{}{}/{}",
        config.scheme, host, config.public_route, stored_name
    ))
}

fn internal_error(err: std::io::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
