//! Standalone media upload gateway.
//!
//! Usage:
//!   upload-server --bind 0.0.0.0:8080 --storage-dir wwwroot/uploads

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use quillbridge::server::{router, UploadConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "upload-server",
    about = "Run the media upload gateway for embedded editors",
    version
)]
struct Args {
    /// Address to bind the HTTP server on
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "QUILLBRIDGE_BIND")]
    bind: SocketAddr,

    /// Directory uploaded files are stored in
    #[arg(short, long, default_value = "wwwroot/uploads")]
    storage_dir: PathBuf,

    /// Public route prefix the stored files are served from
    #[arg(long, default_value = "/uploads")]
    public_route: String,

    /// Scheme used when building upload result URLs
    #[arg(long, default_value = "http")]
    scheme: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = UploadConfig {
        storage_dir: args.storage_dir,
        public_route: args.public_route,
        scheme: args.scheme,
    };
    info!(storage_dir = ?config.storage_dir, "Starting upload gateway");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "Upload gateway listening");
    axum::serve(listener, router(config)).await?;

    Ok(())
}
