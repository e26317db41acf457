use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use clap::Parser;
use tokio::sync::RwLock;

use super::*;

/// Uploads are media files; the axum default of 2 MiB is too small.
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "In-memory catalog API (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5011")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Directory for uploaded files
    #[arg(long, default_value = "./catalog-data")]
    data_dir: PathBuf,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    catalog::logging::init_stderr();

    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;

    let state = Arc::new(AppState {
        data_dir: args.data_dir.clone(),
        catalog: Arc::new(RwLock::new(Catalog::default())),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/criadores", get(list_creators).post(create_creator))
        .route("/api/criadores/:id", axum::routing::delete(delete_creator))
        .route("/api/criadores/:id/conteudos", get(list_creator_content))
        .route("/api/conteudos", post(create_content))
        .route(
            "/api/conteudos/:id",
            put(update_content).delete(delete_content),
        )
        .route("/api/arquivos/upload/:id", post(upload_file))
        .route("/api/arquivos/download/*path", get(download_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("catalog-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
