//! Read-only HTTP access to the persisted artifacts
//!
//! Serves the workspace index and manifest verbatim over two GET endpoints.
//! The server never recomputes anything: a missing artifact is a 404, a
//! malformed one a 500.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
struct ArtifactPaths {
    index: PathBuf,
    manifest: PathBuf,
}

/// Serve `GET /index` and `GET /manifest` until interrupted.
pub async fn serve(
    index_path: PathBuf,
    manifest_path: PathBuf,
    host: &str,
    port: u16,
) -> Result<()> {
    let state = Arc::new(ArtifactPaths {
        index: index_path,
        manifest: manifest_path,
    });

    let router = Router::new()
        .route("/index", get(get_index))
        .route("/manifest", get(get_manifest))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("listening on http://{host}:{port}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}

async fn get_index(
    State(paths): State<Arc<ArtifactPaths>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    read_artifact(&paths.index)
}

async fn get_manifest(
    State(paths): State<Arc<ArtifactPaths>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    read_artifact(&paths.manifest)
}

fn read_artifact(path: &Path) -> Result<Json<serde_json::Value>, StatusCode> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        warn!("artifact {} not readable: {e}", path.display());
        StatusCode::NOT_FOUND
    })?;
    let value = serde_json::from_str(&text).map_err(|e| {
        warn!("artifact {} is not valid JSON: {e}", path.display());
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_artifact_returns_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace_index.json");
        fs::write(&path, r#"{"files": []}"#).unwrap();

        let Json(value) = read_artifact(&path).unwrap();
        assert_eq!(value, serde_json::json!({"files": []}));
    }

    #[test]
    fn test_missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_artifact(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_artifact_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = read_artifact(&path).unwrap_err();
        assert_eq!(err, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
