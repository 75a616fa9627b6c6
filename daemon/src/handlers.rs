use crate::response;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

const DEFAULT_FOLDER_NAME: &str = "website_content";

#[derive(Debug, Deserialize)]
pub struct SnapshotParams {
    url: Option<String>,
    folder_name: Option<String>,
}

/// GET /get_resources?url=<page url>&folder_name=<destination folder>
pub async fn get_resources(Query(params): Query<SnapshotParams>) -> Response {
    let url = match params.url {
        Some(u) => u,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(response::Failure {
                    error: "No URL provided".to_string(),
                }),
            )
                .into_response();
        }
    };
    let folder_name = params
        .folder_name
        .unwrap_or_else(|| DEFAULT_FOLDER_NAME.to_string());

    match libpagesnap::init_snapshot(&url, &folder_name).await {
        Ok(()) => (
            StatusCode::OK,
            Json(response::Success {
                message: format!("Content downloaded to folder {folder_name}"),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Snapshot failed for {}\nError : {}", url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(response::Failure {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
