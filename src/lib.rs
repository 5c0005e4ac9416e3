pub mod api;
pub mod config;
pub mod db;

use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use config::DbConfig;
use db::Gateway;

pub struct AppState {
    pub config: DbConfig,
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(config: DbConfig) -> Self {
        let gateway = Gateway::new(&config);
        Self { config, gateway }
    }
}

/// Assemble the full application: API routes first, the bare root pinned
/// to the dashboard document, everything else served from the static
/// directory.
pub fn app(state: Arc<AppState>, static_dir: &Path) -> Router {
    let dashboard = static_dir.join("dashboard.html");

    Router::new()
        .merge(api::create_router(state))
        .route_service("/", ServeFile::new(dashboard))
        .fallback_service(ServeDir::new(static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::ConnectMode;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(DbConfig {
            user: "root".to_string(),
            password: String::new(),
            database: "railway".to_string(),
            mode: ConnectMode::Tcp {
                host: "localhost".to_string(),
                port: 3306,
            },
        }))
    }

    #[tokio::test]
    async fn root_serves_the_dashboard_document() {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join("dashboard.html"),
            "<html>notulen</html>",
        )
        .unwrap();

        let router = app(test_state(), static_dir.path());
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>notulen</html>");
    }

    #[tokio::test]
    async fn non_api_paths_fall_through_to_static_files() {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(static_dir.path().join("style.css"), "body { margin: 0 }").unwrap();

        let router = app(test_state(), static_dir.path());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body { margin: 0 }");
    }

    #[tokio::test]
    async fn missing_static_file_is_not_found() {
        let static_dir = TempDir::new().unwrap();

        let router = app(test_state(), static_dir.path());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
