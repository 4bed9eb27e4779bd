use dotenvy::dotenv;
use axum::{
    http::header,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
mod handlers {
    pub mod static_site;
}
mod config;
mod error;
use config::ServerConfig;
use handlers::static_site;

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_site::service(&config.dist_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            config.cache_control.clone(),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bluedrop_server=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(
            "no index.html in {}; build the frontend with `trunk build` first",
            config.dist_dir.display()
        );
    }
    let app = build_router(&config);

    tracing::info!("Serving {} on port {}", config.dist_dir.display(), config.port);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    const INDEX: &str = "<!DOCTYPE html><html><body><div id=\"modal\"></div></body></html>";

    struct Site {
        dir: PathBuf,
    }

    impl Site {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("bluedrop-site-{}", Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), INDEX).unwrap();
            std::fs::write(dir.join("bluedrop.js"), "export default function init() {}").unwrap();
            Self { dir }
        }

        fn router(&self) -> Router {
            build_router(&ServerConfig {
                port: 0,
                dist_dir: self.dir.clone(),
                cache_control: HeaderValue::from_static("public, max-age=3600"),
            })
        }
    }

    impl Drop for Site {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    async fn fetch(router: Router, uri: &str) -> (StatusCode, Option<HeaderValue>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let cache = response.headers().get(header::CACHE_CONTROL).cloned();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, cache, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health() {
        let site = Site::new();
        let (status, _, body) = fetch(site.router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn serves_built_assets() {
        let site = Site::new();
        let (status, cache, body) = fetch(site.router(), "/bluedrop.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.unwrap(), "public, max-age=3600");
        assert!(body.contains("init"));
    }

    #[tokio::test]
    async fn client_routes_get_the_app_shell() {
        let site = Site::new();
        for path in ["/", "/tips", "/gallery", "/no/such/page"] {
            let (status, _, body) = fetch(site.router(), path).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert_eq!(body, INDEX, "{}", path);
        }
    }
}
