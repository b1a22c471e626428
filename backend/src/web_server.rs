use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tokio_util::sync::CancellationToken;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{event, info, Level};

use crate::{
    error::{Error, Result},
    AppState, Asset, VERSION,
};

#[derive(Serialize)]
struct Version {
    version: &'static str,
}

/// trunk generated index page, with rewritten asset paths
async fn index(
    Extension(state): Extension<Arc<AppState>>,
) -> std::result::Result<Html<String>, StatusCode> {
    state.index.clone().map(Html).ok_or(StatusCode::NOT_FOUND)
}

/// embedded frontend assets (wasm, js, css)
async fn static_handler(Path(path): Path<String>) -> Response {
    match Asset::get(&path) {
        Some(file) => (
            [(header::CONTENT_TYPE, file.metadata.mimetype().to_owned())],
            file.data,
        )
            .into_response(),
        None => {
            event!(Level::DEBUG, "asset {path} not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn version_handler() -> Json<Version> {
    Json(Version { version: VERSION })
}

pub(crate) fn router(app_state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/api/version", get(version_handler))
        .route("/static/*path", get(static_handler));

    let app = if app_state.prefix == "/" {
        router
    } else {
        // nesting only matches "{prefix}", proxies usually forward "{prefix}/"
        Router::new()
            .route(&format!("{}/", app_state.prefix), get(index))
            .nest(app_state.prefix.as_str(), router.clone())
            .merge(router)
    };

    app.layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    )
    .layer(Extension(app_state))
}

pub async fn http_server(
    host: IpAddr,
    port: u16,
    app_state: Arc<AppState>,
    token: CancellationToken,
) -> Result<()> {
    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::WebServer(format!("could not bind to {addr}: {e}")))?;

    info!("Web server listening on {addr}");

    axum::serve(listener, router(app_state))
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;

    info!("Web server stopped");

    Ok(())
}
