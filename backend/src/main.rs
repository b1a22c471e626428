use rust_embed::{EmbeddedFile, RustEmbed};
use std::{env, net::IpAddr, process, str::FromStr, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{event, info, Level};
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};

use crate::{error::Result, web_server::http_server};

mod error;
mod web_server;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
    prefix: String,
    index: Option<String>,
}

#[derive(RustEmbed)]
#[folder = "../frontend/dist"]
pub struct Asset;

pub struct Config {
    pub http_host: IpAddr,
    pub http_port: u16,
    pub prefix: String,
}

impl Config {
    fn from_env() -> Self {
        Self {
            http_host: parse_env_var("HTTP_HOST", [127, 0, 0, 1].into()),
            http_port: parse_env_var("HTTP_PORT", 1080),
            prefix: normalize_prefix(&env::var("PORTFOLIO_PREFIX").unwrap_or_default()),
        }
    }
}

/// get a configuration from the environment or return default value
fn parse_env_var<T: FromStr>(name: &'static str, default: T) -> T {
    env::var(name)
        .unwrap_or_default()
        .parse::<T>()
        .unwrap_or(default)
}

/// "portfolio/" -> "/portfolio", "" -> "/"
fn normalize_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim_matches('/'))
}

/// point the asset includes of the trunk generated index to the static route
fn rewrite_index(index: &str, path_prefix: &str) -> String {
    let path_prefix = if path_prefix == "/" { "" } else { path_prefix };

    index
        .replace("href=\"/", &format!("href=\"{path_prefix}/static/"))
        .replace(
            "'/portfolio-frontend",
            &format!("'{path_prefix}/static/portfolio-frontend"),
        )
}

fn load_index(path_prefix: &str) -> Option<String> {
    let index: EmbeddedFile = Asset::get("index.html")?;
    let index = String::from_utf8(index.data.to_vec()).ok()?;

    Some(rewrite_index(&index, path_prefix))
}

async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            event!(Level::ERROR, "could not listen for ctrl-c {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                event!(Level::ERROR, "could not listen for SIGTERM {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown requested");
    token.cancel();
}

pub async fn run(config: Config, token: CancellationToken) -> Result<()> {
    let index = load_index(&config.prefix);

    if index.is_none() {
        event!(
            Level::WARN,
            "no frontend build found, run trunk build in the frontend folder"
        );
    }

    let app_state = Arc::new(AppState {
        prefix: config.prefix,
        index,
    });

    http_server(config.http_host, config.http_port, app_state, token).await
}

#[tokio::main]
async fn main() {
    // initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "portfolio_backend=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let token = CancellationToken::new();
    tokio::spawn(shutdown_signal(token.clone()));

    event!(
        Level::INFO,
        "Portfolio HTTP server starting on {}:{} with prefix {}",
        config.http_host,
        config.http_port,
        config.prefix
    );

    let exit_code = match run(config, token).await {
        Err(e) => {
            event!(Level::ERROR, "Portfolio server error {e}");
            1
        }
        Ok(()) => {
            event!(Level::INFO, "Portfolio server stopped");
            0
        }
    };

    process::exit(exit_code);
}
