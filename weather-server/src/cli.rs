use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use weather_core::Config;
use weather_server::{AppState, handlers::page::check_index_page, router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy HTTP server")]
pub struct Cli {
    /// Config file to use instead of the platform default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. "127.0.0.1:3001".
    #[arg(long)]
    pub bind: Option<String>,

    /// HTML page served at `/`.
    #[arg(long)]
    pub index: Option<PathBuf>,
}

impl Cli {
    /// Resolve the final configuration: file and environment first, flags on top.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(bind) = &self.bind {
            config.bind_addr = bind.clone();
        }
        if let Some(index) = &self.index {
            config.index_path = index.clone();
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;

        if config.api_key().is_none() {
            info!("no OpenWeather API key configured; /api/weather will report a configuration error");
        }
        check_index_page(&config.index_path);

        let listener = tokio::net::TcpListener::bind(&config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
        let local_addr = listener.local_addr()?;

        let app = router(AppState::new(config));

        info!(addr = %local_addr, "weather server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("weather server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
