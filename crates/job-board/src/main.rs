mod config;
mod error;
mod routes;
mod scroll;
mod seed;
mod server;
mod source;
mod store;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use jobboard_common::api_client::ApiClient;
use server::JobBoardServer;
use source::{HttpSource, JobSource, SeededSource, Source};
use store::JobStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting job-board MCP server");

    let config = Config::from_env()?;
    info!(
        refresh_delay_ms = config.refresh_delay.as_millis(),
        upstream = config.api.is_some(),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let source = match &config.api {
        Some(api) => {
            let client = ApiClient::new(api.clone())?;
            info!(
                base_url = %client.config().base_url,
                timeout_ms = client.config().default_timeout.as_millis(),
                max_retries = client.config().max_retries,
                "jobs API client configured"
            );
            Source::Http(HttpSource::new(client))
        }
        None => Source::Seeded(SeededSource::new(config.refresh_delay)),
    };
    let upstream = matches!(source, Source::Http(_));
    info!(source = source.name(), "job source selected");

    let store = Arc::new(JobStore::new(seed::seed_jobs(), source)?);
    if upstream {
        store.refresh().await;
        if let Some(error) = store.error().await {
            warn!(error, "initial upstream load failed, serving seed postings");
        }
    }
    info!(jobs = store.status().await.job_count, "job store ready");

    let server = JobBoardServer::new(store);

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
