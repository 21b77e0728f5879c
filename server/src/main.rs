use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use ir_core::cli::IndexArgs;
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    index: IndexArgs,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let index_args = args.index;
    let index = tokio::task::spawn_blocking(move || {
        index_args.build_index().with_context(|| format!("indexing {}", index_args.corpus.display()))
    })
    .await??;

    let app: Router = build_app(index);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
