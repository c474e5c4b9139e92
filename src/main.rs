use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use question_aggregator::config::parse_timeout;
use question_aggregator::{
    build_router, Aggregator, AppState, CompanyCatalog, Config, HttpSourceClient,
};

#[derive(Parser, Debug)]
#[command(name = "question-aggregator")]
#[command(version)]
#[command(about = "Serve company-tagged coding questions aggregated from public question banks")]
struct Args {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(short, long)]
    bind: Option<String>,

    /// Per-source request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("question_aggregator=info".parse()?)
                .add_directive("tower_http=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(ref timeout) = args.timeout_secs {
        config.request_timeout_secs = parse_timeout(timeout)?;
    }

    let client = HttpSourceClient::new(&config)?;
    let aggregator = Aggregator::new(Arc::new(client), Arc::new(CompanyCatalog::new()));
    let app = build_router(AppState::new(aggregator));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "Listening on {} (source timeout {}s)",
        config.bind_addr,
        config.request_timeout_secs
    );

    axum::serve(listener, app).await?;

    Ok(())
}
