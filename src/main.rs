use clap::Parser;
use std::sync::Arc;
use unisearch::adapters::http::serve;
use unisearch::utils::{logger, validation::Validate};
use unisearch::{build_router, cors_layer, AppConfig, AppState, CliConfig, JsonFileStore, SearchService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_server_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting unisearch");

    let config = match AppConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::new(&config.data_path);
    if !store.path().exists() {
        tracing::warn!(
            "⚠️ Data file {} does not exist yet, searches will return no results",
            store.path().display()
        );
    }
    tracing::info!("📁 Serving universities from {}", store.path().display());

    let service = SearchService::new(Arc::new(store)).with_default_limit(config.default_limit);
    let router = build_router(AppState::new(service), cors_layer(&config.allowed_origins)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("🌐 HTTP server listening on {}", listener.local_addr()?);

    serve(listener, router).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
