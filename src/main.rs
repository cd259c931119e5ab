//! s2s-catalog - 语音对话演示目录服务
//!
//! 启动流程：配置 -> 日志 -> 目录来源 -> 完整性校验 -> HTTP 服务

use std::sync::Arc;

use s2s_catalog::application::{CatalogRepositoryPort, ValidateCatalog, ValidateCatalogHandler};
use s2s_catalog::config::{load_config, print_config, LogConfig};
use s2s_catalog::infrastructure::catalog::{BuiltinCatalogRepository, FileCatalogRepository};
use s2s_catalog::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},s2s_catalog={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("s2s-catalog v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 目录来源：配置了文件则加载文件，否则使用内置演示数据
    let catalog_repo: Arc<dyn CatalogRepositoryPort> = match &config.catalog.path {
        Some(path) => Arc::new(FileCatalogRepository::load(path.clone()).await?),
        None => Arc::new(BuiltinCatalogRepository::new()),
    };

    let report = ValidateCatalogHandler::new(catalog_repo.clone())
        .handle(ValidateCatalog)
        .await?;
    if report.is_clean() {
        tracing::info!(source = %catalog_repo.source(), "Catalog validated");
    } else if config.catalog.strict {
        anyhow::bail!(
            "Catalog {} has {} issue(s) and strict mode is enabled",
            catalog_repo.source(),
            report.len()
        );
    } else {
        tracing::warn!(
            source = %catalog_repo.source(),
            issues = report.len(),
            "Catalog has issues, serving anyway"
        );
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(catalog_repo));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
