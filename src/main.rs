//! Vocard - 语音抽认卡系统
//!
//! 启动流程: 配置 -> 日志 -> 存储 -> HTTP 服务器（优雅关闭）

use std::sync::Arc;

use vocard::config::{load_config, print_config};
use vocard::infrastructure::adapters::FileAudioStorage;
use vocard::infrastructure::http::{AppState, HttpServer, ServerConfig};
use vocard::infrastructure::persistence::json::JsonCardStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},vocard={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Vocard - 语音抽认卡系统");
    print_config(&config);

    // 初始化存储（目录与空文档在各自的构造里创建）
    let card_repo = Arc::new(JsonCardStore::new(&config.storage.data_file).await?);
    let audio_storage = Arc::new(FileAudioStorage::new(&config.storage.uploads_dir).await?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        allowed_origins: config.cors.allowed_origins.clone(),
        uploads_dir: config.storage.uploads_dir.clone(),
        max_body_bytes: config.storage.max_upload_size as usize,
    };
    let state = AppState::new(card_repo, audio_storage, config.server.public_base_url());

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
