//! inv-catalog - 产品注册服务入口

use std::net::SocketAddr;

use inv_adapter_postgres::{PostgresConfig, create_pool};
use inv_catalog::{api, state::AppState};
use inv_config::AppConfig;
use inv_telemetry::{init_tracing, init_tracing_json};
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );

    // 创建连接池（惰性连接，数据库不可达时请求走 500 路径）
    let pg_config = PostgresConfig::new(config.database.url.expose_secret().as_str())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config)?;

    // 构建路由
    let state = AppState::new(pool);
    let app = api::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting catalog service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// 等待关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
