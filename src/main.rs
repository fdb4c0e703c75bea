use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use product_catalog::infrastructure::{config, logger::Logger};
use product_catalog::{build_app, AppState, InMemoryProductRepository, ProductService};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数可指定配置文件路径
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref()).context("加载配置失败")?;
    config.validate()?;

    Logger::init(&config.logging.level);

    let repository = Arc::new(InMemoryProductRepository::new());
    let state = AppState::new(ProductService::new(repository));
    let app = build_app(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {addr}"))?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("📖 可用的路由:");
    info!("   GET  /product/list        - 产品列表");
    info!("   GET  /product/create      - 创建表单");
    info!("   POST /product/create      - 提交创建");
    info!("   GET  /product/edit/:id    - 编辑表单");
    info!("   POST /product/edit        - 提交编辑");
    info!("   GET  /product/delete/:id  - 删除产品");
    info!("   GET  /health              - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到退出信号，正在关闭...");
    }
}
