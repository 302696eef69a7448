//! 涨跌停分析后端服务
//!
//! 提供 A 股涨跌停识别、连板统计与开板风险预估的 RESTful API 服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use limit_board_backend::config::AppConfig;
use limit_board_backend::handlers;
use limit_board_backend::middleware::ApiKeyMiddleware;

/// 应用程序入口
///
/// 启动 HTTP 服务器，监听地址由配置决定（默认 0.0.0.0:8080）
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (config, notes) = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));
    for note in &notes {
        log::info!("{}", note);
    }

    if config.api.api_key.is_empty() {
        log::warn!("未设置 API Key，接口认证已关闭");
    }

    let bind_addr = config.bind_addr();
    let api_key = config.api.api_key.clone();
    let analysis = web::Data::new(config.analysis.clone());

    log::info!("启动涨跌停分析服务: {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(analysis.clone())
            .wrap(ApiKeyMiddleware::new(api_key.clone()))  // API Key 认证
            .wrap(Logger::default())  // 请求日志
            .configure(handlers::config)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_addr)?.run().await?;
    Ok(())
}
