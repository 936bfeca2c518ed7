//! # 日志配置模块
//!
//! 基于 `tracing-subscriber` 的日志初始化，默认屏蔽数据库查询的详细日志

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 未设置 `RUST_LOG` 时使用的过滤规则
#[must_use]
pub fn default_filter(level: &str) -> String {
    format!("{level},voice_agent_hub=debug,sqlx::query=off,sea_orm::query=warn,sqlx=warn")
}

/// 初始化日志系统
///
/// 重复初始化时返回 `false`，不会 panic
pub fn init_logging(level: Option<&str>) -> bool {
    let level = level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok();

    if installed
        && env::var("RUST_LOG").is_ok_and(|v| {
            v.contains("sqlx::query=info") || v.contains("sqlx::query=debug")
        })
    {
        tracing::info!("SQLx database query logging enabled");
    }

    installed
}
