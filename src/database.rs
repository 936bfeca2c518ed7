//! # 数据库模块
//!
//! 数据库连接和迁移管理

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;
use crate::error::{Context, Result};

/// 初始化数据库连接
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    info!("正在连接数据库: {}", redact_url(&config.url));

    config.ensure_database_path()?;

    let db = Database::connect(config.connect_options())
        .await
        .context("数据库连接失败")?;

    info!("数据库连接成功");
    Ok(db)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    info!("开始运行数据库迁移...");

    match Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!("数据库迁移失败: {}", e);
            Err(e).context("数据库迁移失败")
        }
    }
}

/// 检查数据库状态，返回待应用的迁移数
pub async fn check_database_status(db: &DatabaseConnection) -> Result<usize> {
    info!("检查数据库状态...");

    let pending = Migrator::get_pending_migrations(db)
        .await
        .context("查询迁移状态失败")?;

    if pending.is_empty() {
        info!("所有迁移都已应用");
    } else {
        warn!("有 {} 个待应用的迁移", pending.len());
    }

    Ok(pending.len())
}

/// 日志中隐藏连接串里的口令
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
