//! # Voice Agent Hub 主程序
//!
//! 加载配置、初始化日志、连接数据库并应用迁移

use clap::Parser;
use tracing::info;
use voice_agent_hub::{
    Result,
    config::{self, AppConfig},
    database, logging,
};

#[derive(Debug, Parser)]
#[command(name = "voice-agent-hub", version, about = "语音智能体平台数据库引导")]
struct Args {
    /// 配置文件路径，缺省时按 RUST_ENV 选择 config/config.{env}.toml
    #[arg(short, long)]
    config: Option<String>,

    /// 覆盖配置中的日志级别
    #[arg(long)]
    log_level: Option<String>,

    /// 只检查迁移状态，不执行迁移
    #[arg(long)]
    check_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config: AppConfig = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init_logging(Some(level));

    let db = database::init_database(&config.database).await?;

    if !args.check_only {
        database::run_migrations(&db).await?;
    }

    let pending = database::check_database_status(&db).await?;
    info!(pending, "数据库就绪");

    Ok(())
}
