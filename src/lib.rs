//! # Voice Agent Hub
//!
//! 语音智能体平台的数据模型、校验与持久化层

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod schema;
pub mod security;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{HubError, Result};
pub use schema::Validate;
pub use store::Stores;
