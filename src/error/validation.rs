//! # 字段校验错误
//!
//! 标识违反约束的字段以及被违反的约束

use std::fmt;
use thiserror::Error;

/// 被违反的字段约束
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// 字符数上限
    MaxLength(usize),
    /// 字符数下限
    MinLength(usize),
    /// 闭区间 `[min, max]`
    Range { min: f64, max: f64 },
    /// 下限（含）
    Minimum(f64),
    /// 正则格式
    Pattern(&'static str),
    /// 枚举取值
    OneOf(&'static [&'static str]),
    /// 必须为 JSON 对象
    Object,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxLength(max) => write!(f, "长度不能超过 {max} 个字符"),
            Self::MinLength(min) => write!(f, "长度不能少于 {min} 个字符"),
            Self::Range { min, max } => write!(f, "取值必须在 [{min}, {max}] 之间"),
            Self::Minimum(min) => write!(f, "取值不能小于 {min}"),
            Self::Pattern(pattern) => write!(f, "格式不匹配 {pattern}"),
            Self::OneOf(values) => write!(f, "取值必须是 {} 之一", values.join(" / ")),
            Self::Object => write!(f, "必须是 JSON 对象"),
        }
    }
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Error)]
#[error("字段 `{field}` {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: &'static str, constraint: Constraint) -> Self {
        Self { field, constraint }
    }
}
