//! # 字段校验规则
//!
//! 长度、数值区间、格式、JSON 对象等基础校验函数，所有比较均为闭区间

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Constraint, ValidationError};

/// 邮箱格式（local@domain）
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// 字段校验结果
pub type Check = Result<(), ValidationError>;

/// 字符数上限
pub fn max_len(field: &'static str, value: &str, max: usize) -> Check {
    if value.chars().count() > max {
        return Err(ValidationError::new(field, Constraint::MaxLength(max)));
    }
    Ok(())
}

/// 字符数闭区间
pub fn len_between(field: &'static str, value: &str, min: usize, max: usize) -> Check {
    if value.chars().count() < min {
        return Err(ValidationError::new(field, Constraint::MinLength(min)));
    }
    max_len(field, value, max)
}

/// 数值闭区间，NaN 视为越界
pub fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Check {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, Constraint::Range { min, max }))
    }
}

/// 数值下限（含）
pub fn at_least(field: &'static str, value: f64, min: f64) -> Check {
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::new(field, Constraint::Minimum(min)))
    }
}

/// 邮箱格式，同时限制 255 个字符
pub fn email(field: &'static str, value: &str) -> Check {
    max_len(field, value, super::limits::EMAIL_MAX)?;
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, Constraint::Pattern(EMAIL_PATTERN)))
    }
}

/// 任意键值配置必须是 JSON 对象
pub fn json_object(field: &'static str, value: &Value) -> Check {
    if value.is_object() {
        Ok(())
    } else {
        Err(ValidationError::new(field, Constraint::Object))
    }
}

/// 仅在值存在时校验
pub fn optional<T>(value: Option<T>, check: impl FnOnce(T) -> Check) -> Check {
    value.map_or(Ok(()), check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last+tag@example-mail.com", true)]
    #[case("not-an-email", false)]
    #[case("missing@tld", false)]
    #[case("two@@signs.com", false)]
    #[case("", false)]
    fn test_email_pattern(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(email("email", input).is_ok(), valid, "input: {input}");
    }

    #[test]
    fn test_email_length_limit() {
        let long = format!("{}@example.com", "a".repeat(250));
        let err = email("email", &long).unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLength(255));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(max_len("name", &"语".repeat(100), 100).is_ok());
        assert!(max_len("name", &"语".repeat(101), 100).is_err());
    }

    #[test]
    fn test_len_between_reports_lower_bound() {
        let err = len_between("password", "short", 8, 100).unwrap_err();
        assert_eq!(err.field, "password");
        assert_eq!(err.constraint, Constraint::MinLength(8));
    }

    #[test]
    fn test_range_is_inclusive_and_rejects_nan() {
        assert!(in_range("voice_pitch", 0.1, 0.1, 2.0).is_ok());
        assert!(in_range("voice_pitch", 2.0, 0.1, 2.0).is_ok());
        assert!(in_range("voice_pitch", 2.5, 0.1, 2.0).is_err());
        assert!(in_range("voice_pitch", f64::NAN, 0.1, 2.0).is_err());
        assert!(at_least("processing_time", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_json_object() {
        assert!(json_object("config", &json!({})).is_ok());
        assert!(json_object("config", &json!([1, 2])).is_err());
        assert!(json_object("config", &json!(null)).is_err());
    }

    #[test]
    fn test_optional_skips_missing_values() {
        assert!(optional(None::<i32>, |v| at_least("limit", f64::from(v), 1.0)).is_ok());
        assert!(optional(Some(0), |v| at_least("limit", f64::from(v), 1.0)).is_err());
    }
}
