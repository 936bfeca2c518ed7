//! # 凭据处理
//!
//! 用户密码使用 bcrypt 单向哈希；API 密钥只保存 SHA-256 摘要与明文前缀。

use bcrypt::DEFAULT_COST;
use rand::{Rng, distributions::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// API 密钥明文前缀
pub const API_KEY_PREFIX: &str = "vak_";
/// 前缀之后的随机字符数
pub const API_KEY_RANDOM_LEN: usize = 40;
/// 展示用前缀长度
pub const API_KEY_PREVIEW_LEN: usize = 12;

/// 密码哈希算法
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// bcrypt 实现
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }
}

/// 使用默认 bcrypt 成本哈希密码
pub fn hash_password(password: &str) -> Result<String> {
    BcryptHasher::default().hash(password)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    BcryptHasher::default().verify(password, hash)
}

/// API 密钥摘要（十六进制 SHA-256）
#[must_use]
pub fn hash_api_key(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// 生成新的 API 密钥明文
#[must_use]
pub fn generate_api_key() -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..API_KEY_RANDOM_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect();
    format!("{API_KEY_PREFIX}{random}")
}

/// 明文的前 12 个字符，用于列表展示
#[must_use]
pub fn key_preview(plaintext: &str) -> String {
    plaintext.chars().take(API_KEY_PREVIEW_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_round_trip() {
        let hasher = BcryptHasher::with_cost(4);
        let hash = hasher.hash("correct horse").unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse", &hash).unwrap());
        assert!(!hasher.verify("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let err = BcryptHasher::with_cost(4)
            .verify("password", "not-a-hash")
            .unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_generated_key_shape() {
        let key = generate_api_key();
        assert!(key.starts_with(API_KEY_PREFIX));
        assert_eq!(key.len(), API_KEY_PREFIX.len() + API_KEY_RANDOM_LEN);
        assert!(key[API_KEY_PREFIX.len()..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(key, generate_api_key());
    }

    #[test]
    fn test_api_key_hash_is_stable_hex() {
        let hash = hash_api_key("vak_example");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_api_key("vak_example"));
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(
            hash_api_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_preview_takes_prefix() {
        assert_eq!(key_preview("vak_abcdefghijklmnop"), "vak_abcdefgh");
        assert_eq!(key_preview("short"), "short");
    }
}
