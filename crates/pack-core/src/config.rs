//! 服務配置模型

use serde::{Deserialize, Serialize};

use crate::{PackError, Result};

/// 預設訂購數量上限
pub const DEFAULT_ORDER_SIZE_LIMIT: i64 = 1_000_000;

/// 預設快取容量（單位成本總和）
pub const DEFAULT_CACHE_CAPACITY: u64 = 100_000;

/// 包裝計算服務配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// 訂購數量上限
    ///
    /// 動態規劃表大小與訂購數量成正比，此上限限制單次計算的記憶體用量。
    /// `None` 表示不限制。
    pub order_size_limit: Option<i64>,

    /// 結果快取配置
    pub cache: CacheConfig,
}

impl PackConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            order_size_limit: Some(DEFAULT_ORDER_SIZE_LIMIT),
            cache: CacheConfig::default(),
        }
    }

    /// 從 JSON 載入配置，未提供的欄位使用預設值
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| PackError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置訂購數量上限
    pub fn with_order_size_limit(mut self, limit: i64) -> Self {
        self.order_size_limit = Some(limit);
        self
    }

    /// 建構器模式：取消訂購數量上限
    pub fn without_order_size_limit(mut self) -> Self {
        self.order_size_limit = None;
        self
    }

    /// 建構器模式：設置快取配置
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.order_size_limit {
            if limit <= 0 {
                return Err(PackError::Config(format!(
                    "order_size_limit 必須大於零: {limit}"
                )));
            }
        }

        self.cache.validate()
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 結果快取配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 最大總成本（每筆結果成本為 1）
    pub max_capacity: u64,

    /// 初始容量
    pub initial_capacity: usize,
}

impl CacheConfig {
    /// 創建指定容量的快取配置
    pub fn new(max_capacity: u64) -> Self {
        Self {
            max_capacity,
            initial_capacity: 0,
        }
    }

    /// 建構器模式：設置初始容量
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 {
            return Err(PackError::Config("cache.max_capacity 必須大於零".to_string()));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();

        assert_eq!(config.order_size_limit, Some(DEFAULT_ORDER_SIZE_LIMIT));
        assert_eq!(config.cache.max_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PackConfig::new()
            .with_order_size_limit(500)
            .with_cache(CacheConfig::new(16).with_initial_capacity(4));

        assert_eq!(config.order_size_limit, Some(500));
        assert_eq!(config.cache.max_capacity, 16);
        assert_eq!(config.cache.initial_capacity, 4);

        let config = config.without_order_size_limit();
        assert_eq!(config.order_size_limit, None);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PackConfig::from_json(r#"{"cache": {"max_capacity": 64}}"#).unwrap();

        // 未提供的欄位使用預設值
        assert_eq!(config.order_size_limit, Some(DEFAULT_ORDER_SIZE_LIMIT));
        assert_eq!(config.cache.max_capacity, 64);
        assert_eq!(config.cache.initial_capacity, 0);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            PackConfig::from_json(r#"{"order_size_limit": 0}"#),
            Err(PackError::Config(_))
        ));
        assert!(matches!(
            PackConfig::from_json(r#"{"cache": {"max_capacity": 0}}"#),
            Err(PackError::Config(_))
        ));
        assert!(matches!(
            PackConfig::from_json("not json"),
            Err(PackError::Config(_))
        ));
    }

    #[test]
    fn test_null_limit_disables_ceiling() {
        let config = PackConfig::from_json(r#"{"order_size_limit": null}"#).unwrap();
        assert_eq!(config.order_size_limit, None);
    }
}
