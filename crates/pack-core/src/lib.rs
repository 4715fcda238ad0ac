//! # Pack Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod packing;
pub mod request;
pub mod validation;

// Re-export 主要類型
pub use config::{CacheConfig, PackConfig};
pub use packing::{Packing, PackingResult};
pub use request::{CalculateRequest, MAX_SAFE_INTEGER};
pub use validation::validate_order_and_packs;

/// 包裝計算錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("訂購數量必須大於零: {0}")]
    InvalidOrder(i64),

    #[error("至少需要提供一種包裝尺寸")]
    NoPackSizes,

    #[error("包裝尺寸必須大於零: {0}")]
    InvalidPackSize(i64),

    #[error("包裝尺寸重複: {0}")]
    DuplicatePackSize(i64),

    #[error("找不到可行的包裝方案（訂購數量 {order}）")]
    NoSolution { order: i64 },

    #[error("訂購數量 {order} 超過上限 {limit}")]
    OrderTooLarge { order: i64, limit: i64 },

    #[error("包裝尺寸 {size} 超過上限 {limit}")]
    PackSizeTooLarge { size: i64, limit: i64 },

    #[error("搜尋範圍溢位（訂購數量 {order}，最大包裝 {max_pack}）")]
    SearchSpaceTooLarge { order: i64, max_pack: i64 },

    #[error("數值超出 JSON 安全整數範圍: {0}")]
    ValueOutOfRange(i64),

    #[error("無效的請求: {0}")]
    MalformedRequest(String),

    #[error("快取未保留計算結果: {key}")]
    CacheAdmissionDeclined { key: String },

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl PackError {
    /// 是否為呼叫端輸入造成的錯誤
    ///
    /// 傳輸層據此決定回應類型（例如 400 與 500）。所有錯誤都不可重試。
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PackError::InvalidOrder(_)
                | PackError::NoPackSizes
                | PackError::InvalidPackSize(_)
                | PackError::DuplicatePackSize(_)
                | PackError::OrderTooLarge { .. }
                | PackError::PackSizeTooLarge { .. }
                | PackError::SearchSpaceTooLarge { .. }
                | PackError::ValueOutOfRange(_)
                | PackError::MalformedRequest(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(PackError::InvalidOrder(0).is_client_error());
        assert!(PackError::DuplicatePackSize(31).is_client_error());
        assert!(PackError::OrderTooLarge { order: 10, limit: 5 }.is_client_error());
        assert!(PackError::PackSizeTooLarge { size: 10, limit: 5 }.is_client_error());
        assert!(!PackError::NoSolution { order: 10 }.is_client_error());
        assert!(!PackError::Config("x".to_string()).is_client_error());
    }

    #[test]
    fn test_error_messages_carry_values() {
        assert!(PackError::InvalidPackSize(-3).to_string().contains("-3"));
        assert!(PackError::NoSolution { order: 42 }.to_string().contains("42"));
    }
}
