//! 計算請求模型

use serde::{Deserialize, Serialize};

use crate::{validate_order_and_packs, PackError, Result};

/// JSON 可精確表示的最大整數（2^53 - 1）
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// 包裝計算請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// 訂購數量
    pub ordered_items: i64,

    /// 可用包裝尺寸
    #[serde(default)]
    pub box_sizes: Vec<i64>,
}

impl CalculateRequest {
    /// 創建新的計算請求
    pub fn new(ordered_items: i64, box_sizes: Vec<i64>) -> Self {
        Self {
            ordered_items,
            box_sizes,
        }
    }

    /// 從 JSON 解析請求
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| PackError::MalformedRequest(e.to_string()))
    }

    /// 驗證請求
    ///
    /// 先套用核心驗證規則，再檢查數值是否在 JSON 安全整數範圍內。
    pub fn validate(&self) -> Result<()> {
        validate_order_and_packs(self.ordered_items, &self.box_sizes)?;

        if self.ordered_items > MAX_SAFE_INTEGER {
            return Err(PackError::ValueOutOfRange(self.ordered_items));
        }

        if let Some(&size) = self.box_sizes.iter().find(|&&s| s > MAX_SAFE_INTEGER) {
            return Err(PackError::ValueOutOfRange(size));
        }

        Ok(())
    }
}
