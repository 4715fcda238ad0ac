//! 包裝計算器

use std::sync::Arc;
use std::time::Instant;

use pack_core::{validate_order_and_packs, PackConfig, PackError, PackingResult, Result};

/// 包裝計算介面
pub trait Calculator: Send + Sync {
    /// 計算最佳包裝組合
    fn calculate(&self, order: i64, pack_sizes: &[i64]) -> Result<PackingResult>;
}

impl<T: Calculator + ?Sized> Calculator for Arc<T> {
    fn calculate(&self, order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
        (**self).calculate(order, pack_sizes)
    }
}

/// 計算最佳包裝組合（不套用訂購數量上限）
///
/// 純函數，無共享狀態，可任意並行呼叫。
pub fn calculate_packing(order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
    validate_order_and_packs(order, pack_sizes)?;
    crate::dp::search(order, pack_sizes)
}

/// 具訂購數量上限的包裝計算器
///
/// 上限同時套用在訂購數量與每個包裝尺寸，動態規劃表格最多 `2 * limit + 1` 格。
#[derive(Debug, Clone, Default)]
pub struct PackCalculator {
    /// 訂購數量上限
    order_size_limit: Option<i64>,
}

impl PackCalculator {
    /// 創建新的計算器
    pub fn new(order_size_limit: Option<i64>) -> Self {
        Self { order_size_limit }
    }

    /// 創建不限制訂購數量的計算器
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// 依服務配置創建計算器
    pub fn from_config(config: &PackConfig) -> Self {
        Self::new(config.order_size_limit)
    }

    /// 獲取訂購數量上限
    pub fn order_size_limit(&self) -> Option<i64> {
        self.order_size_limit
    }
}

impl Calculator for PackCalculator {
    fn calculate(&self, order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
        validate_order_and_packs(order, pack_sizes)?;

        if let Some(limit) = self.order_size_limit {
            if order > limit {
                return Err(PackError::OrderTooLarge { order, limit });
            }

            // 表格大小為 order + max_pack，尺寸也受同一上限約束
            if let Some(&size) = pack_sizes.iter().find(|&&size| size > limit) {
                return Err(PackError::PackSizeTooLarge { size, limit });
            }
        }

        tracing::debug!(order, pack_count = pack_sizes.len(), "開始包裝計算");
        let start_time = Instant::now();

        let result = match crate::dp::search(order, pack_sizes) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(order, ?pack_sizes, error = %err, "包裝計算失敗");
                return Err(err);
            }
        };

        tracing::debug!(
            order,
            shipped = result.total_items(),
            packs = result.total_packs(),
            elapsed = ?start_time.elapsed(),
            "包裝計算完成"
        );

        Ok(result)
    }
}
