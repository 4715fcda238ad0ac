//! # Pack Cache
//!
//! 包裝計算結果快取
//!
//! 快取只是效能最佳化：`get` 在 `set` 之後仍可能回傳 `None`，
//! 呼叫端不可依賴其存在性。

pub mod key;
pub mod memory;

use std::sync::Arc;

use pack_core::PackingResult;

// Re-export 主要類型
pub use key::CacheKey;
pub use memory::InMemoryCache;

/// 結果快取介面
///
/// 實作必須可在多執行緒間並行呼叫，且讀取不會看到寫入中途的結果。
pub trait PackCache: Send + Sync {
    /// 查詢結果；無效查詢一律回傳 `None`
    fn get(&self, order: i64, pack_sizes: &[i64]) -> Option<PackingResult>;

    /// 儲存結果；可能不被保留，不視為錯誤
    fn set(&self, order: i64, pack_sizes: &[i64], result: PackingResult);
}

impl<T: PackCache + ?Sized> PackCache for Arc<T> {
    fn get(&self, order: i64, pack_sizes: &[i64]) -> Option<PackingResult> {
        (**self).get(order, pack_sizes)
    }

    fn set(&self, order: i64, pack_sizes: &[i64], result: PackingResult) {
        (**self).set(order, pack_sizes, result)
    }
}

/// 查詢是否可進入快取（訂購數量為正且尺寸非空）
pub fn is_cacheable(order: i64, pack_sizes: &[i64]) -> bool {
    order > 0 && !pack_sizes.is_empty()
}
