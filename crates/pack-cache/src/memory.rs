//! 記憶體內結果快取

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::notification::RemovalCause;
use moka::sync::Cache;
use pack_core::{CacheConfig, PackError, PackingResult};

use crate::{is_cacheable, CacheKey, PackCache};

/// 基於 moka 的記憶體內快取
///
/// 准入採 TinyLFU（頻率估計），每筆結果成本為 1，`max_capacity` 即總成本上限。
/// 新結果可能不被保留，已保留的結果也可能隨時被淘汰。複製後共用同一份儲存。
///
/// moka 對准入拒絕與容量淘汰一律回報 `RemovalCause::Size`，兩者無法區分，
/// 因此只記錄 debug 日誌並合併計數於 `size_removal_count`。
#[derive(Clone)]
pub struct InMemoryCache {
    inner: Cache<CacheKey, Arc<PackingResult>>,
    size_removals: Arc<AtomicU64>,
}

impl InMemoryCache {
    /// 依快取配置創建
    pub fn new(config: &CacheConfig) -> Self {
        let size_removals = Arc::new(AtomicU64::new(0));
        let listener_removals = Arc::clone(&size_removals);

        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .initial_capacity(config.initial_capacity)
            .weigher(|_key: &CacheKey, _value: &Arc<PackingResult>| -> u32 { 1 })
            .eviction_listener(
                move |key: Arc<CacheKey>, _value: Arc<PackingResult>, cause: RemovalCause| {
                    match cause {
                        RemovalCause::Size => {
                            listener_removals.fetch_add(1, Ordering::Relaxed);
                            let err = PackError::CacheAdmissionDeclined {
                                key: key.to_string(),
                            };
                            tracing::debug!(error = %err, "快取因容量限制拒絕或淘汰結果");
                        }
                        RemovalCause::Replaced => {
                            tracing::debug!(key = %key, "快取結果已覆寫");
                        }
                        cause => {
                            tracing::trace!(key = %key, ?cause, "快取結果已移除");
                        }
                    }
                },
            )
            .build();

        Self {
            inner,
            size_removals,
        }
    }

    /// 目前保留的結果數量（近似值，執行 `run_pending_tasks` 後為準確值）
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// 因容量限制移除的結果數量（准入拒絕與淘汰合計）
    pub fn size_removal_count(&self) -> u64 {
        self.size_removals.load(Ordering::Relaxed)
    }

    /// 清除所有結果
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// 立即執行准入與淘汰等待中的維護工作
    pub fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks();
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("entry_count", &self.entry_count())
            .field("size_removals", &self.size_removal_count())
            .finish()
    }
}

impl PackCache for InMemoryCache {
    fn get(&self, order: i64, pack_sizes: &[i64]) -> Option<PackingResult> {
        if !is_cacheable(order, pack_sizes) {
            return None;
        }

        let key = CacheKey::new(order, pack_sizes);
        match self.inner.get(&key) {
            Some(result) => {
                tracing::debug!(%key, "快取命中");
                Some(PackingResult::clone(&result))
            }
            None => {
                tracing::debug!(%key, "快取未命中");
                None
            }
        }
    }

    fn set(&self, order: i64, pack_sizes: &[i64], result: PackingResult) {
        if !is_cacheable(order, pack_sizes) {
            tracing::debug!(order, ?pack_sizes, "忽略無效輸入的快取寫入");
            return;
        }

        self.inner.insert(CacheKey::new(order, pack_sizes), Arc::new(result));
    }
}
