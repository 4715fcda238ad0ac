//! 包裝計算服務
//!
//! 在呼叫端組合計算器與快取：先查快取，未命中才計算，成功後寫回快取。
//! 計算器與快取彼此不知道對方的存在。

use pack_cache::{InMemoryCache, PackCache};
use pack_calc::{Calculator, PackCalculator};
use pack_core::{CalculateRequest, PackConfig, PackError, PackingResult, Result};

/// 包裝計算服務
#[derive(Debug, Clone)]
pub struct PackingService<C = PackCalculator, K = InMemoryCache> {
    calculator: C,
    cache: K,
}

impl PackingService {
    /// 依服務配置建立預設實作
    pub fn from_config(config: &PackConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            order_size_limit = ?config.order_size_limit,
            cache_capacity = config.cache.max_capacity,
            "建立包裝計算服務"
        );

        Ok(Self::new(
            PackCalculator::from_config(config),
            InMemoryCache::new(&config.cache),
        ))
    }
}

impl<C: Calculator, K: PackCache> PackingService<C, K> {
    /// 以指定的計算器與快取建立服務
    pub fn new(calculator: C, cache: K) -> Self {
        Self { calculator, cache }
    }

    /// 直接計算，不經過快取
    pub fn compute(&self, order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
        self.calculator.calculate(order, pack_sizes)
    }

    /// 帶快取的計算
    ///
    /// 命中時原樣回傳快取結果；未命中時計算，成功才寫入快取。錯誤不會被快取。
    pub fn cached_compute(&self, order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
        if let Some(result) = self.cache.get(order, pack_sizes) {
            return Ok(result);
        }

        let result = self.calculator.calculate(order, pack_sizes)?;
        self.cache.set(order, pack_sizes, result.clone());

        Ok(result)
    }

    /// 處理計算請求：驗證後進行帶快取的計算
    pub fn handle(&self, request: &CalculateRequest) -> Result<PackingResult> {
        if let Err(err) = request.validate() {
            tracing::warn!(error = %err, "請求驗證失敗");
            return Err(err);
        }

        self.cached_compute(request.ordered_items, &request.box_sizes)
            .map_err(|err| {
                tracing::error!(error = %err, "包裝計算失敗");
                err
            })
    }

    /// 處理 JSON 請求並回傳 JSON 結果
    pub fn handle_json(&self, body: &str) -> Result<String> {
        let request = CalculateRequest::from_json(body).map_err(|err| {
            tracing::warn!(error = %err, "請求解析失敗");
            err
        })?;
        let result = self.handle(&request)?;

        serde_json::to_string(&result).map_err(|e| PackError::Serialization(e.to_string()))
    }

    /// 獲取計算器引用
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// 獲取快取引用
    pub fn cache(&self) -> &K {
        &self.cache
    }
}
