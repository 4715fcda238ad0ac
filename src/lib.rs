//! # Order Packs
//!
//! 訂單包裝計算：在固定的包裝尺寸目錄下，求出貨件數最少、其次箱數最少的組合，
//! 並以結果快取加速重複查詢。
//!
//! ```
//! use order_packs::{PackConfig, PackingService};
//!
//! let service = PackingService::from_config(&PackConfig::default()).unwrap();
//! let result = service.cached_compute(251, &[250, 500, 1000, 2000, 5000]).unwrap();
//! assert_eq!(result.quantity_of(500), 1);
//! ```

pub mod service;
pub mod telemetry;

pub use pack_cache::{CacheKey, InMemoryCache, PackCache};
pub use pack_calc::{calculate_packing, Calculator, PackCalculator};
pub use pack_core::{
    CacheConfig, CalculateRequest, PackConfig, PackError, Packing, PackingResult, Result,
};
pub use service::PackingService;
