//! # Pack Calculation Engine
//!
//! 最佳包裝組合計算引擎：出貨件數最少，其次箱數最少

pub mod calculator;
mod dp;

// Re-export 主要類型
pub use calculator::{calculate_packing, Calculator, PackCalculator};
