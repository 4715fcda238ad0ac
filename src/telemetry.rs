//! 日誌初始化

use tracing_subscriber::EnvFilter;

/// 安裝全域 tracing subscriber
///
/// `RUST_LOG` 存在時優先使用，否則採用 `default_filter`。
/// 已安裝過則不做任何事並回傳 `false`。
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
