//! 日志初始化 (tracing)
//!
//! 默认安静：只输出 warn 及以上；`--verbose` 切换到 debug。
//! 设置了 `RUST_LOG` 时以其为准。日志写到 stderr，不干扰被启动应用的 stdout。

use tracing_subscriber::EnvFilter;

/// 默认过滤级别
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// 初始化全局 subscriber，重复调用无副作用
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
