//! keylaunch - 保存 API 密钥并启动应用
//!
//! 把 `export VAR="KEY"` 幂等地追加到 shell 启动文件，
//! 导出到当前进程环境，然后启动目标应用并透传退出码。

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use error::{KeyError, Result};
pub use types::{ApiKey, AppendOutcome, ConfigLine, LaunchSpec, VarName};
