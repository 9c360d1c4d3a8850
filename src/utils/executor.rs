//! 命令执行器
//!
//! 启动子进程并等待，退出码透传。
//! 子进程继承父进程的 stdin/stdout/stderr 和环境变量。

use crate::error::{KeyError, Result};
use crate::types::LaunchSpec;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

pub struct CommandExecutor;

impl CommandExecutor {
    /// 执行命令并注入环境变量
    ///
    /// # 参数
    /// - `spec`: 命令和参数，如 `streamlit run infosynapse.py`
    /// - `env_vars`: 额外注入的环境变量（覆盖继承值）
    ///
    /// # 返回
    /// 子进程的退出码
    pub fn exec_with_env(spec: &LaunchSpec, env_vars: &[(&str, &str)]) -> Result<i32> {
        if spec.program.is_empty() {
            return Err(KeyError::CommandExecutionFailed("命令不能为空".to_string()));
        }

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %spec, "启动子进程");

        let status = cmd.status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => KeyError::CommandNotFound(format!(
                "{}: {} (请确保命令在 PATH 中或使用完整路径)",
                spec.program, e
            )),
            ErrorKind::PermissionDenied => {
                KeyError::CommandNotExecutable(format!("{}: {}", spec.program, e))
            }
            _ => KeyError::CommandExecutionFailed(format!("{}: {}", spec.program, e)),
        })?;

        let code = exit_code_of(status);
        tracing::debug!(code, "子进程已退出");
        Ok(code)
    }
}

/// 子进程被信号终止时按 shell 约定返回 128 + 信号值
#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
