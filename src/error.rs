//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("用法错误: {0}")]
    Usage(String),

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("启动文件访问失败 ({}): {source}", .path.display())]
    RcFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("配置文件解析失败 ({}): {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("命令未找到: {0}")]
    CommandNotFound(String),

    #[error("命令不可执行: {0}")]
    CommandNotExecutable(String),

    #[error("命令执行失败: {0}")]
    CommandExecutionFailed(String),
}

impl KeyError {
    /// 包装启动文件的 IO 错误，附带路径
    pub fn rc_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KeyError::RcFile {
            path: path.into(),
            source,
        }
    }

    /// 进程退出码，沿用 shell 的约定 (127 未找到, 126 不可执行)
    pub fn exit_code(&self) -> i32 {
        match self {
            KeyError::CommandNotFound(_) => 127,
            KeyError::CommandNotExecutable(_) => 126,
            _ => 1,
        }
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                KeyError::Usage(msg) => eprintln!("{}", msg),
                KeyError::RcFile { path, source } => {
                    eprintln!("无法写入启动文件 {}: {}", path.display(), source)
                }
                KeyError::CommandNotFound(cmd) => eprintln!("命令未找到: {}", cmd),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, KeyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        assert_eq!(KeyError::Usage("x".into()).exit_code(), 1);
        assert_eq!(KeyError::Config("x".into()).exit_code(), 1);
        assert_eq!(KeyError::CommandNotFound("x".into()).exit_code(), 127);
        assert_eq!(KeyError::CommandNotExecutable("x".into()).exit_code(), 126);
        assert_eq!(
            KeyError::rc_file("/tmp/x", io::Error::from(io::ErrorKind::PermissionDenied))
                .exit_code(),
            1
        );
    }

    #[test]
    fn test_rc_file_error_keeps_source() {
        let err = KeyError::rc_file(
            "/home/u/.bashrc",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/home/u/.bashrc"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }
}
