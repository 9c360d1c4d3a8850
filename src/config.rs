//! 配置加载
//!
//! 优先级：命令行参数 > 环境变量 > 配置文件 > 内置默认值。
//! 环境变量由 clap 的 `env` 特性并入命令行参数，这里只需合并三层。

use crate::cli::Cli;
use crate::error::{KeyError, Result};
use crate::types::{LaunchSpec, VarName};
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件内容 (~/.keylaunch/config.toml)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub var_name: Option<String>,
    pub rc_file: Option<PathBuf>,
    pub launch: Option<LaunchSpec>,
}

impl FileConfig {
    /// 从文件加载配置
    ///
    /// `required = false` 时文件不存在返回默认配置。
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "配置文件不存在，使用默认值");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(KeyError::Config(format!(
                    "无法读取配置文件 {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|source| KeyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 解析后的运行配置
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub var_name: VarName,
    pub rc_file: PathBuf,
    pub launch: LaunchSpec,
}

impl Settings {
    /// 从命令行参数解析配置（会读取配置文件）
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(&paths::expand_tilde(path)?, true)?,
            None => FileConfig::load(&paths::default_config_path()?, false)?,
        };
        Self::merge(cli, file)
    }

    /// 合并命令行参数和配置文件
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let var_name = match cli.var_name.as_deref().or(file.var_name.as_deref()) {
            Some(name) => VarName::parse(name)?,
            None => VarName::default(),
        };

        let rc_file = match cli.rc_file.as_ref().or(file.rc_file.as_ref()) {
            Some(path) => paths::expand_tilde(path)?,
            None => paths::default_rc_file()?,
        };

        let launch = file.launch.unwrap_or_default();
        if launch.program.is_empty() {
            return Err(KeyError::Config("launch.program 不能为空".to_string()));
        }

        Ok(Self {
            var_name,
            rc_file,
            launch,
        })
    }
}
