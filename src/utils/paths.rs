//! 跨平台路径处理工具 (传统原则：常识性接口设计)

use crate::error::{KeyError, Result};
use std::path::{Path, PathBuf};

/// 获取用户主目录
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| KeyError::Config("无法找到用户主目录".to_string()))
}

/// 获取用户配置目录：~/.keylaunch
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".keylaunch"))
}

/// 默认配置文件：~/.keylaunch/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// 默认 shell 启动文件：~/.bashrc
pub fn default_rc_file() -> Result<PathBuf> {
    Ok(home_dir()?.join(".bashrc"))
}

/// 展开开头的 `~` 或 `~/`，其他形式原样返回
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
