//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use crate::error::{KeyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// 默认变量名
pub const DEFAULT_VAR_NAME: &str = "DEEPSEEK_API_KEY";

static VAR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("静态正则"));

/// 调用方提供的 API 密钥，不解析内部结构
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 缺失或为空时返回用法错误；含换行符时无法写成单行
    pub fn parse(raw: Option<String>) -> Result<Self> {
        let raw = raw.unwrap_or_default();
        if raw.is_empty() {
            return Err(KeyError::Usage(usage_message()));
        }
        if raw.contains(['\n', '\r']) {
            return Err(KeyError::Usage("密钥不能包含换行符".to_string()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 用法提示
pub fn usage_message() -> String {
    format!(
        "用法: {} <API_KEY>\n提示: 使用 --help 查看全部选项",
        env!("CARGO_PKG_NAME")
    )
}

/// 环境变量名，必须是合法的 shell 标识符
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VarName(String);

impl VarName {
    pub fn parse(name: &str) -> Result<Self> {
        if !VAR_NAME_RE.is_match(name) {
            return Err(KeyError::Config(format!("无效的变量名: {:?}", name)));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VarName {
    fn default() -> Self {
        Self(DEFAULT_VAR_NAME.to_string())
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 写入启动文件的那一行：`export VAR="KEY"`
///
/// 密钥按原样插入，不做转义。
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigLine(String);

impl ConfigLine {
    pub fn export(var: &VarName, key: &ApiKey) -> Self {
        Self(format!("export {}=\"{}\"", var, key.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConfigLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfigLine(***)")
    }
}

/// 要启动的外部命令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self {
            program: "streamlit".to_string(),
            args: vec!["run".to_string(), "infosynapse.py".to_string()],
        }
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// 追加结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
}
