//! CLI 参数定义

use clap::Parser;
use std::path::PathBuf;

/// keylaunch - 保存 API 密钥并启动应用
#[derive(Parser, Debug)]
#[command(
    name = "keylaunch",
    version,
    about = "保存 API 密钥到 shell 启动文件并启动应用",
    long_about = "将 API 密钥以 export 行的形式幂等写入 shell 启动文件，导出到当前环境，然后启动应用并透传其退出码"
)]
pub struct Cli {
    /// API 密钥
    pub key: Option<String>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 目标 shell 启动文件 (默认 ~/.bashrc)
    #[arg(long, env = "KEYLAUNCH_RC_FILE", value_name = "PATH")]
    pub rc_file: Option<PathBuf>,

    /// 环境变量名 (默认 DEEPSEEK_API_KEY)
    #[arg(long, env = "KEYLAUNCH_VAR_NAME", value_name = "NAME")]
    pub var_name: Option<String>,

    /// 配置文件路径 (默认 ~/.keylaunch/config.toml)
    #[arg(long, env = "KEYLAUNCH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 只写入并导出，不启动应用
    #[arg(long)]
    pub no_launch: bool,

    /// 以 JSON 打印解析后的配置并退出
    #[arg(long, conflicts_with = "no_launch")]
    pub show_config: bool,
}
