//! keylaunch 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 安静模式：默认无输出，成功静默
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use keylaunch::{app, cli::Cli, logging};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    logging::init(verbose);

    let code = match app::run(cli) {
        Ok(code) => code,
        Err(e) => {
            e.report(verbose);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
