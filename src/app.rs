//! 调用驱动
//!
//! 流程：读取密钥 → 生成 export 行 → 幂等追加到启动文件 → 导出到当前进程 → 启动应用

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::types::{ApiKey, AppendOutcome, ConfigLine};
use crate::utils::executor::CommandExecutor;
use crate::utils::{paths, shell_rc};
use serde::Serialize;

/// 运行一次完整调用，返回进程退出码
pub fn run(cli: Cli) -> Result<i32> {
    if cli.show_config {
        show_config(&Settings::resolve(&cli)?)?;
        return Ok(0);
    }

    // 用法检查先于配置加载和任何写操作
    let key = ApiKey::parse(cli.key.clone())?;
    let settings = Settings::resolve(&cli)?;
    persist_and_export(&settings, &key)?;

    if cli.no_launch {
        tracing::info!("--no-launch: 跳过启动");
        return Ok(0);
    }

    CommandExecutor::exec_with_env(
        &settings.launch,
        &[(settings.var_name.as_str(), key.as_str())],
    )
}

/// 写入启动文件并导出到当前进程环境
pub fn persist_and_export(settings: &Settings, key: &ApiKey) -> Result<AppendOutcome> {
    let line = ConfigLine::export(&settings.var_name, key);
    let outcome = shell_rc::append_line_unique(&settings.rc_file, line.as_str())?;

    // SAFETY: 单线程阶段，尚未启动任何子进程或后台线程
    unsafe {
        std::env::set_var(settings.var_name.as_str(), key.as_str());
    }
    tracing::debug!(var = %settings.var_name, "已导出到当前进程环境");

    Ok(outcome)
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    #[serde(flatten)]
    settings: &'a Settings,
    rc_file_exists: bool,
}

/// 打印解析后的配置（不含密钥）
fn show_config(settings: &Settings) -> Result<()> {
    let report = ConfigReport {
        settings,
        rc_file_exists: paths::file_exists(&settings.rc_file),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvGuard;
    use crate::types::{LaunchSpec, VarName};
    use serial_test::serial;
    use std::fs;

    fn settings_in(dir: &tempfile::TempDir, var: &str) -> Settings {
        Settings {
            var_name: VarName::parse(var).unwrap(),
            rc_file: dir.path().join(".bashrc"),
            launch: LaunchSpec::default(),
        }
    }

    #[test]
    #[serial]
    fn test_persist_and_export_sets_env() {
        let _guard = EnvGuard::new();
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "KEYLAUNCH_APP_TEST_KEY");
        let key = ApiKey::parse(Some("sk-abc".into())).unwrap();

        let outcome = persist_and_export(&settings, &key).unwrap();

        assert_eq!(outcome, AppendOutcome::Appended);
        assert_eq!(
            std::env::var("KEYLAUNCH_APP_TEST_KEY").as_deref(),
            Ok("sk-abc")
        );
        assert_eq!(
            fs::read_to_string(&settings.rc_file).unwrap(),
            "export KEYLAUNCH_APP_TEST_KEY=\"sk-abc\"\n"
        );
    }

    #[test]
    #[serial]
    fn test_persist_twice_is_idempotent() {
        let _guard = EnvGuard::new();
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "KEYLAUNCH_APP_TEST_KEY");
        let key = ApiKey::parse(Some("sk-abc".into())).unwrap();

        persist_and_export(&settings, &key).unwrap();
        let second = persist_and_export(&settings, &key).unwrap();

        assert_eq!(second, AppendOutcome::AlreadyPresent);
        assert_eq!(
            fs::read_to_string(&settings.rc_file).unwrap().lines().count(),
            1
        );
    }

    #[test]
    #[serial]
    fn test_run_without_key_leaves_file_untouched() {
        use clap::Parser;

        let guard = EnvGuard::new();
        let dir = tempfile::tempdir().unwrap();
        guard.set_var("HOME", dir.path().to_str().unwrap());
        let rc = dir.path().join(".bashrc");
        fs::write(&rc, "# keep\n").unwrap();

        let cli = Cli::try_parse_from(["keylaunch", "--no-launch"]).unwrap();
        let err = run(cli).unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(fs::read_to_string(&rc).unwrap(), "# keep\n");
    }
}
