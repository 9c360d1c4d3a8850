//! 测试工具模块
//!
//! 修改进程环境的测试需配合 `#[serial]` 使用

use std::collections::HashMap;
use std::env;

/// 环境变量守卫 - 释放时恢复整个进程环境
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            original_vars: env::vars().collect(),
        }
    }

    pub fn set_var(&self, key: &str, value: &str) {
        // SAFETY: 调用方通过 #[serial] 保证没有并发读写环境
        unsafe {
            env::set_var(key, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, _) in env::vars() {
            if !self.original_vars.contains_key(&key) {
                // SAFETY: 同上
                unsafe { env::remove_var(&key) };
            }
        }
        for (key, value) in &self.original_vars {
            if env::var(key).as_ref() != Ok(value) {
                self.set_var(key, value);
            }
        }
    }
}
