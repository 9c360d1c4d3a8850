//! shell 启动文件写入工具
//!
//! 只做追加：已有内容从不改写或重排。
//! 同一行已存在时不做任何修改（幂等）。
//!
//! 注意：没有文件锁，两个并发进程可能都判断该行不存在并各自追加一次。

use crate::error::{KeyError, Result};
use crate::types::AppendOutcome;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// 读取文件内容；文件不存在视为空
fn read_existing(path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(KeyError::rc_file(path, e)),
    }
}

/// 逐行精确比较，不做 trim；每行只去掉一个结尾的 `\r`
///
/// 空内容没有任何行；结尾换行之后的空段不算一行。
fn has_line(content: &[u8], line: &[u8]) -> bool {
    if content.is_empty() {
        return false;
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|b| *b == b'\n')
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .any(|l| l == line)
}

fn check_single_line(line: &str) -> Result<()> {
    if line.contains(['\n', '\r']) {
        return Err(KeyError::InvalidArgument("写入的内容必须是单行".to_string()));
    }
    Ok(())
}

/// 确保文件中恰好包含该行：不存在时追加，文件不存在时创建
///
/// 追加内容一次 `write_all` 写完。若原文件非空且不以换行结尾，
/// 先补一个换行，保证新内容独占一行。
pub fn append_line_unique(path: &Path, line: &str) -> Result<AppendOutcome> {
    check_single_line(line)?;

    let content = read_existing(path)?;
    if has_line(&content, line.as_bytes()) {
        tracing::info!(path = %path.display(), "启动文件已包含该行，未修改");
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let mut buf = String::with_capacity(line.len() + 2);
    if content.last().is_some_and(|b| *b != b'\n') {
        buf.push('\n');
    }
    buf.push_str(line);
    buf.push('\n');

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| KeyError::rc_file(path, e))?;
    file.write_all(buf.as_bytes())
        .map_err(|e| KeyError::rc_file(path, e))?;

    tracing::info!(path = %path.display(), "已追加到启动文件");
    Ok(AppendOutcome::Appended)
}
