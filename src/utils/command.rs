//! 外部命令执行
//!
//! 以 [`CommandRunner`] trait 暴露子进程能力，测试中可替换为假实现

use std::path::Path;
use std::process::Command;

use crate::error::{Result, ScaffoldError};

/// 执行外部命令的能力
pub trait CommandRunner {
    /// 执行命令并返回合并后的 stdout + stderr
    ///
    /// 进程无法启动或以非零状态退出时返回 [`ScaffoldError::Subprocess`]
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String>;
}

/// 真实子进程执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args);

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| ScaffoldError::Subprocess {
            command: command_line(program, args),
            code: None,
            output: e.to_string(),
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ScaffoldError::Subprocess {
                command: command_line(program, args),
                code: output.status.code(),
                output: combined.trim().to_string(),
            });
        }

        Ok(combined)
    }
}

/// 拼接用于诊断信息的命令行
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

// ═══════════════════════════════════════════════════════════════════
// 测试用假执行器
// ═══════════════════════════════════════════════════════════════════
