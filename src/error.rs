//! 错误类型定义
//!
//! 脚手架流程中每一类失败对应一个变体，编排器再用 [`BuildError`] 标注失败阶段

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 脚手架错误
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// 外部命令无法启动或以非零状态退出
    #[error("command `{command}` failed{}: {output}", exit_code_suffix(.code))]
    Subprocess {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// 版本输出不符合 `go version go1.<MAJOR>.<MINOR> <platform>` 形式
    #[error("unexpected toolchain version output {output:?}: {reason}")]
    Parse { output: String, reason: String },

    #[error("go mod requires major version at least {required}, found {found}")]
    VersionTooLow { found: u32, required: u32 },

    #[error("path already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 工具链状态机被乱序调用
    #[error("cannot {operation} while toolchain is {stage}")]
    OutOfOrder {
        operation: &'static str,
        stage: &'static str,
    },
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

// ═══════════════════════════════════════════════════════════════════
// 阶段标注
// ═══════════════════════════════════════════════════════════════════

/// 编排器的执行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RootPath,
    GoVersion,
    GoValidate,
    GoModInit,
    GitIgnore,
    Readme,
    License,
    Subdirectory(&'static str),
    GoFile,
    GoTestFile,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::RootPath => write!(f, "mkRootPath"),
            Stage::GoVersion => write!(f, "go version"),
            Stage::GoValidate => write!(f, "go validate"),
            Stage::GoModInit => write!(f, "go mod init"),
            Stage::GitIgnore => write!(f, "gitignore"),
            Stage::Readme => write!(f, "README"),
            Stage::License => write!(f, "license"),
            Stage::Subdirectory(name) => write!(f, "mkPath {}", name),
            Stage::GoFile => write!(f, "goFile"),
            Stage::GoTestFile => write!(f, "goTestFile"),
        }
    }
}

/// 带阶段标签的失败
///
/// Display 只包含阶段，底层原因通过 `source()` 链获取
#[derive(Debug, Error)]
#[error("gbuilder run failed on [{stage}]")]
pub struct BuildError {
    pub stage: Stage,
    #[source]
    pub source: ScaffoldError,
}

impl BuildError {
    pub fn new(stage: Stage, source: ScaffoldError) -> Self {
        Self { stage, source }
    }
}
