//! 运行配置
//!
//! 启动时由命令行参数构造一次，之后以引用传给各个组件

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::toolchain::resolve_go_bin;

/// 默认权限位，对应 Go 的 `os.ModePerm`（实际权限受 umask 影响）
pub const DEFAULT_MODE: u32 = 0o777;

/// 一次脚手架运行的全部输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    pub name: String,
    pub author: String,
    /// 目标项目的绝对路径：`<base>/<name>`
    pub project_path: PathBuf,
    pub mode: u32,
    pub go_bin: String,
}

impl BuilderConfig {
    /// 以可执行文件所在目录（或 `base_dir`）为根构造配置
    pub fn new(name: &str, author: &str, base_dir: Option<&Path>) -> Result<Self> {
        let base = match base_dir {
            Some(dir) => absolutize(dir)?,
            None => invocation_dir()?,
        };
        Self::with_base(name, author, &base)
    }

    /// 以指定的绝对根目录构造配置
    pub fn with_base(name: &str, author: &str, base: &Path) -> Result<Self> {
        let name = validate_name(name)?;
        let author = validate_author(author)?;

        Ok(Self {
            project_path: base.join(&name),
            name,
            author,
            mode: DEFAULT_MODE,
            go_bin: resolve_go_bin(),
        })
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_go_bin(mut self, go_bin: impl Into<String>) -> Self {
        self.go_bin = go_bin.into();
        self
    }

    /// `go mod init` 使用的模块路径
    pub fn module_path(&self) -> String {
        format!("github.com/{}/{}", self.author, self.name)
    }
}

/// 非空且首尾不带空白，输入按原样保留
fn validate_identity(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.trim() != value {
        return Err(ScaffoldError::InvalidInput(format!(
            "{} {:?} must not have leading or trailing whitespace",
            field, value
        )));
    }
    Ok(())
}

fn validate_author(author: &str) -> Result<String> {
    validate_identity("author", author)?;
    Ok(author.to_string())
}

/// 项目名必须是单个路径段
fn validate_name(name: &str) -> Result<String> {
    validate_identity("project name", name)?;
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ScaffoldError::InvalidInput(format!(
            "project name {:?} must be a single directory name",
            name
        )));
    }
    Ok(name.to_string())
}

/// 调用路径 `argv[0]` 所在目录，不解析符号链接
///
/// 拿不到 `argv[0]` 时退回 `current_exe()`
fn invocation_dir() -> Result<PathBuf> {
    match env::args_os().next() {
        Some(arg0) => dir_of(Path::new(&arg0)),
        None => {
            let exe =
                env::current_exe().map_err(|e| ScaffoldError::io("<current executable>", e))?;
            dir_of(&exe)
        }
    }
}

/// 可执行路径的父目录；裸命令名（经 PATH 查找）对应当前目录
fn dir_of(program: &Path) -> Result<PathBuf> {
    match program.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => absolutize(dir),
        _ => absolutize(Path::new(".")),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;
    Ok(cwd.join(path))
}
