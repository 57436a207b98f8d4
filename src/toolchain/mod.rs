//! Go 工具链交互
//!
//! 查询 `go version`、校验最低版本，并在目标目录中执行 `go mod init`。
//!
//! 状态流转：`Uninitialized → VersionFetched → Validated → ManifestInitialized`，
//! 任一步失败进入 `Failed`，之后的操作都会被拒绝。

pub mod resolver;
pub mod version;

pub use resolver::{resolve_go_bin, GO_BIN_ENV};
pub use version::{GoVersion, GO_MOD_VERSION};

use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::utils::CommandRunner;

/// 工具链所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainStage {
    Uninitialized,
    VersionFetched,
    Validated,
    ManifestInitialized,
    Failed,
}

impl ToolchainStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainStage::Uninitialized => "uninitialized",
            ToolchainStage::VersionFetched => "version-fetched",
            ToolchainStage::Validated => "validated",
            ToolchainStage::ManifestInitialized => "manifest-initialized",
            ToolchainStage::Failed => "failed",
        }
    }
}

/// Go 工具链
pub struct Toolchain<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    go_bin: String,
    version: Option<GoVersion>,
    stage: ToolchainStage,
}

impl<'a, R: CommandRunner + ?Sized> Toolchain<'a, R> {
    pub fn new(runner: &'a R, go_bin: impl Into<String>) -> Self {
        Self {
            runner,
            go_bin: go_bin.into(),
            version: None,
            stage: ToolchainStage::Uninitialized,
        }
    }

    pub fn stage(&self) -> ToolchainStage {
        self.stage
    }

    pub fn version(&self) -> Option<GoVersion> {
        self.version
    }

    /// 执行 `go version` 并解析
    pub fn fetch_version(&mut self) -> Result<GoVersion> {
        self.expect_stage("fetch version", ToolchainStage::Uninitialized)?;

        let parsed = self
            .runner
            .run(&self.go_bin, &["version"], None)
            .and_then(|out| GoVersion::parse(&out));

        let version = self.track(parsed, ToolchainStage::VersionFetched)?;
        self.version = Some(version);
        Ok(version)
    }

    /// 校验主版本号不低于 [`GO_MOD_VERSION`]
    pub fn validate(&mut self) -> Result<()> {
        self.expect_stage("validate", ToolchainStage::VersionFetched)?;

        let checked = match self.version {
            Some(version) => version.validate(),
            None => Err(ScaffoldError::OutOfOrder {
                operation: "validate",
                stage: self.stage.as_str(),
            }),
        };
        self.track(checked, ToolchainStage::Validated)
    }

    /// 在 `project_path` 下执行 `go mod init <module_path>`
    ///
    /// 工作目录直接交给子进程，而不是先单独执行一次 `cd`
    pub fn init_manifest(&mut self, project_path: &Path, module_path: &str) -> Result<()> {
        self.expect_stage("init manifest", ToolchainStage::Validated)?;

        let result = self
            .runner
            .run(&self.go_bin, &["mod", "init", module_path], Some(project_path))
            .map(|_| ());
        self.track(result, ToolchainStage::ManifestInitialized)
    }

    fn expect_stage(&self, operation: &'static str, expected: ToolchainStage) -> Result<()> {
        if self.stage != expected {
            return Err(ScaffoldError::OutOfOrder {
                operation,
                stage: self.stage.as_str(),
            });
        }
        Ok(())
    }

    fn track<T>(&mut self, result: Result<T>, next: ToolchainStage) -> Result<T> {
        self.stage = if result.is_ok() {
            next
        } else {
            ToolchainStage::Failed
        };
        result
    }
}
