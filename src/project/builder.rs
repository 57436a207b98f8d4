//! 脚手架编排
//!
//! 执行顺序：
//! 1. 创建项目根目录
//! 2. 查询并校验 go 版本
//! 3. `go mod init`
//! 4. `.gitignore`、`README.md`、`LICENSE`
//! 5. `library/`、`example/`、`docs/`、`images/`
//! 6. `<name>.go`、`<name>_test.go`
//!
//! 任一步失败立即返回，已创建的内容保留在磁盘上。

use std::path::{Path, PathBuf};

use colored::*;

use crate::config::BuilderConfig;
use crate::error::{BuildError, Stage};
use crate::project::FileMaker;
use crate::templates::{self, TemplateContext, TemplateFile};
use crate::toolchain::{GoVersion, Toolchain};
use crate::utils::CommandRunner;

pub const LIBRARY: &str = "library";
pub const EXAMPLE: &str = "example";
pub const DOCS: &str = "docs";
pub const IMAGES: &str = "images";

/// 固定的子目录集合，按创建顺序排列
pub const SUBDIRECTORIES: [&str; 4] = [LIBRARY, EXAMPLE, DOCS, IMAGES];

/// 成功运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub project_path: PathBuf,
    pub go_version: GoVersion,
    /// 按创建顺序记录的目录和文件（不含 go.mod）
    pub created: Vec<PathBuf>,
}

/// 编排器
pub struct Builder<'a, R: CommandRunner + ?Sized> {
    config: &'a BuilderConfig,
    file_maker: FileMaker,
    toolchain: Toolchain<'a, R>,
    verbose: bool,
}

impl<'a, R: CommandRunner + ?Sized> Builder<'a, R> {
    pub fn new(config: &'a BuilderConfig, runner: &'a R) -> Self {
        Self::with_file_maker(config, runner, FileMaker::new(config))
    }

    /// 固定模板变量，测试中用于锁定年份
    pub fn with_context(
        config: &'a BuilderConfig,
        runner: &'a R,
        context: TemplateContext,
    ) -> Self {
        Self::with_file_maker(config, runner, FileMaker::with_context(config, context))
    }

    fn with_file_maker(config: &'a BuilderConfig, runner: &'a R, file_maker: FileMaker) -> Self {
        Self {
            config,
            file_maker,
            toolchain: Toolchain::new(runner, config.go_bin.clone()),
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 执行完整流程
    pub fn run(mut self) -> Result<BuildReport, BuildError> {
        let mut created = Vec::new();

        // 根目录
        self.file_maker
            .make_root_directory()
            .map_err(|e| BuildError::new(Stage::RootPath, e))?;
        created.push(self.file_maker.project_path().to_path_buf());
        self.log_created(Stage::RootPath, self.file_maker.project_path());

        // go version + 校验
        let go_version = self
            .toolchain
            .fetch_version()
            .map_err(|e| BuildError::new(Stage::GoVersion, e))?;
        self.toolchain
            .validate()
            .map_err(|e| BuildError::new(Stage::GoValidate, e))?;
        self.log_step(&format!("go version {} satisfies go mod", go_version));

        // go mod init
        let module_path = self.config.module_path();
        self.toolchain
            .init_manifest(self.file_maker.project_path(), &module_path)
            .map_err(|e| BuildError::new(Stage::GoModInit, e))?;
        self.log_step(&format!("go mod init {}", module_path));

        // 文档类文件
        let root_stages = [Stage::GitIgnore, Stage::Readme, Stage::License];
        let root_files: Vec<_> = root_stages.into_iter().zip(templates::root_files()).collect();
        self.write_files(&root_files, &mut created)?;

        // 子目录
        for name in SUBDIRECTORIES {
            let stage = Stage::Subdirectory(name);
            let path = self
                .file_maker
                .make_subdirectory(name)
                .map_err(|e| BuildError::new(stage, e))?;
            self.log_created(stage, &path);
            created.push(path);
        }

        // Go 源文件
        let stub_stages = [Stage::GoFile, Stage::GoTestFile];
        let stub_files: Vec<_> = stub_stages
            .into_iter()
            .zip(templates::stub_files(&self.config.name))
            .collect();
        self.write_files(&stub_files, &mut created)?;

        Ok(BuildReport {
            project_path: self.file_maker.project_path().to_path_buf(),
            go_version,
            created,
        })
    }

    fn write_files(
        &self,
        files: &[(Stage, TemplateFile)],
        created: &mut Vec<PathBuf>,
    ) -> Result<(), BuildError> {
        let written = self
            .file_maker
            .materialize(files)
            .map_err(|(stage, e)| BuildError::new(stage, e))?;
        for ((stage, _), path) in files.iter().zip(written) {
            self.log_created(*stage, &path);
            created.push(path);
        }
        Ok(())
    }

    fn log_created(&self, stage: Stage, path: &Path) {
        if self.verbose {
            println!(
                "  {} {} {}",
                "✓".green(),
                format!("[{}]", stage).cyan(),
                path.display()
            );
        }
    }

    fn log_step(&self, message: &str) {
        if self.verbose {
            println!("  {} {}", "✓".green(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::utils::command::fake::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    fn config(temp: &TempDir) -> BuilderConfig {
        BuilderConfig::with_base("widget", "alice", temp.path())
            .unwrap()
            .with_go_bin("go")
    }

    fn ctx() -> TemplateContext {
        TemplateContext::new("widget", "alice", 2026)
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_end_to_end_with_fake_toolchain() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let runner = FakeRunner::with_version("go version go1.21.3 darwin/arm64");

        let report = Builder::with_context(&config, &runner, ctx()).run().unwrap();
        let root = temp.path().join("widget");

        assert_eq!(report.project_path, root);
        assert_eq!(report.go_version, GoVersion::new(21, 3));
        assert_eq!(report.created.len(), 10);
        assert_eq!(
            entries(&root),
            vec![
                ".gitignore",
                "LICENSE",
                "README.md",
                "docs",
                "example",
                "images",
                "library",
                "widget.go",
                "widget_test.go",
            ]
        );

        for dir in SUBDIRECTORIES {
            assert!(root.join(dir).is_dir());
        }
        assert_eq!(
            fs::read_to_string(root.join("widget.go")).unwrap(),
            "package main\n"
        );
        let readme = fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.starts_with("# widget\n"));
        assert!(readme.contains("alice/widget"));
        let license = fs::read_to_string(root.join("LICENSE")).unwrap();
        assert!(license.starts_with("Copyright (c) 2026 alice"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].args, vec!["mod", "init", "github.com/alice/widget"]);
        assert_eq!(calls[1].cwd.as_deref(), Some(root.as_path()));
    }

    #[test]
    fn test_parse_failure_halts_before_manifest() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let runner = FakeRunner::with_version("go version unknownformat");

        let err = Builder::with_context(&config, &runner, ctx())
            .run()
            .unwrap_err();

        assert_eq!(err.stage, Stage::GoVersion);
        assert!(matches!(err.source, ScaffoldError::Parse { .. }));
        assert_eq!(runner.calls().len(), 1);

        // 没有回滚，根目录保留
        let root = temp.path().join("widget");
        assert!(root.is_dir());
        assert!(entries(&root).is_empty());
    }

    #[test]
    fn test_old_toolchain_is_rejected() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let runner = FakeRunner::with_version("go version go1.10.8 linux/amd64");

        let err = Builder::with_context(&config, &runner, ctx())
            .run()
            .unwrap_err();

        assert_eq!(err.stage, Stage::GoValidate);
        assert!(matches!(
            err.source,
            ScaffoldError::VersionTooLow {
                found: 10,
                required: 11
            }
        ));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_existing_target_is_refused() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        fs::create_dir(temp.path().join("widget")).unwrap();
        fs::write(temp.path().join("widget").join("keep.txt"), "mine").unwrap();
        let runner = FakeRunner::with_version("go version go1.21.3 darwin/arm64");

        let err = Builder::with_context(&config, &runner, ctx())
            .run()
            .unwrap_err();

        assert_eq!(err.stage, Stage::RootPath);
        assert!(matches!(err.source, ScaffoldError::AlreadyExists(_)));
        assert!(runner.calls().is_empty());
        assert_eq!(entries(&temp.path().join("widget")), vec!["keep.txt"]);
    }

    #[test]
    fn test_mod_init_failure_is_labelled() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let runner = FakeRunner::new(vec![
            Ok("go version go1.21.3 darwin/arm64".to_string()),
            Err(ScaffoldError::Subprocess {
                command: "go mod init github.com/alice/widget".to_string(),
                code: Some(1),
                output: "go: go.mod already exists".to_string(),
            }),
        ]);

        let err = Builder::with_context(&config, &runner, ctx())
            .run()
            .unwrap_err();

        assert_eq!(err.stage, Stage::GoModInit);
        assert!(err.to_string().contains("[go mod init]"));
        assert!(!temp.path().join("widget").join("README.md").exists());
    }

    #[test]
    fn test_project_named_like_subdirectory() {
        let temp = TempDir::new().unwrap();
        let config = BuilderConfig::with_base("docs", "alice", temp.path()).unwrap();
        let runner = FakeRunner::with_version("go version go1.21.3 darwin/arm64");

        let ctx = TemplateContext::new("docs", "alice", 2026);
        let report = Builder::with_context(&config, &runner, ctx).run().unwrap();
        let root = temp.path().join("docs");
        assert!(report.created.contains(&root.join("docs.go")));
        assert!(root.join("docs").is_dir());
    }
}
