//! 嵌入资源管理
//!
//! 模板以 `(相对路径, 内容生成函数)` 的声明式列表提供，由
//! [`crate::project::FileMaker::materialize`] 统一落盘

pub mod files;

pub use files::{TemplateAssets, TemplateContext};

use crate::error::Result;

pub const GIT_IGNORE: &str = ".gitignore";
pub const README: &str = "README.md";
pub const LICENSE: &str = "LICENSE";

/// 内容生成函数
pub type Generator = fn(&TemplateContext) -> Result<String>;

/// 一个待写入的模板文件
#[derive(Clone)]
pub struct TemplateFile {
    /// 相对项目根目录的路径
    pub path: String,
    pub generate: Generator,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, generate: Generator) -> Self {
        Self {
            path: path.into(),
            generate,
        }
    }
}

pub fn ignore_file() -> TemplateFile {
    TemplateFile::new(GIT_IGNORE, files::gitignore)
}

pub fn readme_file() -> TemplateFile {
    TemplateFile::new(README, files::readme)
}

pub fn license_file() -> TemplateFile {
    TemplateFile::new(LICENSE, files::license)
}

/// 项目根目录下的文档类文件，按写入顺序排列
pub fn root_files() -> Vec<TemplateFile> {
    vec![ignore_file(), readme_file(), license_file()]
}

/// `<name>.go` 与 `<name>_test.go`
pub fn stub_files(project: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::new(format!("{}.go", project), files::stub_source),
        TemplateFile::new(format!("{}_test.go", project), files::stub_source),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_files_order() {
        let paths: Vec<String> = root_files().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec![".gitignore", "README.md", "LICENSE"]);
    }

    #[test]
    fn test_stub_files() {
        let ctx = TemplateContext::new("widget", "alice", 2026);
        let stubs = stub_files("widget");
        assert_eq!(stubs[0].path, "widget.go");
        assert_eq!(stubs[1].path, "widget_test.go");
        for stub in stubs {
            assert_eq!((stub.generate)(&ctx).unwrap(), "package main\n");
        }
    }
}
