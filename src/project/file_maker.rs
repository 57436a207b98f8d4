//! 目录与模板文件落盘
//!
//! 目录创建会先检查是否已存在；文件写入直接覆盖

use std::path::{Path, PathBuf};

use crate::config::BuilderConfig;
use crate::error::{Result, ScaffoldError};
use crate::templates::{self, TemplateContext, TemplateFile};
use crate::utils::{create_dir_exclusive, write_file};

/// 负责在目标路径下创建目录和文件
#[derive(Debug, Clone)]
pub struct FileMaker {
    project_path: PathBuf,
    mode: u32,
    context: TemplateContext,
}

impl FileMaker {
    pub fn new(config: &BuilderConfig) -> Self {
        Self::with_context(
            config,
            TemplateContext::current_year(&config.name, &config.author),
        )
    }

    /// 使用固定的模板变量（例如指定年份）
    pub fn with_context(config: &BuilderConfig, context: TemplateContext) -> Self {
        Self {
            project_path: config.project_path.clone(),
            mode: config.mode,
            context,
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// 创建项目根目录，已存在时报 `AlreadyExists`
    pub fn make_root_directory(&self) -> Result<()> {
        create_dir_exclusive(&self.project_path, self.mode)
    }

    /// 创建 `<project>/<name>`，已存在时报 `AlreadyExists`
    pub fn make_subdirectory(&self, name: &str) -> Result<PathBuf> {
        let path = self.project_path.join(name);
        create_dir_exclusive(&path, self.mode)?;
        Ok(path)
    }

    pub fn write_ignore_file(&self) -> Result<PathBuf> {
        self.write_template(&templates::ignore_file())
    }

    pub fn write_readme(&self) -> Result<PathBuf> {
        self.write_template(&templates::readme_file())
    }

    pub fn write_license(&self) -> Result<PathBuf> {
        self.write_template(&templates::license_file())
    }

    /// 写入只含 package 声明的 Go 源文件
    pub fn write_stub_source_file(&self, filename: &str) -> Result<PathBuf> {
        self.write_template(&TemplateFile::new(filename, templates::files::stub_source))
    }

    /// 渲染并写入单个模板
    pub fn write_template(&self, file: &TemplateFile) -> Result<PathBuf> {
        let content = (file.generate)(&self.context)?;
        let path = self.project_path.join(&file.path);
        write_file(&path, &content, self.mode)?;
        Ok(path)
    }

    /// 依次写入一组带标签的模板，遇错即停并返回失败项的标签
    pub fn materialize<L: Copy>(
        &self,
        files: &[(L, TemplateFile)],
    ) -> std::result::Result<Vec<PathBuf>, (L, ScaffoldError)> {
        files
            .iter()
            .map(|(label, file)| self.write_template(file).map_err(|e| (*label, e)))
            .collect()
    }
}
