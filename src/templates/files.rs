//! 模板文件嵌入
//!
//! 嵌入项目脚手架所需的模板文件，渲染时替换 `{{project}}`、`{{author}}`、`{{year}}`

use rust_embed::RustEmbed;

use crate::error::{Result, ScaffoldError};

pub const GITIGNORE_TEMPLATE: &str = "gitignore";
pub const README_TEMPLATE: &str = "README.md";
pub const LICENSE_TEMPLATE: &str = "LICENSE";
pub const STUB_TEMPLATE: &str = "stub.go";

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 获取指定模板文件
    pub fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename).ok_or_else(|| {
            ScaffoldError::InvalidInput(format!("template '{}' not found", filename))
        })?;

        let content = std::str::from_utf8(file.data.as_ref()).map_err(|e| {
            ScaffoldError::InvalidInput(format!("failed to decode template '{}': {}", filename, e))
        })?;

        Ok(content.to_string())
    }

    /// 列出所有可用的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter().map(|path| path.as_ref().to_string()).collect()
    }
}

/// 渲染所需的变量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub project: String,
    pub author: String,
    pub year: i32,
}

impl TemplateContext {
    pub fn new(project: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            project: project.into(),
            author: author.into(),
            year,
        }
    }

    /// 以当前本地年份构造
    pub fn current_year(project: impl Into<String>, author: impl Into<String>) -> Self {
        use chrono::Datelike;
        Self::new(project, author, chrono::Local::now().year())
    }
}

/// 渲染模板
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let raw = TemplateAssets::get_file(template)?;
    Ok(substitute(&raw, ctx))
}

/// 单遍替换占位符，已写入的值不会再被扫描；未知占位符原样保留
pub fn substitute(raw: &str, ctx: &TemplateContext) -> String {
    let year = ctx.year.to_string();
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let value = match &after[..end] {
            "project" => Some(ctx.project.as_str()),
            "author" => Some(ctx.author.as_str()),
            "year" => Some(year.as_str()),
            _ => None,
        };

        match value {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn gitignore(ctx: &TemplateContext) -> Result<String> {
    render(GITIGNORE_TEMPLATE, ctx)
}

pub fn readme(ctx: &TemplateContext) -> Result<String> {
    render(README_TEMPLATE, ctx)
}

pub fn license(ctx: &TemplateContext) -> Result<String> {
    render(LICENSE_TEMPLATE, ctx)
}

/// 只有一行 package 声明
pub fn stub_source(ctx: &TemplateContext) -> Result<String> {
    render(STUB_TEMPLATE, ctx)
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
