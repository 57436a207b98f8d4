// gbuilder - Library Root
//
// Go 项目结构生成工具：目录、文档、许可证、go.mod 与源文件桩

pub mod config;
pub mod error;
pub mod project;
pub mod templates;
pub mod toolchain;
pub mod utils;

// 重新导出常用类型
pub use config::BuilderConfig;
pub use error::{BuildError, ScaffoldError, Stage};
pub use project::{BuildReport, Builder};
pub use utils::{CommandRunner, SystemRunner};
