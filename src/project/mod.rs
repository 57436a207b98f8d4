//! 项目脚手架模块
//!
//! 提供目录/文件落盘和整体编排功能

pub mod builder;
pub mod file_maker;

// 重导出
pub use builder::{BuildReport, Builder, SUBDIRECTORIES};
pub use file_maker::FileMaker;
