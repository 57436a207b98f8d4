//! 工具模块
//!
//! 提供子进程执行、文件系统等常用工具函数

pub mod command;
pub mod fs;

// 重导出
pub use command::{CommandRunner, SystemRunner};
pub use fs::*;
