//! Go 命令路径解析
//!
//! # 搜索优先级
//!
//! 1. 环境变量 `GBUILDER_GO_BIN`（非空时直接使用）
//! 2. 系统 PATH 中的 `go`

use std::env;

/// 覆盖 go 可执行文件路径的环境变量
pub const GO_BIN_ENV: &str = "GBUILDER_GO_BIN";

/// 默认命令名，由系统 PATH 查找
pub const DEFAULT_GO_BIN: &str = "go";

/// 从当前进程环境解析 go 命令
pub fn resolve_go_bin() -> String {
    resolve_go_bin_from(env::var(GO_BIN_ENV).ok())
}

/// 根据给定的环境变量值解析 go 命令
pub fn resolve_go_bin_from(env_value: Option<String>) -> String {
    match env_value {
        Some(path) if !path.trim().is_empty() => path.trim().to_string(),
        _ => DEFAULT_GO_BIN.to_string(),
    }
}
