//! 文件系统工具
//!
//! 所有创建操作都带统一的权限位；Unix 以外的平台忽略权限位

use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// 创建单层目录，已存在时报错（不做幂等创建）
pub fn create_dir_exclusive(path: &Path, mode: u32) -> Result<()> {
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists(path.to_path_buf()));
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists(path.to_path_buf()),
        _ => ScaffoldError::io(path, e),
    })
}

/// 写入文件，存在则覆盖
///
/// 权限位仅在新建文件时生效，与 `ioutil.WriteFile` 一致
pub fn write_file(path: &Path, content: &str, mode: u32) -> Result<()> {
    use std::io::Write;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path).map_err(|e| ScaffoldError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(path, e))
}
