//! Go 版本解析与校验

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// `go mod` 要求的最低主版本号
pub const GO_MOD_VERSION: u32 = 11;

/// 从 `go version` 输出解析出的版本
///
/// Go 的版本号形如 `go1.21.3`，这里的 major/minor 取的是 `1.` 之后的两段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoVersion {
    pub major: u32,
    pub minor: u32,
}

impl GoVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// 解析 `go version go1.21.3 darwin/arm64`
    ///
    /// 按空白切分取第三段，再按 `.` 切分取第二、三段
    pub fn parse(output: &str) -> Result<Self> {
        let parse_err = |reason: &str| ScaffoldError::Parse {
            output: output.trim().to_string(),
            reason: reason.to_string(),
        };

        let token = output
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| parse_err("missing version token"))?;

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() < 3 {
            return Err(parse_err("expected at least three dot-separated parts"));
        }

        let major = parts[1]
            .parse::<u32>()
            .map_err(|e| parse_err(&format!("major version {:?}: {}", parts[1], e)))?;
        let minor = parts[2]
            .parse::<u32>()
            .map_err(|e| parse_err(&format!("minor version {:?}: {}", parts[2], e)))?;

        Ok(Self { major, minor })
    }

    /// 主版本号低于 [`GO_MOD_VERSION`] 时报错
    pub fn validate(&self) -> Result<()> {
        if self.major < GO_MOD_VERSION {
            return Err(ScaffoldError::VersionTooLow {
                found: self.major,
                required: GO_MOD_VERSION,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go1.{}.{}", self.major, self.minor)
    }
}
