use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils;

/// 状态文件中的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    NotReady,
}

impl Status {
    /// 忽略首尾空白和大小写，只有 "ready" 被视为 Ready
    pub fn parse(content: &str) -> Self {
        if content.trim().to_lowercase() == "ready" { Self::Ready } else { Self::NotReady }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::NotReady => f.write_str("not ready"),
        }
    }
}

pub async fn read(path: &Path) -> Result<Status> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取状态文件 {}", path.display()))?;
    Ok(Status::parse(&content))
}

pub async fn write(path: &Path, status: Status) -> Result<()> {
    utils::write_atomic_async(path, &status.to_string()).await
}
