pub mod config;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// 获取 ~/.taskflow/ 目录路径（找不到 home 目录时退回当前目录）
pub fn taskflow_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskflow")
}

/// 日志目录: ~/.taskflow/logs/
pub fn log_dir() -> PathBuf {
    taskflow_dir().join("logs")
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件（自动创建父目录）
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
