//! TaskFlow 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! `StoreError` 只描述任务存储本身的错误；其余外围层（配置、终端 I/O）使用 `TaskflowError`。

use std::io;
use thiserror::Error;

use crate::store::TaskId;

/// 任务存储错误（均可恢复，由界面层以 Toast 形式展示）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 去除首尾空白后文本为空
    #[error("Task cannot be empty!")]
    EmptyText,

    /// 指定 id 的任务不存在
    #[error("Task #{0} not found")]
    NotFound(TaskId),

    /// 优先级不在 low / medium / high 之内
    #[error("Invalid priority: {0:?} (expected low, medium or high)")]
    InvalidPriority(String),
}

/// Store Result 类型别名
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// TaskFlow 错误类型
#[derive(Debug, Error)]
pub enum TaskflowError {
    /// I/O 错误（文件读写、终端操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 任务存储错误
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// TaskFlow Result 类型别名
pub type Result<T> = std::result::Result<T, TaskflowError>;

impl TaskflowError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::EmptyText.to_string(), "Task cannot be empty!");
        assert_eq!(StoreError::NotFound(7).to_string(), "Task #7 not found");
        assert!(StoreError::InvalidPriority("urgent".into())
            .to_string()
            .contains("\"urgent\""));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskflowError = io_err.into();
        assert!(matches!(err, TaskflowError::Io(_)));
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: TaskflowError = StoreError::NotFound(3).into();
        assert_eq!(err.to_string(), "Task #3 not found");
    }

    #[test]
    fn test_config_error() {
        let err = TaskflowError::config("already exists");
        assert_eq!(err.to_string(), "Config error: already exists");
    }
}
