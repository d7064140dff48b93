//! 日志初始化
//!
//! TUI 占用了终端，所以日志只写入 ~/.taskflow/logs/ 下按天滚动的文件。
//! `TASKFLOW_LOG` 环境变量可覆盖过滤规则（EnvFilter 语法）。

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖日志过滤规则的环境变量
pub const LOG_ENV: &str = "TASKFLOW_LOG";

const LOG_FILE_PREFIX: &str = "taskflow.log";

/// 构建过滤器：优先环境变量，其次配置中的级别
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("taskflow={}", default_level)))
        .unwrap_or_else(|_| EnvFilter::new("taskflow=info"))
}

/// 初始化日志系统
///
/// 返回的 guard 需要在 main 中持有，drop 时会刷新缓冲区。
/// 日志目录无法创建时返回 `None`，程序照常运行。
pub fn init_logging(log_dir: &Path, default_level: &str) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {}: {}",
            log_dir.display(),
            e
        );
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    let result = tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {}", e);
        return None;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        // 只是确保函数不会 panic（非法级别退回 info）
        let _filter = build_filter("debug");
        let _fallback = build_filter("not a level!!");
    }
}
