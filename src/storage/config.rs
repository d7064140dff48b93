//! 启动配置
//!
//! 只保存用户偏好（主题、默认过滤、日志级别），任务本身从不落盘。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{load_toml, save_toml, taskflow_dir};
use crate::error::{Result, TaskflowError};
use crate::store::FilterMode;
use crate::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Theme::default().label().to_string(),
        }
    }
}

/// 列表视图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    /// 启动时的过滤模式
    #[serde(default)]
    pub filter: FilterMode,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// 默认日志级别（可被 TASKFLOW_LOG 覆盖）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// 配置中的主题；名称无法识别时退回默认主题
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme.name).unwrap_or_else(|| {
            tracing::warn!(name = %self.theme.name, "unknown theme in config, using default");
            Theme::default()
        })
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    taskflow_dir().join("config.toml")
}

/// 加载配置（不存在或无法解析时返回默认值）
///
/// 解析失败的错误随默认值一并返回，由调用方在日志初始化后记录。
pub fn load_config() -> (Config, Option<TaskflowError>) {
    load_config_or_default(&config_path())
}

/// 从指定路径加载配置，失败时退回默认值并带回错误
pub fn load_config_or_default(path: &Path) -> (Config, Option<TaskflowError>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_config_from(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// 从指定路径加载配置
pub fn load_config_from(path: &Path) -> Result<Config> {
    load_toml(path)
}

/// 写入默认配置；文件已存在且未指定 `force` 时拒绝覆盖
pub fn init_config(path: &Path, force: bool) -> Result<Config> {
    if path.exists() && !force {
        return Err(TaskflowError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let config = Config::default();
    save_config_to(path, &config)?;
    Ok(config)
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            theme: ThemeConfig {
                name: "Mint".to_string(),
            },
            view: ViewConfig {
                filter: FilterMode::Active,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        };
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme(), Theme::Mint);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[view]\nfilter = \"completed\"\n").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.view.filter, FilterMode::Completed);
        assert_eq!(loaded.theme, ThemeConfig::default());
        assert_eq!(loaded.log.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[view\nfilter = ").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(TaskflowError::TomlParse(_))
        ));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let (config, error) = load_config_or_default(&dir.path().join("config.toml"));

        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_broken_file_falls_back_with_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme\nname = 42").unwrap();

        let (config, error) = load_config_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(TaskflowError::TomlParse(_))));
    }

    #[test]
    fn test_valid_file_loads_without_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"Sunset\"\n").unwrap();

        let (config, error) = load_config_or_default(&path);
        assert_eq!(config.theme(), Theme::Sunset);
        assert!(error.is_none());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config {
            theme: ThemeConfig {
                name: "Solarized".to_string(),
            },
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::Violet);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"Coral\"\n").unwrap();

        assert!(matches!(
            init_config(&path, false),
            Err(TaskflowError::Config(_))
        ));
        assert_eq!(load_config_from(&path).unwrap().theme(), Theme::Coral);

        init_config(&path, true).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Config::default());
    }
}
