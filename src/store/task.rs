use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// 任务 ID（单调递增，从不复用）
pub type TaskId = u64;

/// 任务优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// 循环到下一个优先级 (low → medium → high → low)
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(StoreError::InvalidPriority(s.to_string())),
        }
    }
}

/// 列表过滤模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Active => FilterMode::All,
            FilterMode::Completed => FilterMode::Active,
        }
    }

    /// 任务是否满足当前过滤条件
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!(
                "unknown filter '{}' (expected all, active or completed)",
                other
            )),
        }
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务 ID
    pub id: TaskId,
    /// 任务文本（已去除首尾空白，非空）
    pub text: String,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Local>,
    /// 优先级
    pub priority: Priority,
}

impl Task {
    /// 创建时间的显示格式 (HH:MM)
    pub fn created_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// 任务计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    /// 指定过滤模式下的数量
    pub fn for_filter(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}
