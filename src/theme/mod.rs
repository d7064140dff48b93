mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Violet,
    Coral,
    Mint,
    Sunset,
    Galaxy,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Violet => "Violet",
            Theme::Coral => "Coral",
            Theme::Mint => "Mint",
            Theme::Sunset => "Sunset",
            Theme::Galaxy => "Galaxy",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Violet,
            Theme::Coral,
            Theme::Mint,
            Theme::Sunset,
            Theme::Galaxy,
        ]
    }

    /// 从名称解析主题（忽略大小写，用于配置加载和命令行参数）
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
    }

    /// 在列表中的位置
    pub fn index(&self) -> usize {
        Theme::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// 下一个主题（循环）
    pub fn next(&self) -> Self {
        let themes = Theme::all();
        themes[(self.index() + 1) % themes.len()]
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（卡片、选中行）
    pub bg_secondary: Color,
    /// Logo 颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 渐变第二色（色板、强调）
    pub accent: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务文字
    pub completed: Color,
    /// 优先级 - low
    pub priority_low: Color,
    /// 优先级 - medium
    pub priority_medium: Color,
    /// 优先级 - high
    pub priority_high: Color,
    /// 危险操作（删除、清空）
    pub danger: Color,
    /// Tab 选中前景色
    pub tab_active_fg: Color,
    /// Tab 选中背景色
    pub tab_active_bg: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Violet => violet_colors(),
        Theme::Coral => coral_colors(),
        Theme::Mint => mint_colors(),
        Theme::Sunset => sunset_colors(),
        Theme::Galaxy => galaxy_colors(),
    }
}
