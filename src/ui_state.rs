//! 与任务无关的界面状态：主题与配色、Toast、主题选择器、点击区域和双击检测。

use std::time::{Duration, Instant};

use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 双击判定间隔
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Toast 类型（决定图标和边框颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 打开选择器前的主题（取消时恢复）
    pub theme_before_selector: Theme,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
    /// 上次点击的时间和位置（双击检测）
    last_click: Option<(Instant, (u16, u16))>,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: theme.index(),
            theme_before_selector: theme,
            click_areas: ClickAreas::default(),
            last_click: None,
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        self.toast = Some(Toast::new(message, kind, duration));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 更新主题（同时刷新颜色方案）
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }

    /// 记录点击事件
    pub fn record_click(&mut self, pos: (u16, u16)) {
        self.last_click = Some((Instant::now(), pos));
    }

    /// 检查是否为双击（300ms 内，位置相同）
    pub fn is_double_click(&self, pos: (u16, u16)) -> bool {
        matches!(
            self.last_click,
            Some((at, last)) if last == pos && at.elapsed() < DOUBLE_CLICK_WINDOW
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
