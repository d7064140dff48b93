use ratatui::layout::Rect;

use crate::store::FilterMode;
use crate::theme::Theme;

/// 弹窗按钮动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 过滤 Tab (区域, 过滤模式)
    pub filter_tabs: Vec<(Rect, FilterMode)>,
    /// 任务行 (区域, 过滤后索引)
    pub task_rows: Vec<(Rect, usize)>,
    /// 任务复选框 (区域, 过滤后索引)
    pub task_checkboxes: Vec<(Rect, usize)>,
    /// Header 主题色块 (区域, 主题)
    pub theme_swatches: Vec<(Rect, Theme)>,
    /// 输入框区域（点击聚焦）
    pub input_area: Option<Rect>,
    /// 任务列表区域（滚轮检测）
    pub task_list_area: Option<Rect>,
    /// 当前弹窗区域（点击外部关闭）
    pub dialog_area: Option<Rect>,
    /// 弹窗列表项 (区域, 索引)
    pub dialog_items: Vec<(Rect, usize)>,
    /// 弹窗按钮 (区域, 动作)
    pub dialog_buttons: Vec<(Rect, DialogAction)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.filter_tabs.clear();
        self.task_rows.clear();
        self.task_checkboxes.clear();
        self.theme_swatches.clear();
        self.input_area = None;
        self.task_list_area = None;
        self.dialog_area = None;
        self.dialog_items.clear();
        self.dialog_buttons.clear();
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(contains(&rect, 2, 3));
        assert!(contains(&rect, 5, 4));
        assert!(!contains(&rect, 6, 4));
        assert!(!contains(&rect, 2, 5));
        assert!(!contains(&rect, 1, 3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut areas = ClickAreas::default();
        areas.task_rows.push((Rect::new(0, 0, 1, 1), 0));
        areas.dialog_area = Some(Rect::new(0, 0, 1, 1));
        areas.reset();
        assert!(areas.task_rows.is_empty());
        assert!(areas.dialog_area.is_none());
    }
}
