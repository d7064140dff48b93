//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。确认和文本输入都在这里完成，
//! 任务存储只接收最终结果。

pub use crate::ui::components::confirm_dialog::ConfirmType;
pub use crate::ui::components::edit_dialog::EditDialogData;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 确认弹窗
    pub confirm_dialog: Option<ConfirmType>,
    /// 编辑任务弹窗
    pub edit_dialog: Option<EditDialogData>,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭所有对话框
    pub fn close_all(&mut self) {
        self.show_help = false;
        self.confirm_dialog = None;
        self.edit_dialog = None;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_help || self.confirm_dialog.is_some() || self.edit_dialog.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(!state.show_help);
        assert!(state.confirm_dialog.is_none());
        assert!(state.edit_dialog.is_none());
        assert!(!state.has_active_dialog());
    }

    #[test]
    fn test_close_all_clears_all_dialogs() {
        let mut state = DialogState::new();

        state.show_help = true;
        state.confirm_dialog = Some(ConfirmType::ClearAll { total: 3 });
        state.edit_dialog = Some(EditDialogData::new(1, "Buy milk"));
        assert!(state.has_active_dialog());

        state.close_all();

        assert!(!state.show_help);
        assert!(state.confirm_dialog.is_none());
        assert!(state.edit_dialog.is_none());
        assert!(!state.has_active_dialog());
    }
}
