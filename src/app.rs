//! 全局应用状态
//!
//! `App` 是唯一的控制器：持有任务存储、过滤模式、选择状态、输入框、对话框和主题。
//! 界面层只读取它的状态，并通过它的方法修改状态。

use ratatui::widgets::TableState;

use crate::dialogs::{ConfirmType, DialogState, EditDialogData};
use crate::error::StoreError;
use crate::store::{Counts, FilterMode, Priority, Task, TaskId, TaskStore};
use crate::theme::Theme;
use crate::ui_state::{ToastKind, UiState, TOAST_DURATION};

/// 输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// 列表导航
    #[default]
    Normal,
    /// 正在输入新任务
    Adding,
}

/// 全局应用状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储
    pub store: TaskStore,
    /// 当前过滤模式
    pub filter: FilterMode,
    /// 过滤后列表的选择与滚动状态（跨帧保留偏移）
    pub table_state: TableState,
    /// 输入焦点
    pub input_mode: InputMode,
    /// 新任务输入内容
    pub input: String,
    /// UI 状态（主题、Toast、点击区域）
    pub ui: UiState,
    /// 对话框状态
    pub dialogs: DialogState,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default(), FilterMode::default())
    }
}

impl App {
    pub fn new(theme: Theme, filter: FilterMode) -> Self {
        Self {
            should_quit: false,
            store: TaskStore::new(),
            filter,
            table_state: TableState::default(),
            input_mode: InputMode::Normal,
            input: String::new(),
            ui: UiState::new(theme),
            dialogs: DialogState::new(),
        }
    }

    // ========== 查询 ==========

    /// 当前过滤模式下的任务
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filter(self.filter)
    }

    pub fn counts(&self) -> Counts {
        self.store.counts()
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.table_state.selected()?;
        self.visible_tasks().get(index).copied()
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    // ========== 选择 ==========

    /// 确保选中项落在过滤后列表范围内
    pub fn ensure_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let index = self.table_state.selected().unwrap_or(0).min(len - 1);
        self.table_state.select(Some(index));
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.table_state.select(Some(prev));
    }

    /// 选中指定索引（鼠标点击）
    pub fn select_index(&mut self, index: usize) {
        if index < self.visible_tasks().len() {
            self.table_state.select(Some(index));
        }
    }

    // ========== 过滤 ==========

    pub fn set_filter(&mut self, filter: FilterMode) {
        if self.filter != filter {
            self.filter = filter;
            *self.table_state.offset_mut() = 0;
            self.table_state.select(Some(0));
        }
        self.ensure_selection();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    // ========== 新任务输入 ==========

    /// 聚焦输入框
    pub fn focus_input(&mut self) {
        self.input_mode = InputMode::Adding;
    }

    /// 离开输入框（保留已输入内容）
    pub fn blur_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// 提交输入：成功后清空输入并保持聚焦，新任务可见时选中它
    pub fn submit_input(&mut self) {
        let added = self.store.add(&self.input).map(|t| t.id);
        match added {
            Ok(id) => {
                tracing::info!(id, "task created");
                self.input.clear();
                if let Some(index) = self.visible_tasks().iter().position(|t| t.id == id) {
                    self.table_state.select(Some(index));
                }
                self.ensure_selection();
            }
            Err(e) => self.report(e),
        }
    }

    // ========== 单任务操作 ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle_task(id);
        }
    }

    /// 切换指定任务的完成状态（鼠标点击复选框）
    pub fn toggle_task(&mut self, id: TaskId) {
        if let Err(e) = self.store.toggle_complete(id) {
            self.report(e);
        }
        self.ensure_selection();
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove(id);
            self.ensure_selection();
        }
    }

    /// 设置选中任务的优先级
    pub fn set_selected_priority(&mut self, priority: Priority) {
        let Some(id) = self.selected_id() else { return };
        if let Err(e) = self.store.set_priority(id, priority) {
            self.report(e);
        }
    }

    /// 循环选中任务的优先级
    pub fn cycle_selected_priority(&mut self) {
        if let Some(task) = self.selected_task() {
            let next = task.priority.next();
            self.set_selected_priority(next);
        }
    }

    // ========== 编辑弹窗 ==========

    /// 打开选中任务的编辑弹窗
    pub fn open_edit_dialog(&mut self) {
        if let Some(task) = self.selected_task() {
            self.dialogs.edit_dialog = Some(EditDialogData::new(task.id, &task.text));
        }
    }

    pub fn close_edit_dialog(&mut self) {
        self.dialogs.edit_dialog = None;
    }

    /// 保存编辑：空文本时保留弹窗并显示错误
    pub fn confirm_edit(&mut self) {
        let Some(data) = self.dialogs.edit_dialog.as_ref() else {
            return;
        };
        let (id, input) = (data.task_id, data.input.clone());

        match self.store.update(id, &input) {
            Ok(_) => {
                self.dialogs.edit_dialog = None;
            }
            Err(StoreError::EmptyText) => {
                if let Some(data) = self.dialogs.edit_dialog.as_mut() {
                    data.error = Some(StoreError::EmptyText.to_string());
                }
                self.report(StoreError::EmptyText);
            }
            Err(e) => {
                // 任务已不存在
                self.dialogs.edit_dialog = None;
                self.report(e);
            }
        }
    }

    // ========== 批量操作 ==========

    /// 清除已完成任务
    pub fn clear_completed(&mut self) {
        let completed = self.counts().completed;
        if completed == 0 {
            self.show_toast("No completed tasks to clear");
            return;
        }
        self.store.clear_completed();
        self.ensure_selection();
        self.show_toast(format!("Cleared {} completed", completed));
    }

    /// 请求清空全部任务（需要确认）
    pub fn request_clear_all(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.dialogs.confirm_dialog = Some(ConfirmType::ClearAll {
            total: self.store.len(),
        });
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_accept(&mut self) {
        match self.dialogs.confirm_dialog.take() {
            Some(ConfirmType::ClearAll { .. }) => {
                self.store.clear_all();
                self.dialogs.close_all();
                self.ensure_selection();
                self.show_toast("All tasks cleared");
            }
            None => {}
        }
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_cancel(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    // ========== 主题 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.ui.theme_before_selector = self.ui.theme;
        self.ui.theme_selector_index = self.ui.theme.index();
        self.ui.show_theme_selector = true;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        let index = if self.ui.theme_selector_index == 0 {
            len - 1
        } else {
            self.ui.theme_selector_index - 1
        };
        self.theme_selector_select(index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let index = (self.ui.theme_selector_index + 1) % Theme::all().len();
        self.theme_selector_select(index);
    }

    /// 主题选择器 - 选中指定索引（实时预览）
    pub fn theme_selector_select(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.ui.theme_selector_index = index;
            self.ui.set_theme(*theme);
        }
    }

    /// 主题选择器 - 确认选择
    pub fn theme_selector_confirm(&mut self) {
        self.ui.show_theme_selector = false;
        self.show_toast(format!("Theme: {}", self.ui.theme.label()));
    }

    /// 主题选择器 - 取消（恢复打开前的主题）
    pub fn theme_selector_cancel(&mut self) {
        self.ui.show_theme_selector = false;
        let previous = self.ui.theme_before_selector;
        self.ui.set_theme(previous);
    }

    /// 直接应用主题（点击色块）
    pub fn apply_theme(&mut self, theme: Theme) {
        self.ui.set_theme(theme);
        self.show_toast(format!("Theme: {}", theme.label()));
    }

    /// 切换到下一个主题（快捷方式）
    pub fn cycle_theme(&mut self) {
        self.apply_theme(self.ui.theme.next());
    }

    // ========== 其他 ==========

    pub fn toggle_help(&mut self) {
        self.dialogs.show_help = !self.dialogs.show_help;
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message, ToastKind::Info, TOAST_DURATION);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 以 Toast 形式展示存储错误
    fn report(&mut self, err: StoreError) {
        tracing::warn!(error = %err, "task operation rejected");
        self.ui
            .show_toast(err.to_string(), ToastKind::Error, TOAST_DURATION);
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::default();
        app.focus_input();
        for text in texts {
            app.input = text.to_string();
            app.submit_input();
        }
        app.blur_input();
        app
    }

    fn visible_texts(app: &App) -> Vec<String> {
        app.visible_tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_submit_input_adds_and_selects_newest() {
        let app = app_with(&["first", "second"]);

        assert_eq!(visible_texts(&app), vec!["second", "first"]);
        assert_eq!(app.table_state.selected(), Some(0));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_submit_empty_input_shows_toast() {
        let mut app = App::default();
        app.input = "   ".to_string();
        app.submit_input();

        assert!(app.store.is_empty());
        let toast = app.ui.toast.as_ref().unwrap();
        assert_eq!(toast.message, "Task cannot be empty!");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_toggle_under_active_filter_keeps_selection_in_range() {
        let mut app = app_with(&["a", "b"]);
        app.set_filter(FilterMode::Active);
        app.select_index(1);

        app.toggle_selected();
        assert_eq!(visible_texts(&app), vec!["b"]);
        assert_eq!(app.table_state.selected(), Some(0));

        app.toggle_selected();
        assert!(app.visible_tasks().is_empty());
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_add_under_completed_filter_does_not_select_hidden_task() {
        let mut app = app_with(&["done"]);
        app.toggle_selected();
        app.set_filter(FilterMode::Completed);

        app.input = "new".to_string();
        app.submit_input();

        assert_eq!(visible_texts(&app), vec!["done"]);
        assert_eq!(app.selected_task().map(|t| t.text.as_str()), Some("done"));
    }

    #[test]
    fn test_delete_selected() {
        let mut app = app_with(&["a", "b", "c"]);
        app.select_index(2);
        app.delete_selected();

        assert_eq!(visible_texts(&app), vec!["c", "b"]);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn test_priority_changes() {
        let mut app = app_with(&["a"]);
        app.set_selected_priority(Priority::High);
        assert_eq!(app.selected_task().unwrap().priority, Priority::High);

        app.cycle_selected_priority();
        assert_eq!(app.selected_task().unwrap().priority, Priority::Low);
    }

    #[test]
    fn test_edit_dialog_flow() {
        let mut app = app_with(&["Buy milk"]);
        app.open_edit_dialog();
        assert_eq!(
            app.dialogs.edit_dialog.as_ref().map(|d| d.input.as_str()),
            Some("Buy milk")
        );

        // 空文本：弹窗保留并显示错误，任务不变
        app.dialogs.edit_dialog.as_mut().unwrap().clear();
        app.confirm_edit();
        let data = app.dialogs.edit_dialog.as_ref().unwrap();
        assert_eq!(data.error.as_deref(), Some("Task cannot be empty!"));
        assert_eq!(app.selected_task().unwrap().text, "Buy milk");

        for c in " Buy oat milk ".chars() {
            app.dialogs.edit_dialog.as_mut().unwrap().push(c);
        }
        app.confirm_edit();
        assert!(app.dialogs.edit_dialog.is_none());
        assert_eq!(app.selected_task().unwrap().text, "Buy oat milk");
    }

    #[test]
    fn test_edit_of_removed_task_closes_dialog() {
        let mut app = app_with(&["a"]);
        app.open_edit_dialog();
        app.store.clear_all();

        app.confirm_edit();
        assert!(app.dialogs.edit_dialog.is_none());
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.message.as_str()),
            Some("Task #1 not found")
        );
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut app = app_with(&["a", "b"]);

        app.request_clear_all();
        assert_eq!(
            app.dialogs.confirm_dialog,
            Some(ConfirmType::ClearAll { total: 2 })
        );
        assert_eq!(app.store.len(), 2);

        app.confirm_dialog_cancel();
        assert_eq!(app.store.len(), 2);

        app.request_clear_all();
        app.confirm_dialog_accept();
        assert!(app.store.is_empty());
        assert!(app.dialogs.confirm_dialog.is_none());
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_clear_all_on_empty_store_does_nothing() {
        let mut app = App::default();
        app.request_clear_all();
        assert!(app.dialogs.confirm_dialog.is_none());
    }

    #[test]
    fn test_clear_completed() {
        let mut app = app_with(&["a", "b"]);
        app.clear_completed();
        assert_eq!(app.store.len(), 2);

        app.toggle_selected();
        app.clear_completed();
        assert_eq!(visible_texts(&app), vec!["a"]);
    }

    #[test]
    fn test_filter_cycle_resets_selection() {
        let mut app = app_with(&["a", "b", "c"]);
        app.select_index(2);
        *app.table_state.offset_mut() = 2;

        app.next_filter();
        assert_eq!(app.filter, FilterMode::Active);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.table_state.offset(), 0);

        app.prev_filter();
        app.prev_filter();
        assert_eq!(app.filter, FilterMode::Completed);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app_with(&["a", "b", "c"]);
        app.select_previous();
        assert_eq!(app.table_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_theme_selector_cancel_restores_theme() {
        let mut app = App::new(Theme::Coral, FilterMode::All);
        app.open_theme_selector();
        app.theme_selector_next();
        assert_eq!(app.ui.theme, Theme::Mint);

        app.theme_selector_cancel();
        assert_eq!(app.ui.theme, Theme::Coral);
        assert!(!app.ui.show_theme_selector);
    }

    #[test]
    fn test_theme_selector_confirm_keeps_preview() {
        let mut app = App::default();
        app.open_theme_selector();
        app.theme_selector_prev();
        app.theme_selector_confirm();

        assert_eq!(app.ui.theme, Theme::Galaxy);
        assert!(!app.ui.show_theme_selector);
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = App::default();
        app.cycle_theme();
        assert_eq!(app.ui.theme, Theme::Coral);
    }
}
