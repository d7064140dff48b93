use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, InputMode};
use crate::store::{FilterMode, Priority};
use crate::ui::click_areas::{contains, DialogAction};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) => {
                // 只处理按下事件
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件

    // 帮助面板
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    // 编辑弹窗
    if app.dialogs.edit_dialog.is_some() {
        handle_edit_dialog_key(app, key);
        return;
    }

    // 确认弹窗
    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Adding => handle_input_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 处理列表导航模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // 新任务
        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('i') => app.focus_input(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 单任务操作
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('L') => app.set_selected_priority(Priority::Low),
        KeyCode::Char('M') => app.set_selected_priority(Priority::Medium),
        KeyCode::Char('H') => app.set_selected_priority(Priority::High),
        KeyCode::Char('p') => app.cycle_selected_priority(),

        // 过滤
        KeyCode::Tab => app.next_filter(),
        KeyCode::BackTab => app.prev_filter(),
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Active),
        KeyCode::Char('3') => app.set_filter(FilterMode::Completed),

        // 批量操作
        KeyCode::Char('c') => app.clear_completed(),
        KeyCode::Char('C') => app.request_clear_all(),

        // 主题
        KeyCode::Char('t') => app.open_theme_selector(),
        KeyCode::Char('T') => app.cycle_theme(),

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// 处理输入框聚焦时的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.blur_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_input(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 处理编辑弹窗的键盘事件
fn handle_edit_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 保存
        KeyCode::Enter => app.confirm_edit(),

        // 取消
        KeyCode::Esc => app.close_edit_dialog(),

        KeyCode::Backspace => {
            if let Some(data) = app.dialogs.edit_dialog.as_mut() {
                data.pop();
            }
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(data) = app.dialogs.edit_dialog.as_mut() {
                data.clear();
            }
        }

        KeyCode::Char(c) => {
            if let Some(data) = app.dialogs.edit_dialog.as_mut() {
                data.push(c);
            }
        }

        _ => {}
    }
}

fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_dialog_accept();
        }

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_dialog_cancel();
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.theme_selector_cancel();
        }

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.dialogs.show_help = false;
        }
        _ => {}
    }
}

// ============================================================================
// Mouse
// ============================================================================

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown => scroll(app, mouse, true),
        MouseEventKind::ScrollUp => scroll(app, mouse, false),
        _ => {}
    }
}

/// 滚轮：弹窗打开时仅作用于主题选择器，否则在任务列表内移动选择
fn scroll(app: &mut App, mouse: MouseEvent, down: bool) {
    if app.ui.show_theme_selector {
        if down {
            app.theme_selector_next();
        } else {
            app.theme_selector_prev();
        }
        return;
    }
    if app.dialogs.has_active_dialog() {
        return;
    }
    let in_list = app
        .ui
        .click_areas
        .task_list_area
        .is_some_and(|r| contains(&r, mouse.column, mouse.row));
    if in_list {
        if down {
            app.select_next();
        } else {
            app.select_previous();
        }
    }
}

fn handle_left_click(app: &mut App, col: u16, row: u16) {
    if app.dialogs.show_help {
        app.dialogs.show_help = false;
        return;
    }

    if app.dialogs.edit_dialog.is_some()
        || app.dialogs.confirm_dialog.is_some()
        || app.ui.show_theme_selector
    {
        handle_dialog_click(app, col, row);
        return;
    }

    let areas = app.ui.click_areas.clone();

    // Header 主题色块
    if let Some((_, theme)) = areas
        .theme_swatches
        .iter()
        .find(|(r, _)| contains(r, col, row))
    {
        app.apply_theme(*theme);
        return;
    }

    // 过滤 Tab
    if let Some((_, mode)) = areas
        .filter_tabs
        .iter()
        .find(|(r, _)| contains(r, col, row))
    {
        app.set_filter(*mode);
        return;
    }

    // 输入框
    if areas.input_area.is_some_and(|r| contains(&r, col, row)) {
        app.focus_input();
        return;
    }

    // 其他位置点击离开输入框
    app.blur_input();

    // 复选框
    if let Some((_, index)) = areas
        .task_checkboxes
        .iter()
        .find(|(r, _)| contains(r, col, row))
    {
        app.select_index(*index);
        app.toggle_selected();
        return;
    }

    // 任务行：单击选中，双击编辑
    if let Some((_, index)) = areas
        .task_rows
        .iter()
        .find(|(r, _)| contains(r, col, row))
    {
        let double = app.ui.is_double_click((col, row));
        app.select_index(*index);
        if double {
            app.open_edit_dialog();
        }
    }
    app.ui.record_click((col, row));
}

fn handle_dialog_click(app: &mut App, col: u16, row: u16) {
    let areas = app.ui.click_areas.clone();

    if let Some((_, action)) = areas
        .dialog_buttons
        .iter()
        .find(|(r, _)| contains(r, col, row))
    {
        match action {
            DialogAction::Confirm => confirm_active_dialog(app),
            DialogAction::Cancel => cancel_active_dialog(app),
        }
        return;
    }

    if app.ui.show_theme_selector {
        if let Some((_, index)) = areas
            .dialog_items
            .iter()
            .find(|(r, _)| contains(r, col, row))
        {
            app.theme_selector_select(*index);
            return;
        }
    }

    // 点击弹窗外部关闭
    let inside = areas.dialog_area.is_some_and(|r| contains(&r, col, row));
    if !inside {
        cancel_active_dialog(app);
    }
}

/// 按层级确认最上层的弹窗
fn confirm_active_dialog(app: &mut App) {
    if app.ui.show_theme_selector {
        app.theme_selector_confirm();
    } else if app.dialogs.confirm_dialog.is_some() {
        app.confirm_dialog_accept();
    } else if app.dialogs.edit_dialog.is_some() {
        app.confirm_edit();
    }
}

/// 按层级取消最上层的弹窗
fn cancel_active_dialog(app: &mut App) {
    if app.ui.show_theme_selector {
        app.theme_selector_cancel();
    } else if app.dialogs.confirm_dialog.is_some() {
        app.confirm_dialog_cancel();
    } else if app.dialogs.edit_dialog.is_some() {
        app.close_edit_dialog();
    }
}
