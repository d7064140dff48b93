use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    confirm_dialog, edit_dialog, empty_state, footer, header, help_panel, input_bar, stats, tabs,
    task_list, theme_selector, toast,
};

/// 渲染任务页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;
    let click_areas = &mut app.ui.click_areas;
    click_areas.reset();

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, stats_area, input_area, tabs_area, list_area, footer_area] =
        Layout::vertical([
            Constraint::Length(header::height_for(area)),
            Constraint::Length(stats::STATS_HEIGHT),
            Constraint::Length(input_bar::INPUT_BAR_HEIGHT),
            Constraint::Length(tabs::TABS_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(footer::FOOTER_HEIGHT),
        ])
        .areas(area);

    let counts = app.store.counts();

    header::render(frame, header_area, app.ui.theme, &colors, click_areas);
    stats::render(frame, stats_area, counts, &colors);
    input_bar::render(
        frame,
        input_area,
        &app.input,
        app.input_mode == InputMode::Adding,
        &colors,
        click_areas,
    );
    tabs::render(frame, tabs_area, app.filter, counts, &colors, click_areas);

    let tasks = app.store.filter(app.filter);
    if tasks.is_empty() {
        empty_state::render(frame, list_area, app.filter, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            &tasks,
            &mut app.table_state,
            &colors,
            click_areas,
        );
    }

    footer::render(frame, footer_area, app.input_mode, counts, &colors);

    // 弹窗（按层级从下到上）
    if let Some(data) = &app.dialogs.edit_dialog {
        edit_dialog::render(frame, data, &colors, click_areas);
    }

    if let Some(confirm_type) = &app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm_type, &colors, click_areas);
    }

    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, &colors, click_areas);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, &colors);
    }

    if let Some(toast) = &app.ui.toast {
        if !toast.is_expired() {
            toast::render(frame, toast, &colors);
        }
    }
}
