use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::store::{Priority, Task};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 表头占用的行数（表头 1 + 下边距 1）
const HEADER_ROWS: u16 = 2;

/// 复选框列宽度
const CHECKBOX_WIDTH: u16 = 4;

/// 选择器列宽度
const SELECTOR_WIDTH: u16 = 2;

/// 优先级徽章文字
pub fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => " HIGH ",
        Priority::Medium => " MED  ",
        Priority::Low => " LOW  ",
    }
}

fn priority_style(priority: Priority, colors: &ThemeColors) -> Style {
    let bg = match priority {
        Priority::High => colors.priority_high,
        Priority::Medium => colors.priority_medium,
        Priority::Low => colors.priority_low,
    };
    Style::default()
        .fg(ratatui::style::Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    state: &mut TableState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let selected_index = state.selected();

    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 复选框
        Cell::from("PRIORITY"),
        Cell::from("TASK"),
        Cell::from("ADDED"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };
            let checkbox = if task.completed { "[x]" } else { "[ ]" };

            let text_style = if task.completed {
                Style::default()
                    .fg(colors.completed)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(checkbox).style(Style::default().fg(if task.completed {
                    colors.completed
                } else {
                    colors.muted
                })),
                Cell::from(Span::styled(
                    priority_badge(task.priority),
                    priority_style(task.priority, colors),
                )),
                Cell::from(task.text.clone()).style(text_style),
                Cell::from(format!("🕒 {}", task.created_label()))
                    .style(Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(SELECTOR_WIDTH), // 选择器
        Constraint::Length(CHECKBOX_WIDTH), // 复选框
        Constraint::Length(8),              // 优先级
        Constraint::Fill(1),                // TASK (flex)
        Constraint::Length(8),              // 时间
    ];

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 偏移保存在 state 中，ratatui 仅在选中行越界时滚动
    frame.render_stateful_widget(table, area, state);

    // 注册点击区域（按滚动偏移换算）
    click_areas.task_list_area = Some(area);
    let offset = state.offset();
    let visible_rows = inner.height.saturating_sub(HEADER_ROWS) as usize;
    for (row, index) in (offset..tasks.len()).take(visible_rows).enumerate() {
        let y = inner.y + HEADER_ROWS + row as u16;
        click_areas
            .task_rows
            .push((Rect::new(inner.x, y, inner.width, 1), index));
        click_areas.task_checkboxes.push((
            Rect::new(
                inner.x + SELECTOR_WIDTH + 1,
                y,
                CHECKBOX_WIDTH.min(inner.width),
                1,
            ),
            index,
        ));
    }
}
