use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::FilterMode;
use crate::theme::ThemeColors;

/// 渲染空状态（标题 + 当前过滤模式下的提示）
pub fn render(frame: &mut Frame, area: Rect, filter: FilterMode, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("✨", Style::default().fg(colors.highlight))),
        Line::from(Span::styled(
            "All Clear!",
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            empty_message(filter),
            Style::default().fg(colors.muted),
        )),
    ];

    if filter != FilterMode::Completed {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]));
    }

    // 垂直居中
    let text_height = lines.len() as u16;
    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint_widget, text_area);
}

/// 各过滤模式下的空列表提示
pub fn empty_message(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::Completed => "No completed tasks yet",
        FilterMode::Active => "No active tasks - add some above!",
        FilterMode::All => "No tasks yet - start by adding one above!",
    }
}
