//! 统计卡片（Total / Active / Completed）

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Counts;
use crate::theme::ThemeColors;

/// 卡片高度：边框 2 + 数字 1 + 标签 1
pub const STATS_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, counts: Counts, colors: &ThemeColors) {
    let [total_area, active_area, completed_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    render_card(frame, total_area, counts.total, "Total Tasks", colors.highlight, colors);
    render_card(frame, active_area, counts.active, "Active", colors.accent, colors);
    render_card(
        frame,
        completed_area,
        counts.completed,
        "Completed",
        colors.completed,
        colors,
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    value: usize,
    label: &str,
    value_color: Color,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg_secondary));

    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(colors.muted),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(card, area);
}
