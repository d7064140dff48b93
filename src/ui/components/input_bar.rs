//! 新任务输入栏

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 输入栏高度（含边框）
pub const INPUT_BAR_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "What needs to be done?";

/// 渲染输入栏
///
/// 聚焦时边框高亮并显示光标；未聚焦且为空时显示占位提示。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if focused { colors.highlight } else { colors.border };

    let hint = if focused {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(colors.highlight)),
            Span::styled(" add  ", Style::default().fg(colors.muted)),
            Span::styled("Esc", Style::default().fg(colors.highlight)),
            Span::styled(" done ", Style::default().fg(colors.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Press ", Style::default().fg(colors.muted)),
            Span::styled("a", Style::default().fg(colors.highlight)),
            Span::styled(", then Enter to add quickly ", Style::default().fg(colors.muted)),
        ])
    };

    let block = Block::default()
        .title(Span::styled(
            " ✏ New Task ",
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(hint.right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if input.is_empty() && !focused {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(colors.muted),
        ))
    } else {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(input, Style::default().fg(colors.text)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
    click_areas.input_area = Some(area);
}
