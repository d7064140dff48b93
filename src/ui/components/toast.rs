use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::ui_state::{Toast, ToastKind};

/// 距离屏幕底部的行数（留出 footer）
const BOTTOM_MARGIN: u16 = 3;

/// 在屏幕底部居中显示 Toast；错误使用危险色
pub fn render(frame: &mut Frame, toast: &Toast, colors: &ThemeColors) {
    let (icon, accent) = match toast.kind {
        ToastKind::Info => ("✓", colors.highlight),
        ToastKind::Error => ("!", colors.danger),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            toast.message.as_str(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let Some(area) = toast_area(frame.area(), line.width() as u16) else {
        return;
    };

    frame.render_widget(Clear, area);
    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(colors.bg)),
    );
    frame.render_widget(widget, area);
}

/// Toast 位置：底部居中，放不下时返回 None
fn toast_area(screen: Rect, text_width: u16) -> Option<Rect> {
    let height = 3;
    if screen.width < 8 || screen.height < height + BOTTOM_MARGIN {
        return None;
    }
    let width = text_width.saturating_add(4).min(screen.width - 4);
    Some(Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + screen.height - height - BOTTOM_MARGIN,
        width,
        height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_area_sits_above_footer() {
        let area = toast_area(Rect::new(0, 0, 80, 24), 20).unwrap();
        assert_eq!(area, Rect::new(28, 18, 24, 3));
    }

    #[test]
    fn test_toast_area_clamps_width() {
        let area = toast_area(Rect::new(0, 0, 20, 24), 60).unwrap();
        assert_eq!(area.width, 16);
    }

    #[test]
    fn test_toast_hidden_on_tiny_screen() {
        assert_eq!(toast_area(Rect::new(0, 0, 6, 24), 4), None);
        assert_eq!(toast_area(Rect::new(0, 0, 80, 5), 4), None);
    }
}
