use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo - 6 行高
const LOGO: &[&str] = &[
    "████████╗ █████╗ ███████╗██╗  ██╗███████╗██╗      ██████╗ ██╗    ██╗",
    "╚══██╔══╝██╔══██╗██╔════╝██║ ██╔╝██╔════╝██║     ██╔═══██╗██║    ██║",
    "   ██║   ███████║███████╗█████╔╝ █████╗  ██║     ██║   ██║██║ █╗ ██║",
    "   ██║   ██╔══██║╚════██║██╔═██╗ ██╔══╝  ██║     ██║   ██║██║███╗██║",
    "   ██║   ██║  ██║███████║██║  ██╗██║     ███████╗╚██████╔╝╚███╔███╔╝",
    "   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚═╝     ╚══════╝ ╚═════╝  ╚══╝╚══╝ ",
];

/// Logo 的高度（行数）
pub const LOGO_HEIGHT: u16 = 6;

/// Logo 的宽度（列数）
pub const LOGO_WIDTH: u16 = 68;

/// 渲染 Logo；宽度不足时退化为单行标题
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    if area.width < LOGO_WIDTH || area.height < LOGO_HEIGHT {
        render_compact(frame, area, colors);
        return;
    }

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.logo))))
        .collect();

    let logo_widget = Paragraph::new(logo_lines).alignment(Alignment::Left);
    frame.render_widget(logo_widget, area);
}

/// 单行标题
pub fn render_compact(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let title = Paragraph::new(Line::from(Span::styled(
        "TaskFlow",
        Style::default()
            .fg(colors.logo)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}
