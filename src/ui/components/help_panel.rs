//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::dialog_utils::center_dialog;
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 40;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 35;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Tab / S-Tab", "Next / prev filter", colors),
        key_line("1 / 2 / 3", "All / Active / Done", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("a / n / i", "Add task", colors),
        key_line("Space / x", "Toggle complete", colors),
        key_line("e / Enter", "Edit (or dbl-click)", colors),
        key_line("d / Del", "Delete", colors),
        key_line("L / M / H", "Priority low/med/high", colors),
        key_line("p", "Cycle priority", colors),
        Line::from(""),
        section_header("Bulk", colors),
        key_line("c", "Clear completed", colors),
        key_line("C", "Clear all (confirm)", colors),
        Line::from(""),
        section_header("Input", colors),
        key_line("Enter", "Add / save", colors),
        key_line("Ctrl-U", "Clear input", colors),
        key_line("Esc", "Leave input", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("T", "Next theme", colors),
        key_line("?", "This help", colors),
        key_line("q / Ctrl-C", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            Style::default().fg(colors.muted),
        )),
        Line::from(Span::styled(
            format!("  TaskFlow v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "       Press ? or Esc to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 分组标题
fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 快捷键行
fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:13}", key),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
