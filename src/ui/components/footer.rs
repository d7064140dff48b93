use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::store::Counts;
use crate::theme::ThemeColors;

/// Footer 高度（含边框）
pub const FOOTER_HEIGHT: u16 = 3;

/// 进度摘要，如 "2 of 5 tasks completed • 3 remaining"
pub fn progress_summary(counts: Counts) -> Option<String> {
    if counts.total == 0 {
        return None;
    }
    let mut summary = format!("{} of {} tasks completed", counts.completed, counts.total);
    if counts.active > 0 {
        summary.push_str(&format!(" • {} remaining", counts.active));
    }
    Some(summary)
}

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    counts: Counts,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(mode, counts.total > 0);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if let Some(summary) = progress_summary(counts) {
        block = block.title(Span::styled(
            format!(" {} ", summary),
            Style::default().fg(colors.text),
        ));
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} tasks managed today ", counts.total),
                Style::default().fg(colors.muted),
            ))
            .right_aligned(),
        );
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(mode: InputMode, has_tasks: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Adding => vec![
            ("Enter", "add"),
            ("Esc", "done"),
            ("Ctrl-U", "clear"),
        ],
        InputMode::Normal => {
            if has_tasks {
                vec![
                    ("a", "add"),
                    ("Space", "done"),
                    ("e", "edit"),
                    ("d", "delete"),
                    ("p", "priority"),
                    ("Tab", "filter"),
                    ("C", "clear all"),
                    ("t", "theme"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            } else {
                vec![
                    ("a", "add"),
                    ("Tab", "filter"),
                    ("t", "theme"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_summary() {
        assert_eq!(progress_summary(Counts::default()), None);
        assert_eq!(
            progress_summary(Counts {
                total: 5,
                active: 3,
                completed: 2
            })
            .as_deref(),
            Some("2 of 5 tasks completed • 3 remaining")
        );
        assert_eq!(
            progress_summary(Counts {
                total: 2,
                active: 0,
                completed: 2
            })
            .as_deref(),
            Some("2 of 2 tasks completed")
        );
    }
}
