use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::{Counts, FilterMode};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// Tab 栏高度（内容 + 下边框）
pub const TABS_HEIGHT: u16 = 2;

/// Tab 文本，如 "Active (3)"
pub fn tab_label(mode: FilterMode, counts: Counts) -> String {
    format!("{} ({})", mode.label(), counts.for_filter(mode))
}

/// 渲染过滤 Tab 栏，有已完成任务时右侧显示 Clear Completed 提示
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current: FilterMode,
    counts: Counts,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    const LEADING: &str = "   ";
    const GAP: &str = "  ";

    let mut spans = vec![Span::raw(LEADING)];
    let mut x = inner.x + LEADING.len() as u16;

    let modes = FilterMode::all();
    for (i, mode) in modes.iter().enumerate() {
        let text = format!("  {}  ", tab_label(*mode, counts));
        let width = Span::raw(text.as_str()).width() as u16;

        let style = if *mode == current {
            // 选中的 Tab: 背景高亮块
            Style::default()
                .fg(colors.tab_active_fg)
                .bg(colors.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };
        spans.push(Span::styled(text, style));

        if inner.height > 0 && x < inner.x + inner.width {
            let clipped = width.min(inner.x + inner.width - x);
            click_areas
                .filter_tabs
                .push((Rect::new(x, inner.y, clipped, 1), *mode));
        }
        x = x.saturating_add(width);

        if i < modes.len() - 1 {
            spans.push(Span::raw(GAP));
            x = x.saturating_add(GAP.len() as u16);
        }
    }

    let mut line = Line::from(spans);

    if counts.completed > 0 {
        let clear = Line::from(vec![
            Span::styled("c", Style::default().fg(colors.danger).add_modifier(Modifier::BOLD)),
            Span::styled(" Clear Completed ", Style::default().fg(colors.danger)),
        ]);
        let padding = (inner.width as usize).saturating_sub(line.width() + clear.width());
        line.spans.push(Span::raw(" ".repeat(padding)));
        line.spans.extend(clear.spans);
    }

    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label() {
        let counts = Counts {
            total: 5,
            active: 3,
            completed: 2,
        };
        assert_eq!(tab_label(FilterMode::All, counts), "All (5)");
        assert_eq!(tab_label(FilterMode::Active, counts), "Active (3)");
        assert_eq!(tab_label(FilterMode::Completed, counts), "Completed (2)");
    }
}
