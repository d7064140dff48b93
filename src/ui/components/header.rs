use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

use super::logo;

/// Header 完整高度：1 (边框) + 6 (Logo) + 1 (标语)
pub const HEADER_HEIGHT: u16 = 8;

/// 紧凑 Header 高度：1 (边框) + 1 (标题行)
pub const COMPACT_HEADER_HEIGHT: u16 = 2;

const TAGLINE: &str = "Organize your day, boost productivity";

/// 每个主题色块的宽度: " ██ " 或 "[██]"
const SWATCH_WIDTH: u16 = 4;

/// 根据可用区域选择 Header 高度
pub fn height_for(area: Rect) -> u16 {
    if area.height >= 32 && area.width >= logo::LOGO_WIDTH + 2 + swatches_width() {
        HEADER_HEIGHT
    } else {
        COMPACT_HEADER_HEIGHT
    }
}

fn swatches_width() -> u16 {
    Theme::all().len() as u16 * SWATCH_WIDTH
}

/// 渲染顶部区域（Logo + 标语 + 主题色块）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_theme: Theme,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, swatch_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(swatches_width() + 1),
    ])
    .areas(inner_area);

    if inner_area.height > logo::LOGO_HEIGHT {
        let [logo_area, tagline_area] = Layout::vertical([
            Constraint::Length(logo::LOGO_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(title_area);
        logo::render(frame, logo_area, colors);
        render_tagline(frame, tagline_area, colors);
    } else {
        let [name_area, tagline_area] =
            Layout::horizontal([Constraint::Length(10), Constraint::Fill(1)]).areas(title_area);
        logo::render_compact(frame, name_area, colors);
        render_tagline(frame, tagline_area, colors);
    }

    render_swatches(frame, swatch_area, current_theme, colors, click_areas);
}

fn render_tagline(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let tagline = Paragraph::new(Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(colors.muted),
    )));
    frame.render_widget(tagline, area);
}

/// 主题色块：当前主题用方括号标出，点击可直接切换
fn render_swatches(
    frame: &mut Frame,
    area: Rect,
    current_theme: Theme,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let mut spans = Vec::new();
    for (i, theme) in Theme::all().iter().enumerate() {
        let palette = get_theme_colors(*theme);
        let is_current = *theme == current_theme;
        let (open, close) = if is_current { ("[", "]") } else { (" ", " ") };
        let bracket_style = Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD);

        spans.push(Span::styled(open, bracket_style));
        spans.push(Span::styled("█", Style::default().fg(palette.highlight)));
        spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        spans.push(Span::styled(close, bracket_style));

        let x = area.x + i as u16 * SWATCH_WIDTH;
        if x + SWATCH_WIDTH <= area.x + area.width && area.height > 0 {
            click_areas
                .theme_swatches
                .push((Rect::new(x, area.y, SWATCH_WIDTH, 1), *theme));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_for() {
        assert_eq!(height_for(Rect::new(0, 0, 120, 40)), HEADER_HEIGHT);
        assert_eq!(height_for(Rect::new(0, 0, 120, 24)), COMPACT_HEADER_HEIGHT);
        assert_eq!(height_for(Rect::new(0, 0, 60, 40)), COMPACT_HEADER_HEIGHT);
    }
}
