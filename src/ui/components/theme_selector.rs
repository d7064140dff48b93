//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_buttons, render_dialog_frame, DialogButton};
use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// 渲染主题选择器弹窗
pub fn render(
    frame: &mut Frame,
    selected_index: usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let themes = Theme::all();

    // 边框 + 列表 + 提示
    let popup_height = (themes.len() as u16) + 4;
    let popup_area = center_dialog(frame.area(), 30, popup_height);

    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };
            let palette = get_theme_colors(*theme);

            let label_style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Line::from(vec![
                Span::styled(prefix, label_style),
                Span::styled("██", Style::default().fg(palette.highlight)),
                Span::styled("██", Style::default().fg(palette.accent)),
                Span::styled(format!(" {}", theme.label()), label_style),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(list, list_area);

    render_buttons(
        frame,
        popup_area,
        hint_area,
        &[
            DialogButton::confirm("Enter", "apply"),
            DialogButton::cancel("Esc", "cancel"),
        ],
        colors,
        click_areas,
    );
    for (i, _) in themes.iter().enumerate() {
        let row_rect = Rect::new(list_area.x, list_area.y + i as u16, list_area.width, 1);
        click_areas.dialog_items.push((row_rect, i));
    }
}
