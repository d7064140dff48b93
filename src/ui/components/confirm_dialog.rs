//! 确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_buttons, render_dialog_frame, DialogButton};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 确认弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmType {
    /// 删除全部任务
    ClearAll { total: usize },
}

impl ConfirmType {
    pub fn title(&self) -> &str {
        match self {
            ConfirmType::ClearAll { .. } => " Clear All ",
        }
    }

    pub fn message(&self) -> Vec<Line<'static>> {
        match self {
            ConfirmType::ClearAll { total } => {
                let noun = if *total == 1 { "task" } else { "tasks" };
                vec![
                    Line::from("Are you sure you want to"),
                    Line::from(format!("delete all {} {}?", total, noun)),
                    Line::from(""),
                    Line::from("This cannot be undone."),
                ]
            }
        }
    }
}

/// 渲染确认弹窗
pub fn render(
    frame: &mut Frame,
    confirm_type: &ConfirmType,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let message_lines = confirm_type.message();
    // 边框 + 内容 + 空行 + 提示
    let popup_height = (message_lines.len() as u16) + 4;
    let popup_area = center_dialog(frame.area(), 40, popup_height);

    let inner_area = render_dialog_frame(
        frame,
        popup_area,
        confirm_type.title(),
        colors.danger,
        colors,
    );

    let [content_area, _, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let styled_lines: Vec<Line> = message_lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();

    let content = Paragraph::new(styled_lines).alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    render_buttons(
        frame,
        popup_area,
        hint_area,
        &[
            DialogButton::confirm("Y/Enter", "confirm"),
            DialogButton::cancel("N/Esc", "cancel"),
        ],
        colors,
        click_areas,
    );
}
