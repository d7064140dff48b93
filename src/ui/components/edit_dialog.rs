//! 编辑任务弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::dialog_utils::{
    center_dialog, render_buttons, render_dialog_frame, render_error, DialogButton,
};
use crate::store::TaskId;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 编辑弹窗数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialogData {
    /// 正在编辑的任务
    pub task_id: TaskId,
    /// 输入内容（预填原文本）
    pub input: String,
    /// 上次提交失败的原因
    pub error: Option<String>,
}

impl EditDialogData {
    pub fn new(task_id: TaskId, text: &str) -> Self {
        Self {
            task_id,
            input: text.to_string(),
            error: None,
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
    }

    pub fn pop(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// 清空输入（Ctrl-U）
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }
}

/// 渲染编辑弹窗
pub fn render(
    frame: &mut Frame,
    data: &EditDialogData,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let area = frame.area();
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_area = center_dialog(area, popup_width, 9);

    let inner_area = render_dialog_frame(frame, popup_area, " Edit Task ", colors.highlight, colors);

    // 标签 + 输入框 + 错误行 + 提示行
    let [label_area, input_area, error_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" Update task #{}:", data.task_id),
            Style::default().fg(colors.muted),
        ))),
        label_area,
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    let input_text = Paragraph::new(Line::from(vec![
        Span::styled(data.input.as_str(), Style::default().fg(colors.text)),
        Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]))
    .alignment(Alignment::Left);
    frame.render_widget(input_text, input_inner);

    if let Some(error) = &data.error {
        render_error(frame, error_area, error, colors);
    }

    render_buttons(
        frame,
        popup_area,
        hint_area,
        &[
            DialogButton::confirm("Enter", "save"),
            DialogButton::cancel("Esc", "cancel"),
        ],
        colors,
        click_areas,
    );
}
