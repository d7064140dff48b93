//! 弹窗共享工具：居中、外框、可点击按钮行、错误行

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::ui::click_areas::{ClickAreas, DialogAction};

/// 按钮之间的间隔
const BUTTON_GAP: &str = "   ";

/// 弹窗按钮：快捷键、说明、点击动作
pub struct DialogButton<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub action: DialogAction,
}

impl<'a> DialogButton<'a> {
    pub fn confirm(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            action: DialogAction::Confirm,
        }
    }

    pub fn cancel(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            action: DialogAction::Cancel,
        }
    }

    fn spans(&self, colors: &ThemeColors) -> [Span<'a>; 2] {
        [
            Span::styled(
                self.key,
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", self.label), Style::default().fg(colors.muted)),
        ]
    }
}

/// 在 `frame_area` 内居中一个 `width` x `height` 的区域（超出时收缩）
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect::new(
        frame_area.x + (frame_area.width - width) / 2,
        frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    )
}

/// 清空背景并绘制带标题的外框，返回内部区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 居中绘制一行按钮，并按每个按钮的实际位置注册点击区域
///
/// `dialog_area` 同时登记为当前弹窗，点击其外部视为取消。
pub fn render_buttons(
    frame: &mut Frame,
    dialog_area: Rect,
    row: Rect,
    buttons: &[DialogButton],
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    click_areas.dialog_area = Some(dialog_area);

    let widths: Vec<u16> = buttons
        .iter()
        .map(|b| b.spans(colors).iter().map(|s| s.width() as u16).sum())
        .collect();
    let gap = BUTTON_GAP.len() as u16;
    let total = widths.iter().sum::<u16>() + gap * (buttons.len().saturating_sub(1) as u16);

    let mut spans = Vec::new();
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    let right = row.x + row.width;

    for (i, (button, width)) in buttons.iter().zip(&widths).enumerate() {
        if i > 0 {
            spans.push(Span::raw(BUTTON_GAP));
            x = x.saturating_add(gap);
        }
        spans.extend(button.spans(colors));

        if row.height > 0 && x < right {
            let clipped = (*width).min(right - x);
            click_areas
                .dialog_buttons
                .push((Rect::new(x, row.y, clipped, 1), button.action));
        }
        x = x.saturating_add(*width);
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

/// 错误行
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, colors: &ThemeColors) {
    let error = Paragraph::new(Line::from(vec![
        Span::styled("✗ ", Style::default().fg(colors.danger)),
        Span::styled(message, Style::default().fg(colors.danger)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(error, area);
}
