//! 退出确认渲染

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染退出确认
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme, completed: bool) {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let text = if completed {
        t!("exit_confirm")
    } else {
        t!("exit_confirm_unsaved")
    };
    let confirm_text = Paragraph::new(text)
        .style(theme.warning())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(confirm_text, center);
}
