//! 提交完成屏幕渲染

use crate::campaign::results::CampaignSummary;
use crate::tui::components::{bordered_block, render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染提交完成屏幕
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("submitted_title"), theme, frame, header);

    let form = state.wizard.form();
    let summary = CampaignSummary::from_form(form);

    let mut lines = vec![
        Line::from(t!("submitted_message").to_string()).style(theme.success()),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", t!("field_objective")), theme.hint()),
            Span::styled(summary.objective, theme.normal()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t!("field_budget_amount")), theme.hint()),
            Span::styled(summary.budget, theme.normal()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t!("summary_keywords")), theme.hint()),
            Span::styled(summary.keywords.join(" "), theme.tag()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t!("summary_categories")), theme.hint()),
            Span::styled(summary.categories.join(", "), theme.tag()),
        ]),
    ];

    if let Some(ref path) = state.submit_target {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", t!("submitted_saved_to")), theme.hint()),
            Span::styled(path.display().to_string(), theme.accent()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(bordered_block(Line::from(""), theme, false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);

    render_hint(&t!("submitted_hint"), theme, frame, footer);
}
