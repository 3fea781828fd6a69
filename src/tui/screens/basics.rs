//! 基本信息步骤渲染

use crate::campaign::{AgeBand, CampaignFormData, InfluencerTier};
use crate::tui::components::{bordered_block, render_input, tag_line};
use crate::tui::labels::{check_mark, gender_label, tier_label};
use crate::tui::state::{AppState, BasicsField, BasicsState, FieldKind};
use crate::tui::theme::{HIGHLIGHT_SYMBOL, Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use rust_i18n::t;

/// 标签列宽
const LABEL_WIDTH: usize = 24;

/// 多选字段的选项行
fn toggle_spans(
    labels: Vec<String>,
    checked: Vec<bool>,
    cursor: Option<usize>,
    theme: &Theme,
) -> Vec<Span<'static>> {
    labels
        .into_iter()
        .zip(checked)
        .enumerate()
        .flat_map(|(i, (label, on))| {
            let style = if cursor == Some(i) {
                theme.selected()
            } else if on {
                theme.success()
            } else {
                theme.normal()
            };
            [
                Span::styled(format!("{} {}", check_mark(on), label), style),
                Span::raw("  "),
            ]
        })
        .collect()
}

/// 字段值部分
fn value_spans(
    field: BasicsField,
    form: &CampaignFormData,
    basics: &BasicsState,
    focused: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let option_cursor = focused.then_some(basics.option_cursor);
    match field {
        BasicsField::AudienceAge => toggle_spans(
            AgeBand::ALL.iter().map(|a| a.label().to_string()).collect(),
            AgeBand::ALL
                .iter()
                .map(|a| form.audience_age.contains(a))
                .collect(),
            option_cursor,
            theme,
        ),
        BasicsField::InfluencerType => toggle_spans(
            InfluencerTier::ALL
                .iter()
                .map(|t| tier_label(*t).to_string())
                .collect(),
            InfluencerTier::ALL
                .iter()
                .map(|t| form.influencer_type.contains(t))
                .collect(),
            option_cursor,
            theme,
        ),
        _ if field.kind() == FieldKind::Tags => {
            let values = field.tags(form);
            if values.is_empty() {
                vec![Span::styled(t!("value_empty").to_string(), theme.hint())]
            } else {
                tag_line(values, None, theme).spans
            }
        }
        _ => {
            let text = match field {
                BasicsField::AudienceGender => gender_label(form.audience_gender).to_string(),
                BasicsField::InfluencerGender => gender_label(form.influencer_gender).to_string(),
                BasicsField::Language if form.language.is_none() => t!("language_none").to_string(),
                _ => field.display_value(form),
            };
            let text = if field.kind() == FieldKind::Choice || field.kind() == FieldKind::Language {
                format!("◀ {} ▶", text)
            } else if text.is_empty() {
                return vec![Span::styled(t!("value_empty").to_string(), theme.hint())];
            } else {
                text
            };
            vec![Span::styled(text, theme.normal())]
        }
    }
}

/// 渲染基本信息步骤
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let editing = state.basics.editing;
    let [list_area, editor_area] = if editing {
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area)
    } else {
        Layout::vertical([Constraint::Min(1), Constraint::Length(0)]).areas(area)
    };

    let theme = state.theme;
    let form = state.wizard.form();
    let current = state.basics.field();

    let items: Vec<ListItem> = BasicsField::ALL
        .iter()
        .map(|field| {
            let focused = *field == current;
            let label = format!("{:<width$}", t!(field.label_key()), width = LABEL_WIDTH);
            let label_style = if focused { theme.accent() } else { theme.hint() };
            let mut spans = vec![Span::styled(label, label_style)];
            spans.extend(value_spans(*field, form, &state.basics, focused, &theme));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(bordered_block(
            Line::from(format!(" {} ", t!("step_basics"))),
            &theme,
            !editing,
        ))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, list_area, &mut state.basics.cursor.list_state);

    if editing {
        let title = t!(current.label_key());
        if current.kind() == FieldKind::Tags {
            render_input(&state.basics.tags.pending, &title, &theme, true, frame, editor_area);
        } else {
            render_input(&state.basics.input, &title, &theme, true, frame, editor_area);
        }
    }
}
