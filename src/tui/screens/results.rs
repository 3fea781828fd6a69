//! 结果步骤渲染
//!
//! 左侧为活动摘要与预估效果，右侧为候选达人列表；选中达人后在列表下方
//! 显示带标签页的详情面板。

use crate::campaign::mock::{InfluencerData, PROJECTED_RESULTS};
use crate::campaign::results::{CampaignSummary, format_amount, format_compact};
use crate::tui::components::{bordered_block, wrap_lines};
use crate::tui::labels::tab_label;
use crate::tui::state::{AppState, DetailTab};
use crate::tui::theme::{HIGHLIGHT_SYMBOL, Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Tabs, Wrap},
};
use rust_i18n::t;

/// 达人报价使用的货币符号
const PRICE_SYMBOL: &str = "₹";

/// `标签: 值` 行
fn field_line(label: impl Into<String>, value: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label.into()), theme.hint()),
        Span::styled(value.into(), theme.normal()),
    ])
}

fn join_or_dash(values: &[impl AsRef<str>]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn summary_lines(summary: &CampaignSummary, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        field_line(t!("field_objective"), summary.objective.clone(), theme),
        field_line(t!("field_budget_amount"), summary.budget.clone(), theme),
        field_line(t!("field_audience_gender"), summary.audience_gender, theme),
        field_line(
            t!("summary_audience_location"),
            summary.audience_location.clone(),
            theme,
        ),
        field_line(
            t!("summary_influencer_location"),
            summary.influencer_location.clone(),
            theme,
        ),
        field_line(t!("field_audience_age"), join_or_dash(&summary.age_groups), theme),
        field_line(
            t!("field_influencer_type"),
            join_or_dash(&summary.influencer_types),
            theme,
        ),
        field_line(t!("summary_keywords"), summary.keywords.join(" "), theme),
        field_line(t!("summary_categories"), join_or_dash(&summary.categories), theme),
    ]
}

fn projection_lines(theme: &Theme) -> Vec<Line<'static>> {
    let p = PROJECTED_RESULTS;
    vec![
        field_line(t!("projected_reach"), p.est_reach, theme),
        field_line(t!("projected_engagement"), p.est_engagement, theme),
        field_line(
            t!("projected_audience_match"),
            format!("{}%", p.audience_match),
            theme,
        ),
        field_line(
            t!("projected_content_relevance"),
            format!("{}%", p.content_relevance),
            theme,
        ),
        field_line(
            t!("projected_success_score"),
            format!("{}/10", p.success_score),
            theme,
        ),
    ]
}

/// 分析标签页
fn analytics_lines(influencer: &InfluencerData, theme: &Theme) -> Vec<Line<'static>> {
    let prices = &influencer.prices;
    let price = |amount: u64| format!("{}{}", PRICE_SYMBOL, format_amount(amount as f64));
    vec![
        field_line(t!("detail_followers"), format_compact(influencer.followers), theme),
        field_line(
            t!("detail_engagement_rate"),
            format!("{}%", influencer.engagement_rate),
            theme,
        ),
        field_line(t!("detail_posts"), influencer.post_count.to_string(), theme),
        field_line(t!("detail_avg_likes"), format_compact(influencer.avg_likes), theme),
        field_line(
            t!("detail_avg_comments"),
            format_compact(influencer.avg_comments),
            theme,
        ),
        field_line(
            t!("detail_authenticity"),
            format!("{}%", influencer.audience_authenticity),
            theme,
        ),
        field_line(t!("detail_audience_geo"), influencer.audience_geo, theme),
        Line::from(""),
        field_line(t!("detail_price_post"), price(prices.post), theme),
        field_line(t!("detail_price_stories"), price(prices.stories), theme),
        field_line(t!("detail_price_video"), price(prices.video), theme),
        field_line(
            "CPM / CPE",
            format!(
                "{}{} / {}{}",
                PRICE_SYMBOL, prices.cpm, PRICE_SYMBOL, prices.cpe
            ),
            theme,
        ),
        Line::from(""),
        field_line(
            t!("detail_final_score"),
            format!("{}/10", influencer.final_score),
            theme,
        ),
        field_line(
            t!("detail_score_breakdown"),
            format!(
                "{} {} · {} {} · {} {} · {} {}",
                t!("score_content_affinity"),
                influencer.content_affinity,
                t!("score_audience_match"),
                influencer.audience_match,
                t!("score_past_performance"),
                influencer.past_performance,
                t!("score_engagement"),
                influencer.engagement_score
            ),
            theme,
        ),
    ]
}

/// 短视频标签页
fn reels_lines(influencer: &InfluencerData, theme: &Theme) -> Vec<Line<'static>> {
    let reels = influencer.instagram_reels;
    vec![
        field_line(t!("reels_count"), reels.count.to_string(), theme),
        field_line(t!("reels_avg_views"), format_compact(reels.avg_views), theme),
    ]
}

/// 内容创意标签页
fn idea_lines(influencer: &InfluencerData, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for idea in &influencer.content_ideas {
        lines.push(Line::from(idea.title).style(theme.title()));
        lines.extend(wrap_lines(idea.description, width));
        lines.push(Line::from(idea.hashtags.join(" ")).style(theme.tag()));
        lines.push(field_line(t!("idea_cta"), idea.cta.join(" · "), theme));
        lines.push(Line::from(""));
    }
    lines
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    influencer: &InfluencerData,
    tab: DetailTab,
    theme: &Theme,
) {
    let block = bordered_block(
        Line::from(format!(" {} (@{}) ", influencer.name, influencer.id)),
        theme,
        true,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    let titles: Vec<Line> = DetailTab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, tab_label(*t))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(tab.index())
        .style(theme.hint())
        .highlight_style(theme.selected());
    frame.render_widget(tabs, tabs_area);

    let lines = match tab {
        DetailTab::Analytics => analytics_lines(influencer, theme),
        DetailTab::Reels => reels_lines(influencer, theme),
        DetailTab::ContentIdeas => idea_lines(influencer, theme, content_area.width as usize),
    };
    let content = Paragraph::new(lines)
        .style(theme.normal())
        .wrap(Wrap { trim: false });
    frame.render_widget(content, content_area);
}

/// 渲染结果步骤
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    let [summary_area, projection_area] =
        Layout::vertical([Constraint::Min(11), Constraint::Length(7)]).areas(left);

    let theme = state.theme;
    let summary = CampaignSummary::from_form(state.wizard.form());

    let summary_widget = Paragraph::new(summary_lines(&summary, &theme))
        .block(bordered_block(
            Line::from(format!(" {} ", t!("summary_title"))),
            &theme,
            false,
        ))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary_widget, summary_area);

    let projection_widget = Paragraph::new(projection_lines(&theme)).block(bordered_block(
        Line::from(format!(" {} ", t!("projected_title"))),
        &theme,
        false,
    ));
    frame.render_widget(projection_widget, projection_area);

    let list_height = state.results.candidates.len() as u16 + 2;
    let [list_area, detail_area] = if state.results.detail.is_some() {
        Layout::vertical([Constraint::Length(list_height), Constraint::Min(1)]).areas(right)
    } else {
        Layout::vertical([Constraint::Min(1), Constraint::Length(0)]).areas(right)
    };

    let items: Vec<ListItem> = state
        .results
        .candidates
        .iter()
        .map(|i| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{} ", i.rank), theme.accent()),
                Span::styled(i.name.to_string(), theme.normal()),
                Span::styled(
                    format!(
                        "  {} · {} · {}%",
                        i.category,
                        format_compact(i.followers),
                        i.engagement_rate
                    ),
                    theme.hint(),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(bordered_block(
            Line::from(format!(" {} ", t!("candidates_title"))),
            &theme,
            state.results.detail.is_none(),
        ))
        .highlight_style(theme.selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, list_area, &mut state.results.list.list_state);

    if let (Some(panel), Some(influencer)) =
        (state.results.detail, state.results.selected_influencer())
    {
        draw_detail(frame, detail_area, influencer, panel.tab, &theme);
    }
}
