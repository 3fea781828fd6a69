//! 关键词与分类步骤渲染

use crate::campaign::keywords::selected_categories;
use crate::campaign::{MAX_CATEGORIES, MAX_KEYWORDS};
use crate::tui::components::{bordered_block, render_input, tag_line};
use crate::tui::labels::check_mark;
use crate::tui::state::{AppState, KeywordFocus};
use crate::tui::theme::HIGHLIGHT_SYMBOL;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染关键词与分类步骤
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [keyword_area, chips_area, category_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .areas(area);
    let [search_column, selected_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(category_area);
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(search_column);

    let theme = state.theme;
    let focus = state.keywords.focus;
    let form = state.wizard.form();

    // 关键词输入
    let keyword_title = t!(
        "keywords_title",
        count = form.keywords.len(),
        max = MAX_KEYWORDS
    );
    render_input(
        &state.keywords.keyword_input,
        &keyword_title,
        &theme,
        focus == KeywordFocus::KeywordInput,
        frame,
        keyword_area,
    );

    // 已添加关键词
    let chips = if form.keywords.is_empty() {
        Line::from(t!("keywords_empty").to_string()).style(theme.hint())
    } else {
        let highlight = (focus == KeywordFocus::KeywordChips)
            .then(|| state.keywords.chip_index(form))
            .flatten();
        tag_line(form.keywords.as_slice(), highlight, &theme)
    };
    let chips_widget = Paragraph::new(chips)
        .block(bordered_block(
            Line::from(format!(" {} ", t!("keywords_added"))),
            &theme,
            focus == KeywordFocus::KeywordChips,
        ))
        .wrap(Wrap { trim: true });
    frame.render_widget(chips_widget, chips_area);

    // 分类搜索
    render_input(
        &state.keywords.search,
        &t!("category_search"),
        &theme,
        focus == KeywordFocus::CategorySearch,
        frame,
        search_area,
    );

    // 分类列表：已满时未选中的项不可用
    let full = form.categories.is_full();
    let visible = state.keywords.visible_categories();
    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(t!("category_no_match").to_string()).style(theme.hint())]
    } else {
        visible
            .iter()
            .map(|c| {
                let checked = form.categories.contains(c.id);
                let style = if checked {
                    theme.success()
                } else if full {
                    theme.disabled()
                } else {
                    theme.normal()
                };
                ListItem::new(format!("{} {}", check_mark(checked), c.title)).style(style)
            })
            .collect()
    };
    let list_focused = focus == KeywordFocus::CategoryList;
    let mut list = List::new(items)
        .block(bordered_block(
            Line::from(format!(
                " {} ",
                t!(
                    "categories_title",
                    count = form.categories.len(),
                    max = MAX_CATEGORIES
                )
            )),
            &theme,
            list_focused,
        ))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    if list_focused {
        list = list.highlight_style(theme.selected());
    }

    // 已选分类
    let selected: Vec<Line> = selected_categories(form)
        .iter()
        .map(|c| Line::from(format!("• {}", c.title)).style(theme.tag()))
        .collect();
    let selected_widget = Paragraph::new(if selected.is_empty() {
        vec![Line::from(t!("categories_empty").to_string()).style(theme.hint())]
    } else {
        selected
    })
    .block(bordered_block(
        Line::from(format!(" {} ", t!("categories_selected"))),
        &theme,
        false,
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(selected_widget, selected_area);

    frame.render_stateful_widget(list, list_area, &mut state.keywords.list.list_state);
}
