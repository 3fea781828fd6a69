//! 关键词与分类步骤状态

use crate::campaign::catalog::{CATEGORIES, InfluencerCategory};
use crate::campaign::form::CampaignFormData;
use crate::campaign::keywords::{add_keyword, filter_categories, remove_keyword, toggle_category};
use crate::tui::event::TuiEvent;
use crate::tui::state::StepAction;
use crate::tui::state::input::InputState;
use crate::tui::state::selection::{Selectable, SelectionState};

/// 焦点区域，Tab 循环切换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordFocus {
    #[default]
    KeywordInput,
    KeywordChips,
    CategorySearch,
    CategoryList,
}

impl KeywordFocus {
    const ORDER: [KeywordFocus; 4] = [
        KeywordFocus::KeywordInput,
        KeywordFocus::KeywordChips,
        KeywordFocus::CategorySearch,
        KeywordFocus::CategoryList,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// 关键词与分类步骤状态
#[derive(Debug, Clone)]
pub struct KeywordsState {
    pub focus: KeywordFocus,
    /// 关键词输入
    pub keyword_input: InputState,
    /// 已添加关键词中的光标
    pub chip_cursor: usize,
    /// 分类搜索
    pub search: InputState,
    /// 过滤后分类列表的光标
    pub list: SelectionState,
}

impl Default for KeywordsState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordsState {
    pub fn new() -> Self {
        Self {
            focus: KeywordFocus::default(),
            keyword_input: InputState::new(),
            chip_cursor: 0,
            search: InputState::new(),
            list: SelectionState::with_count(CATEGORIES.len()),
        }
    }

    /// 当前搜索条件下的分类
    pub fn visible_categories(&self) -> Vec<&'static InfluencerCategory> {
        filter_categories(self.search.value())
    }

    /// 是否正在接收文本输入
    pub fn is_capturing_text(&self) -> bool {
        matches!(
            self.focus,
            KeywordFocus::KeywordInput | KeywordFocus::CategorySearch
        )
    }

    /// 关键词光标，按当前关键词数收回
    pub fn chip_index(&self, form: &CampaignFormData) -> Option<usize> {
        let len = form.keywords.len();
        (len > 0).then(|| self.chip_cursor.min(len - 1))
    }

    /// 处理按键
    pub fn handle(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        match event {
            TuiEvent::Tab => {
                self.focus = self.focus.next();
                return StepAction::Handled;
            }
            TuiEvent::BackTab => {
                self.focus = self.focus.prev();
                return StepAction::Handled;
            }
            _ => {}
        }

        match self.focus {
            KeywordFocus::KeywordInput => self.handle_keyword_input(event, form),
            KeywordFocus::KeywordChips => self.handle_chips(event, form),
            KeywordFocus::CategorySearch => self.handle_search(event),
            KeywordFocus::CategoryList => self.handle_list(event, form),
        }
    }

    fn handle_keyword_input(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        match event {
            TuiEvent::Enter => {
                let text = self.keyword_input.value().to_string();
                if text.trim().is_empty() {
                    return StepAction::Handled;
                }
                match add_keyword(form, &text) {
                    Some(patch) => {
                        self.keyword_input.clear();
                        StepAction::Update(patch)
                    }
                    None if form.keywords.is_full() => StepAction::Rejected("keyword_limit"),
                    None => StepAction::Rejected("keyword_duplicate"),
                }
            }
            TuiEvent::Down => {
                self.focus = KeywordFocus::KeywordChips;
                StepAction::Handled
            }
            _ => edit_input(&mut self.keyword_input, event),
        }
    }

    fn handle_chips(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        let Some(index) = self.chip_index(form) else {
            return match event {
                TuiEvent::Up => {
                    self.focus = KeywordFocus::KeywordInput;
                    StepAction::Handled
                }
                _ => StepAction::Ignored,
            };
        };

        match event {
            TuiEvent::Left => {
                self.chip_cursor = index.saturating_sub(1);
                StepAction::Handled
            }
            TuiEvent::Right => {
                self.chip_cursor = (index + 1).min(form.keywords.len() - 1);
                StepAction::Handled
            }
            TuiEvent::Up => {
                self.focus = KeywordFocus::KeywordInput;
                StepAction::Handled
            }
            TuiEvent::Delete | TuiEvent::Backspace | TuiEvent::Enter => {
                let keyword = form.keywords.as_slice()[index].clone();
                match remove_keyword(form, &keyword) {
                    Some(patch) => {
                        self.chip_cursor = index.saturating_sub(1);
                        StepAction::Update(patch)
                    }
                    None => StepAction::Handled,
                }
            }
            _ => StepAction::Ignored,
        }
    }

    fn handle_search(&mut self, event: &TuiEvent) -> StepAction {
        if *event == TuiEvent::Down || *event == TuiEvent::Enter {
            self.focus = KeywordFocus::CategoryList;
            return StepAction::Handled;
        }

        let before = self.search.value().to_string();
        let action = edit_input(&mut self.search, event);
        if self.search.value() != before {
            self.list.set_count(self.visible_categories().len());
            self.list.select(0);
        }
        action
    }

    fn handle_list(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        match event {
            TuiEvent::Up if self.list.index() == 0 => {
                self.focus = KeywordFocus::CategorySearch;
                StepAction::Handled
            }
            TuiEvent::Up => {
                self.list.prev();
                StepAction::Handled
            }
            TuiEvent::Down => {
                self.list.next();
                StepAction::Handled
            }
            TuiEvent::Enter | TuiEvent::Char(' ') => {
                let visible = self.visible_categories();
                let Some(category) = visible.get(self.list.index()) else {
                    return StepAction::Handled;
                };
                let selected = !form.categories.contains(category.id);
                match toggle_category(form, category.id, selected) {
                    Some(patch) => StepAction::Update(patch),
                    None => StepAction::Rejected("category_limit"),
                }
            }
            _ => StepAction::Ignored,
        }
    }
}

/// 文本框通用编辑；Esc 清空非空输入，空输入时交给应用层
fn edit_input(input: &mut InputState, event: &TuiEvent) -> StepAction {
    match event {
        TuiEvent::Char(c) => input.insert_char(*c),
        TuiEvent::Backspace => {
            input.delete_before_cursor();
        }
        TuiEvent::Delete => input.delete_after_cursor(),
        TuiEvent::Left => input.move_cursor_left(),
        TuiEvent::Right => input.move_cursor_right(),
        TuiEvent::Home => input.move_cursor_to_start(),
        TuiEvent::End => input.move_cursor_to_end(),
        TuiEvent::Escape if !input.is_empty() => input.clear(),
        _ => return StepAction::Ignored,
    }
    StepAction::Handled
}
