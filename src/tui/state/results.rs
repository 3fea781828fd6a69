//! 结果步骤状态
//!
//! 候选达人列表与详情面板。选中达人后打开详情，Esc 关闭并取消选中。

use crate::campaign::mock::{InfluencerData, mock_influencers};
use crate::tui::event::TuiEvent;
use crate::tui::state::StepAction;
use crate::tui::state::selection::{Selectable, SelectionState};

/// 详情面板标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Analytics,
    Reels,
    ContentIdeas,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Analytics, DetailTab::Reels, DetailTab::ContentIdeas];

    pub fn index(&self) -> usize {
        match self {
            DetailTab::Analytics => 0,
            DetailTab::Reels => 1,
            DetailTab::ContentIdeas => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 翻译键
    pub fn title_key(&self) -> &'static str {
        match self {
            DetailTab::Analytics => "tab_analytics",
            DetailTab::Reels => "tab_reels",
            DetailTab::ContentIdeas => "tab_content_ideas",
        }
    }
}

/// 打开的详情面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPanel {
    /// 候选列表中的位置
    pub index: usize,
    pub tab: DetailTab,
}

/// 结果步骤状态
#[derive(Debug, Clone)]
pub struct ResultsState {
    pub list: SelectionState,
    pub detail: Option<DetailPanel>,
    pub candidates: Vec<InfluencerData>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsState {
    pub fn new() -> Self {
        let candidates = mock_influencers();
        Self {
            list: SelectionState::with_count(candidates.len()),
            detail: None,
            candidates,
        }
    }

    /// 详情面板中的达人
    pub fn selected_influencer(&self) -> Option<&InfluencerData> {
        self.detail.and_then(|d| self.candidates.get(d.index))
    }

    /// 打开当前光标处达人的详情，默认显示第一个标签页
    pub fn open_detail(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        self.detail = Some(DetailPanel {
            index: self.list.index(),
            tab: DetailTab::default(),
        });
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn handle(&mut self, event: &TuiEvent) -> StepAction {
        if let Some(panel) = self.detail.as_mut() {
            return match event {
                TuiEvent::Right | TuiEvent::Tab => {
                    panel.tab = panel.tab.next();
                    StepAction::Handled
                }
                TuiEvent::Left | TuiEvent::BackTab => {
                    panel.tab = panel.tab.prev();
                    StepAction::Handled
                }
                TuiEvent::Char(c @ '1'..='3') => {
                    let index = (*c as usize) - ('1' as usize);
                    panel.tab = DetailTab::ALL[index];
                    StepAction::Handled
                }
                TuiEvent::Escape => {
                    self.close_detail();
                    StepAction::Handled
                }
                _ => StepAction::Ignored,
            };
        }

        match event {
            TuiEvent::Up => {
                self.list.prev();
                StepAction::Handled
            }
            TuiEvent::Down => {
                self.list.next();
                StepAction::Handled
            }
            TuiEvent::Enter => {
                self.open_detail();
                StepAction::Handled
            }
            _ => StepAction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_switch_close() {
        let mut state = ResultsState::new();
        assert!(state.selected_influencer().is_none());

        state.handle(&TuiEvent::Down);
        state.handle(&TuiEvent::Enter);
        let selected = state.selected_influencer().map(|i| i.name);
        assert_eq!(selected, Some(state.candidates[1].name));
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::Analytics));

        state.handle(&TuiEvent::Right);
        state.handle(&TuiEvent::Right);
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::ContentIdeas));
        state.handle(&TuiEvent::Right);
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::Analytics));
        state.handle(&TuiEvent::Char('2'));
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::Reels));

        assert_eq!(state.handle(&TuiEvent::Escape), StepAction::Handled);
        assert!(state.detail.is_none());
        // Escape with no panel is left to the app
        assert_eq!(state.handle(&TuiEvent::Escape), StepAction::Ignored);
    }

    #[test]
    fn test_reopen_starts_on_first_tab() {
        let mut state = ResultsState::new();
        state.handle(&TuiEvent::Enter);
        state.handle(&TuiEvent::Left);
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::ContentIdeas));
        state.handle(&TuiEvent::Escape);
        state.handle(&TuiEvent::Enter);
        assert_eq!(state.detail.map(|d| d.tab), Some(DetailTab::Analytics));
    }
}
