//! 应用状态

use crate::campaign::{CampaignFormData, SubmissionSink, WizardController, WizardStep};
use crate::tui::event::TuiEvent;
use crate::tui::state::StepAction;
use crate::tui::state::basics::BasicsState;
use crate::tui::state::keywords::KeywordsState;
use crate::tui::state::results::ResultsState;
use crate::tui::theme::Theme;
use rust_i18n::t;
use std::path::PathBuf;
use tracing::{error, warn};

/// 屏幕类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 向导步骤
    #[default]
    Wizard,
    /// 提交完成
    Submitted,
    /// 退出确认
    ExitConfirm,
}

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// 底部提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// TUI 运行结果
#[derive(Debug, Clone)]
pub struct TuiResult {
    /// 最终表单
    pub form: CampaignFormData,
    /// 是否已提交
    pub submitted: bool,
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub screen: Screen,
    /// 向导控制器
    pub wizard: WizardController,
    pub basics: BasicsState,
    pub keywords: KeywordsState,
    pub results: ResultsState,
    /// 渲染主题
    pub theme: Theme,
    /// 底部提示
    pub notice: Option<Notice>,
    /// 提交写入的文件
    pub submit_target: Option<PathBuf>,
    /// 是否退出
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CampaignFormData::default(), Theme::default(), None)
    }
}

impl AppState {
    pub fn new(form: CampaignFormData, theme: Theme, submit_target: Option<PathBuf>) -> Self {
        Self {
            screen: Screen::Wizard,
            wizard: WizardController::with_form(form),
            basics: BasicsState::new(),
            keywords: KeywordsState::new(),
            results: ResultsState::new(),
            theme,
            notice: None,
            submit_target,
            should_exit: false,
        }
    }

    /// 当前步骤是否在接收文本输入
    pub fn is_capturing_text(&self) -> bool {
        match self.wizard.current_step() {
            WizardStep::Basics => self.basics.is_capturing_text(),
            WizardStep::KeywordsCategories => self.keywords.is_capturing_text(),
            WizardStep::Results => false,
        }
    }

    /// 运行结果快照
    pub fn result(&self) -> TuiResult {
        TuiResult {
            form: self.wizard.form().clone(),
            submitted: self.wizard.is_completed(),
        }
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        });
    }

    /// 处理事件，返回是否退出
    pub fn handle_event(&mut self, event: TuiEvent, sink: &mut dyn SubmissionSink) -> bool {
        if matches!(event, TuiEvent::None | TuiEvent::Resize(_, _)) {
            return false;
        }
        if event == TuiEvent::CtrlC {
            self.should_exit = true;
            return true;
        }

        match self.screen {
            Screen::Wizard => self.handle_wizard(event, sink),
            Screen::Submitted => self.handle_submitted(event),
            Screen::ExitConfirm => self.handle_exit_confirm(event),
        }
        self.should_exit
    }

    fn handle_wizard(&mut self, event: TuiEvent, sink: &mut dyn SubmissionSink) {
        self.notice = None;

        let form = self.wizard.form();
        let action = match self.wizard.current_step() {
            WizardStep::Basics => self.basics.handle(&event, form),
            WizardStep::KeywordsCategories => self.keywords.handle(&event, form),
            WizardStep::Results => self.results.handle(&event),
        };

        match action {
            StepAction::Handled => {}
            StepAction::Update(patch) => self.wizard.update(patch),
            StepAction::Rejected(key) => {
                let message = t!(key).to_string();
                self.warn(message);
            }
            StepAction::Ignored => self.handle_navigation(event, sink),
        }
    }

    /// 步骤未处理的按键：切换步骤、提交、退出
    fn handle_navigation(&mut self, event: TuiEvent, sink: &mut dyn SubmissionSink) {
        let step = self.wizard.current_step();
        match event {
            TuiEvent::NextStep => {
                if !step.is_terminal() && !self.wizard.advance() {
                    self.warn(t!("step_blocked", step = t!(step.title_key())));
                }
            }
            TuiEvent::PrevStep => {
                self.wizard.retreat();
            }
            TuiEvent::Complete => self.submit(sink),
            TuiEvent::Char('c') if step.is_terminal() => self.submit(sink),
            TuiEvent::Escape => self.screen = Screen::ExitConfirm,
            TuiEvent::Char('q') if !self.is_capturing_text() => {
                self.screen = Screen::ExitConfirm;
            }
            _ => {}
        }
    }

    fn submit(&mut self, sink: &mut dyn SubmissionSink) {
        if !self.wizard.current_step().is_terminal() {
            self.warn(t!("complete_not_ready"));
            return;
        }
        match self.wizard.complete(sink) {
            Ok(()) => self.screen = Screen::Submitted,
            Err(e) => {
                error!(error = %e, "Campaign submission failed");
                self.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    message: t!("submit_failed", error = e.to_string()).to_string(),
                });
            }
        }
    }

    fn handle_submitted(&mut self, event: TuiEvent) {
        if matches!(
            event,
            TuiEvent::Enter | TuiEvent::Escape | TuiEvent::Char('q')
        ) {
            self.should_exit = true;
        }
    }

    fn handle_exit_confirm(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::Enter => {
                if !self.wizard.is_completed() {
                    warn!(step = ?self.wizard.current_step(), "Wizard closed before completion");
                }
                self.should_exit = true;
            }
            TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
                self.screen = Screen::Wizard;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    #[derive(Default)]
    struct RecordingSink {
        received: Vec<CampaignFormData>,
        fail: bool,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&mut self, form: &CampaignFormData) -> Result<()> {
            if self.fail {
                return Err(Error::Submission("disk full".into()));
            }
            self.received.push(form.clone());
            Ok(())
        }
    }

    fn send_all(state: &mut AppState, sink: &mut RecordingSink, events: &[TuiEvent]) {
        for event in events {
            state.handle_event(event.clone(), sink);
        }
    }

    fn type_text(state: &mut AppState, sink: &mut RecordingSink, text: &str) {
        let events: Vec<_> = text.chars().map(TuiEvent::Char).collect();
        send_all(state, sink, &events);
    }

    /// 填写目标和预算，停在第一步
    fn fill_basics(state: &mut AppState, sink: &mut RecordingSink) {
        state.handle_event(TuiEvent::Enter, sink);
        type_text(state, sink, "Launch");
        state.handle_event(TuiEvent::Enter, sink);

        let budget_row = 7;
        for _ in 0..budget_row {
            state.handle_event(TuiEvent::Down, sink);
        }
        state.handle_event(TuiEvent::Enter, sink);
        type_text(state, sink, "50000");
        state.handle_event(TuiEvent::Enter, sink);
    }

    #[test]
    fn test_blocked_advance_shows_notice() {
        let mut state = AppState::default();
        let mut sink = RecordingSink::default();

        state.handle_event(TuiEvent::NextStep, &mut sink);
        assert_eq!(state.wizard.current_step(), WizardStep::Basics);
        assert_eq!(
            state.notice.as_ref().map(|n| n.level),
            Some(NoticeLevel::Warning)
        );
    }

    #[test]
    fn test_full_walkthrough() {
        let mut state = AppState::default();
        let mut sink = RecordingSink::default();

        fill_basics(&mut state, &mut sink);
        assert_eq!(state.wizard.form().objective, "Launch");
        assert_eq!(state.wizard.form().campaign_budget.amount, 50000.0);

        state.handle_event(TuiEvent::NextStep, &mut sink);
        assert_eq!(state.wizard.current_step(), WizardStep::KeywordsCategories);

        // Still blocked without keywords and categories
        state.handle_event(TuiEvent::NextStep, &mut sink);
        assert_eq!(state.wizard.current_step(), WizardStep::KeywordsCategories);

        type_text(&mut state, &mut sink, "glow");
        state.handle_event(TuiEvent::Enter, &mut sink);
        send_all(
            &mut state,
            &mut sink,
            &[TuiEvent::Tab, TuiEvent::Tab, TuiEvent::Tab, TuiEvent::Enter],
        );
        assert_eq!(state.wizard.form().keywords.as_slice(), ["glow"]);
        assert_eq!(state.wizard.form().categories.ids(), [1]);

        state.handle_event(TuiEvent::NextStep, &mut sink);
        assert_eq!(state.wizard.current_step(), WizardStep::Results);

        state.handle_event(TuiEvent::Char('c'), &mut sink);
        assert_eq!(state.screen, Screen::Submitted);
        assert_eq!(sink.received.len(), 1);
        assert_eq!(sink.received[0].objective, "Launch");
        assert!(state.result().submitted);

        assert!(state.handle_event(TuiEvent::Enter, &mut sink));
    }

    #[test]
    fn test_complete_before_last_step_is_rejected() {
        let mut state = AppState::default();
        let mut sink = RecordingSink::default();
        state.handle_event(TuiEvent::Complete, &mut sink);
        assert!(sink.received.is_empty());
        assert_eq!(state.screen, Screen::Wizard);
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_submission_failure_keeps_wizard_open() {
        let mut form = CampaignFormData::default();
        form.objective = "Launch".into();
        form.campaign_budget.amount = 10.0;
        form.keywords.add("glow");
        form.categories.toggle(1, true);

        let mut state = AppState::new(form, Theme::default(), None);
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        send_all(
            &mut state,
            &mut sink,
            &[TuiEvent::NextStep, TuiEvent::NextStep, TuiEvent::Complete],
        );
        assert_eq!(state.wizard.current_step(), WizardStep::Results);
        assert_eq!(state.screen, Screen::Wizard);
        assert_eq!(
            state.notice.as_ref().map(|n| n.level),
            Some(NoticeLevel::Error)
        );
        assert!(!state.result().submitted);
    }

    #[test]
    fn test_exit_confirm() {
        let mut state = AppState::default();
        let mut sink = RecordingSink::default();

        assert!(!state.handle_event(TuiEvent::Escape, &mut sink));
        assert_eq!(state.screen, Screen::ExitConfirm);
        assert!(!state.handle_event(TuiEvent::Char('n'), &mut sink));
        assert_eq!(state.screen, Screen::Wizard);

        state.handle_event(TuiEvent::Escape, &mut sink);
        assert!(state.handle_event(TuiEvent::Char('y'), &mut sink));
    }

    #[test]
    fn test_escape_while_editing_stays_in_wizard() {
        let mut state = AppState::default();
        let mut sink = RecordingSink::default();
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert!(state.is_capturing_text());
        state.handle_event(TuiEvent::Escape, &mut sink);
        assert_eq!(state.screen, Screen::Wizard);
        assert!(!state.is_capturing_text());
    }
}
