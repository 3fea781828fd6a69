//! UI渲染模块
//!
//! 按当前屏幕分发渲染，向导屏幕共享标题、进度条和底部提示。

use crate::campaign::WizardStep;
use crate::tui::components::{render_hint, render_step_gauge, render_title_block};
use crate::tui::screens;
use crate::tui::state::app::{Notice, NoticeLevel};
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::Theme;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
};
use rust_i18n::t;

/// 设置全局背景（使用Style）
fn set_background(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let style = Style::new().bg(theme.bg);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, frame.area(), state))?;
    Ok(())
}

/// 主渲染函数
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.theme;
    set_background(area, frame.buffer_mut(), &theme);

    match state.screen {
        Screen::Wizard => draw_wizard(frame, area, state),
        Screen::Submitted => screens::submitted::draw(frame, area, state),
        Screen::ExitConfirm => {
            screens::exit::draw(frame, area, &theme, state.wizard.is_completed())
        }
    }
}

/// 当前步骤的按键提示
fn step_hint(state: &AppState) -> String {
    let step = state.wizard.current_step();
    let key = match step {
        WizardStep::Basics if state.basics.editing => "hint_basics_editing",
        WizardStep::Basics => "hint_basics",
        WizardStep::KeywordsCategories => "hint_keywords",
        WizardStep::Results if state.results.detail.is_some() => "hint_results_detail",
        WizardStep::Results => "hint_results",
    };
    t!(key).to_string()
}

fn notice_line(notice: &Notice, theme: &Theme) -> Line<'static> {
    let style = match notice.level {
        NoticeLevel::Warning => theme.warning(),
        NoticeLevel::Error => theme.error(),
    };
    Line::from(notice.message.clone()).style(style)
}

/// 绘制向导屏幕
fn draw_wizard(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, gauge, description, body, notice, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    let theme = state.theme;
    let step = state.wizard.current_step();

    render_title_block(&t!("app_title"), &theme, frame, header);
    render_step_gauge(step, &theme, frame, gauge);
    frame.render_widget(
        Line::from(t!(step.description_key()).to_string()).style(theme.hint()),
        description,
    );

    match step {
        WizardStep::Basics => screens::basics::draw(frame, body, state),
        WizardStep::KeywordsCategories => screens::keywords::draw(frame, body, state),
        WizardStep::Results => screens::results::draw(frame, body, state),
    }

    if let Some(ref n) = state.notice {
        frame.render_widget(notice_line(n, &theme), notice);
    } else if !state.wizard.can_advance(step) && !step.is_terminal() {
        frame.render_widget(
            Line::from(t!("step_incomplete").to_string()).style(theme.hint()),
            notice,
        );
    }

    render_hint(&step_hint(state), &theme, frame, footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignFormData;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(state: &mut AppState) -> String {
        let backend = TestBackend::new(120, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), state))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn ready_form() -> CampaignFormData {
        let mut form = CampaignFormData::default();
        form.objective = "Launch".into();
        form.campaign_budget.amount = 50_000.0;
        form.keywords.add("glow");
        form.categories.toggle(2, true);
        form
    }

    #[test]
    fn test_render_every_step() {
        let mut state = AppState::new(ready_form(), Theme::default(), None);
        let text = render_to_text(&mut state);
        assert!(text.contains("Launch"));

        assert!(state.wizard.advance());
        let text = render_to_text(&mut state);
        assert!(text.contains("[glow]"));
        assert!(text.contains("Makeup"));

        assert!(state.wizard.advance());
        let text = render_to_text(&mut state);
        assert!(text.contains("Sarah Beauty"));
        assert!(text.contains("50,000"));
    }

    #[test]
    fn test_render_detail_panel() {
        let mut state = AppState::new(ready_form(), Theme::default(), None);
        state.wizard.advance();
        state.wizard.advance();
        state.results.open_detail();
        let text = render_to_text(&mut state);
        assert!(text.contains("sarah_beauty_official"));
        assert!(text.contains("125.0K"));
    }

    #[test]
    fn test_render_exit_and_submitted() {
        let mut state = AppState::new(ready_form(), Theme::default(), None);
        state.screen = Screen::ExitConfirm;
        render_to_text(&mut state);
        state.screen = Screen::Submitted;
        let text = render_to_text(&mut state);
        assert!(text.contains("#glow"));
    }
}
