//! TUI application main module
//!
//! Contains TUI application creation and running logic.

use crate::campaign::{CampaignFormData, SubmissionSink};
use crate::tui::event::{EventPoll, TuiEvent};
use crate::tui::state::{AppState, TuiResult};
use crate::tui::theme::Theme;
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

/// TUI application
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
    /// Receives the form on completion
    sink: Box<dyn SubmissionSink>,
}

impl TuiApp {
    /// Create new TUI application
    ///
    /// `submit_target` is only displayed; the sink decides where the form goes.
    pub fn new(
        form: CampaignFormData,
        theme: Theme,
        sink: Box<dyn SubmissionSink>,
        submit_target: Option<PathBuf>,
    ) -> std::io::Result<Self> {
        let terminal = ratatui::init();
        let event_poll = EventPoll::default();
        let state = AppState::new(form, theme, submit_target);

        Ok(Self {
            terminal,
            event_poll,
            state,
            sink,
        })
    }

    /// Run application until the user exits
    pub fn run(&mut self) -> std::io::Result<TuiResult> {
        info!(step = ?self.state.wizard.current_step(), "Interactive wizard started");

        let outcome = self.event_loop();

        ratatui::restore();
        outcome?;

        let result = self.state.result();
        debug!(submitted = result.submitted, "Interactive wizard finished");
        Ok(result)
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        // Initial render
        render(&mut self.terminal, &mut self.state)?;

        loop {
            match self.event_poll.next() {
                TuiEvent::None => continue,
                event => {
                    if self.state.handle_event(event, self.sink.as_mut()) {
                        break;
                    }
                    render(&mut self.terminal, &mut self.state)?;
                }
            }
        }
        Ok(())
    }
}
