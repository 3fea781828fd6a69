//! Event handling module
//!
//! Uses crossterm for terminal event handling.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Event poll interval (milliseconds)
const TICK_RATE: u64 = 50;

/// Event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Tab key
    Tab,
    /// Shift+Tab
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Character input
    Char(char),
    /// Next wizard step (PageDown, Ctrl+N)
    NextStep,
    /// Previous wizard step (PageUp, Ctrl+P)
    PrevStep,
    /// Complete the campaign (Ctrl+S)
    Complete,
    /// Ctrl+C exit
    CtrlC,
    /// Window resize
    Resize(u16, u16),
    /// Home key
    Home,
    /// End key
    End,
    /// No event (timeout)
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => key_event.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            Event::Mouse(_) => TuiEvent::None,
            Event::FocusGained => TuiEvent::None,
            Event::FocusLost => TuiEvent::None,
            Event::Paste(_) => TuiEvent::None,
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        // Ignore non-press events
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => TuiEvent::CtrlC,
                KeyCode::Char('s') => TuiEvent::Complete,
                KeyCode::Char('n') => TuiEvent::NextStep,
                KeyCode::Char('p') => TuiEvent::PrevStep,
                _ => TuiEvent::None,
            };
        }

        match key.code {
            KeyCode::Esc => TuiEvent::Escape,
            KeyCode::Enter => TuiEvent::Enter,
            KeyCode::Up => TuiEvent::Up,
            KeyCode::Down => TuiEvent::Down,
            KeyCode::Left => TuiEvent::Left,
            KeyCode::Right => TuiEvent::Right,
            KeyCode::Tab => TuiEvent::Tab,
            KeyCode::BackTab => TuiEvent::BackTab,
            KeyCode::Backspace => TuiEvent::Backspace,
            KeyCode::Delete => TuiEvent::Delete,
            KeyCode::Char(c) => TuiEvent::Char(c),
            KeyCode::Home => TuiEvent::Home,
            KeyCode::End => TuiEvent::End,
            KeyCode::PageDown => TuiEvent::NextStep,
            KeyCode::PageUp => TuiEvent::PrevStep,
            _ => TuiEvent::None,
        }
    }
}

/// Event poller
#[derive(Debug)]
pub struct EventPoll {
    tick_rate: Duration,
}

impl EventPoll {
    /// Create new event poller
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll next event
    pub fn next(&self) -> TuiEvent {
        if event::poll(self.tick_rate).unwrap_or(false) {
            event::read()
                .unwrap_or_else(|_| Event::Key(KeyEvent::new(KeyCode::Null, KeyModifiers::empty())))
                .into()
        } else {
            TuiEvent::None
        }
    }
}

impl Default for EventPoll {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE))
    }
}
