//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的活动创建向导界面。

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use display::{display_check, display_summary};
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, Screen, TuiResult};
pub use theme::Theme;
pub use ui::render;
