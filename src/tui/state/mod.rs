//! TUI 状态模块

pub mod app;
pub mod basics;
pub mod input;
pub mod keywords;
pub mod multi_select;
pub mod results;
pub mod selection;

pub use app::{AppState, Screen, TuiResult};
pub use basics::{BasicsField, BasicsState, FieldKind};
pub use input::InputState;
pub use keywords::{KeywordFocus, KeywordsState};
pub use multi_select::MultiSelect;
pub use results::{DetailPanel, DetailTab, ResultsState};
pub use selection::{Selectable, SelectionState};

use crate::campaign::FormPatch;

/// 步骤对按键的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// 未处理，交给应用层（切换步骤、退出等）
    Ignored,
    /// 已处理，表单不变
    Handled,
    /// 需要合并到表单的补丁
    Update(FormPatch),
    /// 输入被拒绝，附带提示的翻译键
    Rejected(&'static str),
}
