//! 各屏幕渲染

pub mod basics;
pub mod exit;
pub mod keywords;
pub mod results;
pub mod submitted;
