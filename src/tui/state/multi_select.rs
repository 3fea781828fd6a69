//! 标签输入控件状态
//!
//! Enter 或逗号提交输入，值有序且不重复。不做大小写归一，也不限制数量。

use crate::tui::event::TuiEvent;
use crate::tui::state::input::InputState;

/// 标签输入
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiSelect {
    /// 待提交输入
    pub pending: InputState,
    values: Vec<String>,
}

impl MultiSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有值创建
    pub fn with_values(values: &[String]) -> Self {
        Self {
            pending: InputState::new(),
            values: values.to_vec(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// 是否为提交键
    pub fn is_commit_key(event: &TuiEvent) -> bool {
        matches!(event, TuiEvent::Enter | TuiEvent::Char(','))
    }

    /// 提交待输入内容。
    ///
    /// 去除首尾空白后为空或已存在时拒绝，保留输入；否则追加并清空输入。
    pub fn commit(&mut self) -> bool {
        let value = self.pending.value().trim().to_string();
        if value.is_empty() || self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        self.pending.clear();
        true
    }

    /// 删除第一个完全匹配的值
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(idx) => {
                self.values.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 删除最后一个值
    pub fn remove_last(&mut self) -> bool {
        match self.values.last().cloned() {
            Some(last) => self.remove(&last),
            None => false,
        }
    }

    /// 处理按键，返回值列表是否变化
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        if Self::is_commit_key(event) {
            return self.commit();
        }
        match event {
            TuiEvent::Char(c) => self.pending.insert_char(*c),
            TuiEvent::Backspace => {
                if self.pending.is_empty() {
                    return self.remove_last();
                }
                self.pending.delete_before_cursor();
            }
            TuiEvent::Delete => self.pending.delete_after_cursor(),
            TuiEvent::Left => self.pending.move_cursor_left(),
            TuiEvent::Right => self.pending.move_cursor_right(),
            TuiEvent::Home => self.pending.move_cursor_to_start(),
            TuiEvent::End => self.pending.move_cursor_to_end(),
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(select: &mut MultiSelect, text: &str) {
        for c in text.chars() {
            select.handle_event(&TuiEvent::Char(c));
        }
    }

    #[test]
    fn test_commit_on_enter_and_comma() {
        let mut select = MultiSelect::new();
        type_text(&mut select, " Mumbai ");
        assert!(select.handle_event(&TuiEvent::Enter));
        type_text(&mut select, "Pune");
        assert!(select.handle_event(&TuiEvent::Char(',')));
        assert_eq!(select.values(), ["Mumbai", "Pune"]);
        assert!(select.pending.is_empty());
    }

    #[test]
    fn test_rejects_empty_and_duplicate() {
        let mut select = MultiSelect::with_values(&["Delhi".to_string()]);
        type_text(&mut select, "   ");
        assert!(!select.commit());
        select.pending.clear();

        type_text(&mut select, "Delhi");
        assert!(!select.commit());
        // Rejected input stays pending
        assert_eq!(select.pending.value(), "Delhi");

        select.pending.clear();
        type_text(&mut select, "delhi");
        assert!(select.commit());
        assert_eq!(select.values(), ["Delhi", "delhi"]);
    }

    #[test]
    fn test_remove_first_match() {
        let mut select = MultiSelect::with_values(&["a".to_string(), "b".to_string()]);
        assert!(!select.remove("c"));
        assert!(select.remove("a"));
        assert_eq!(select.values(), ["b"]);
    }

    #[test]
    fn test_backspace_on_empty_removes_last() {
        let mut select = MultiSelect::with_values(&["a".to_string(), "b".to_string()]);
        type_text(&mut select, "x");
        assert!(!select.handle_event(&TuiEvent::Backspace));
        assert!(select.handle_event(&TuiEvent::Backspace));
        assert_eq!(select.values(), ["a"]);
    }
}
