//! 输入状态

use unicode_width::UnicodeWidthStr;

/// 单行文本输入状态
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// 新建输入状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用初始值创建，光标置于末尾
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
            cursor: value.len(),
        }
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// 插入字符
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// 删除光标前字符，返回是否有删除
    pub fn delete_before_cursor(&mut self) -> bool {
        let Some(prev) = self.buffer[..self.cursor].chars().last() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.buffer.remove(self.cursor);
        true
    }

    /// 删除光标后字符
    pub fn delete_after_cursor(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.buffer.drain(self.cursor..self.cursor + next.len_utf8());
        }
    }

    /// 光标左移
    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().last() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// 光标右移
    pub fn move_cursor_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// 移动到行首
    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    /// 移动到行尾
    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// 光标可视位置（按显示宽度）
    pub fn visual_cursor_position(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// 获取当前值
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// 光标前后两段，用于渲染
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut input = InputState::new();
        for c in "护肤a".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "护肤a");
        assert_eq!(input.visual_cursor_position(), 5);

        input.move_cursor_left();
        assert!(input.delete_before_cursor());
        assert_eq!(input.value(), "护a");
        assert_eq!(input.split_at_cursor(), ("护", "a"));

        input.delete_after_cursor();
        assert_eq!(input.value(), "护");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::with_value("glow");
        input.clear();
        assert!(input.is_empty());
        assert!(!input.delete_before_cursor());
        assert_eq!(input.visual_cursor_position(), 0);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputState::with_value("ab");
        input.move_cursor_right();
        assert_eq!(input.split_at_cursor(), ("ab", ""));
        input.move_cursor_to_start();
        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.value(), "xab");
        input.move_cursor_to_end();
        input.insert_char('y');
        assert_eq!(input.value(), "xaby");
    }
}
