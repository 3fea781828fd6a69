//! 通用选择状态

use ratatui::widgets::ListState;

/// 可选择列表通用行为
pub trait Selectable {
    /// 总选项数
    fn count(&self) -> usize;
    /// 获取列表状态引用
    fn list_state(&self) -> &ListState;
    /// 获取列表状态可变引用
    fn list_state_mut(&mut self) -> &mut ListState;

    /// 选择下一个（循环）
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let i = self.list_state().selected().unwrap_or(0);
        self.list_state_mut().select(Some((i + 1) % count));
    }

    /// 选择上一个（循环）
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let i = self.list_state().selected().unwrap_or(0);
        let prev = if i == 0 { count - 1 } else { i - 1 };
        self.list_state_mut().select(Some(prev));
    }

    /// 获取当前选中索引
    fn selected(&self) -> Option<usize> {
        self.list_state().selected()
    }
}

/// 列表选择状态
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    /// Ratatui 列表状态
    pub list_state: ListState,
    /// 总选项数
    pub count: usize,
}

impl SelectionState {
    /// 创建选择状态，默认选中第一项
    pub fn with_count(count: usize) -> Self {
        let mut state = Self {
            list_state: ListState::default(),
            count: 0,
        };
        state.set_count(count);
        state
    }

    /// 更新选项数，选中项越界时收回到末项
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.min(count - 1)));
    }

    /// 选中索引（空列表时为 0）
    pub fn index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// 设置选中索引
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            self.list_state.select(None);
            return;
        }
        self.list_state.select(Some(index.min(self.count - 1)));
    }
}

impl Selectable for SelectionState {
    fn count(&self) -> usize {
        self.count
    }

    fn list_state(&self) -> &ListState {
        &self.list_state
    }

    fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_around() {
        let mut state = SelectionState::with_count(3);
        state.prev();
        assert_eq!(state.index(), 2);
        state.next();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_set_count_clamps() {
        let mut state = SelectionState::with_count(10);
        state.select(8);
        state.set_count(4);
        assert_eq!(state.index(), 3);
        state.set_count(0);
        assert_eq!(state.selected(), None);
        state.next();
        assert_eq!(state.selected(), None);
        state.set_count(2);
        assert_eq!(state.selected(), Some(0));
    }
}
