//! 主题模块
//!
//! 主题在启动时由配置构造，并随应用状态传入渲染层。

use crate::config::ThemeVariant;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// 列表高亮符号
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// 主题颜色配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色
    pub accent: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,
    /// 错误色
    pub error: Color,
    /// 提示/次要文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 进度条颜色
    pub progress: Color,
    /// 标题颜色
    pub title: Color,
    /// 标签（关键词、分类）颜色
    pub tag: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            selected_bg: Color::Cyan,
            selected_fg: Color::Black,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            hint: Color::Gray,
            border: Color::Cyan,
            progress: Color::Cyan,
            title: Color::Cyan,
            tag: Color::Magenta,
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            success: Color::Green,
            warning: Color::Rgb(176, 112, 0),
            error: Color::Red,
            hint: Color::DarkGray,
            border: Color::Blue,
            progress: Color::Blue,
            title: Color::Blue,
            tag: Color::Magenta,
        }
    }

    /// 按配置选择主题
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 不可用项样式
    pub fn disabled(&self) -> Style {
        Style::new()
            .fg(self.hint)
            .bg(self.bg)
            .add_modifier(Modifier::DIM)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 强调样式
    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent).bg(self.bg)
    }

    /// 成功样式
    pub fn success(&self) -> Style {
        Style::new().fg(self.success).bg(self.bg)
    }

    /// 警告样式
    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    /// 错误样式
    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }

    /// 标签样式
    pub fn tag(&self) -> Style {
        Style::new()
            .fg(self.tag)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 进度条样式
    pub fn progress(&self) -> Style {
        Style::new().fg(self.progress).bg(self.bg)
    }

    /// 创建居中的标题行
    pub fn centered_title(&self, text: String) -> Line<'static> {
        Line::from(text).centered().style(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ() {
        let dark = Theme::from_variant(ThemeVariant::Dark);
        let light = Theme::from_variant(ThemeVariant::Light);
        assert_eq!(dark, Theme::default());
        assert_ne!(dark.bg, light.bg);
    }
}
