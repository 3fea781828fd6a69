//! Common UI components module
//!
//! Provides reusable UI components to avoid code duplication.

use crate::campaign::WizardStep;
use crate::tui::state::InputState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Wrap},
};
use rust_i18n::t;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Rounded block with the theme border
pub fn bordered_block<'a>(title: impl Into<Line<'a>>, theme: &Theme, focused: bool) -> Block<'a> {
    let border_style = if focused {
        theme.accent()
    } else {
        theme.border()
    };
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme.normal())
}

/// Render a centered title block with border
pub fn render_title_block(title: &str, theme: &Theme, frame: &mut Frame, area: Rect) {
    let title_line = theme.centered_title(format!(" {} ", title));

    let block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.normal());

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, theme: &Theme, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme.hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// 步骤进度条：`步骤 2/3 · 关键词与分类`
pub fn render_step_gauge(step: WizardStep, theme: &Theme, frame: &mut Frame, area: Rect) {
    let total = WizardStep::ALL.len();
    let position = step.index() + 1;
    let label = t!(
        "step_progress",
        current = position,
        total = total,
        title = t!(step.title_key())
    );
    let gauge = Gauge::default()
        .block(bordered_block(Line::from(""), theme, false))
        .gauge_style(theme.progress())
        .ratio(position as f64 / total as f64)
        .label(Span::styled(label.to_string(), theme.title()));
    frame.render_widget(gauge, area);
}

/// 带边框的单行输入框；`focused` 时显示光标
pub fn render_input(
    input: &InputState,
    title: &str,
    theme: &Theme,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let paragraph = Paragraph::new(input.value())
        .block(bordered_block(Line::from(format!(" {} ", title)), theme, focused))
        .style(theme.normal());
    frame.render_widget(paragraph, area);

    if focused {
        let cursor_x = area.x + 1 + input.visual_cursor_position() as u16;
        let cursor_y = area.y + 1;
        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position(Position {
                x: cursor_x,
                y: cursor_y,
            });
        }
    }
}

/// 标签行：`[a] [b] [c]`，`highlight` 指定的标签使用选中样式
pub fn tag_line(values: &[String], highlight: Option<usize>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(values.len() * 2);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if highlight == Some(i) {
            theme.selected()
        } else {
            theme.tag()
        };
        spans.push(Span::styled(format!("[{}]", value), style));
    }
    Line::from(spans)
}

/// 按显示宽度截断文本，避免 UTF-8 边界问题
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output.push_str("...");
    output
}

/// 按显示宽度换行
pub fn wrap_lines(value: &str, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in value.chars() {
        if ch == '\n' {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
        }

        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value_respects_width() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("abcdefghij", 6), "abc...");
        // Wide characters count double
        assert_eq!(truncate_value("护肤品推荐", 7), "护肤...");
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("abcdef", 4);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].to_string(), "ef");
        assert_eq!(wrap_lines("a\nb", 10).len(), 2);
        assert_eq!(wrap_lines("", 0).len(), 1);
    }

    #[test]
    fn test_tag_line() {
        let theme = Theme::default();
        let line = tag_line(&["a".to_string(), "b".to_string()], Some(1), &theme);
        assert_eq!(line.to_string(), "[a] [b]");
        assert_eq!(line.spans[2].style, theme.selected());
    }
}
