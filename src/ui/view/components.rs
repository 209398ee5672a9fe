//! 通用 UI 组件
//!
//! 对话框、输入框、滑块等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::models::Measure;
use crate::theme::Palette;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    palette: &Palette,
) {
    let input = Paragraph::new(format!("{}▏", value))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 数值滑块
pub fn render_measure_gauge(
    frame: &mut Frame,
    area: Rect,
    measure: Measure,
    value: u16,
    is_focused: bool,
    palette: &Palette,
) {
    let (min, max) = measure.bounds();
    let ratio = f64::from(value.saturating_sub(min)) / f64::from(max - min);

    let border_style = if is_focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(measure.label())
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .gauge_style(Style::default().fg(palette.slider).bg(palette.panel))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(Span::styled(
            format!("{} {}", value, measure.unit()),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

/// 按词折行，单词超长时独占一行
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
