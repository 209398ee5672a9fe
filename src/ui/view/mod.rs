//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::state::{App, AppMode};
use crate::bmi::REFERENCE_TABLE;
use crate::models::Measure;
use crate::theme::{Palette, badge_style};
use components::{render_dialog_framework, render_input_widget, render_measure_gauge, wrap_words};
use layouts::centered_fixed;

// 参考表固定列宽
const RANGE_WIDTH: u16 = 11;
const CATEGORY_WIDTH: u16 = 13;
const COLUMN_SPACING: u16 = 1;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.input.dark_mode());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let result_lines = result_lines(app, &palette);
    let result_height = wrapped_height(&result_lines, frame.area().width.saturating_sub(2)) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 标题
            Constraint::Length(3),             // 滑块
            Constraint::Length(result_height), // 结果
            Constraint::Min(8),                // 参考表
            Constraint::Length(4),             // 帮助 + 消息
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &palette);
    render_sliders(frame, app, chunks[1], &palette);
    render_result(frame, result_lines, chunks[2], &palette);
    render_reference_table(frame, app, chunks[3], &palette);
    render_help(frame, app, chunks[4], &palette);

    // 渲染弹窗
    match &app.mode {
        AppMode::Editing(measure) => render_edit_dialog(frame, app, *measure, &palette),
        AppMode::Help => render_help_dialog(frame, &palette),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new("🎯 Smart BMI Calculator")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

fn render_sliders(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (measure, column) in [Measure::Height, Measure::Weight].into_iter().zip(columns.iter()) {
        render_measure_gauge(
            frame,
            *column,
            measure,
            app.input.get(measure),
            app.focus == measure,
            palette,
        );
    }
}

/// 结果面板内容，每次渲染重新计算
fn result_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    match app.result() {
        Ok(result) => vec![
            Line::from(Span::styled(
                format!("Your BMI: {}", result.formatted()),
                Style::default()
                    .fg(palette.text)
                    .bg(palette.panel)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                format!(" {} ", result.category),
                badge_style(result.category, app.input.dark_mode()),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "Health Tip:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(result.tip),
        ],
        Err(err) => vec![Line::from(err.to_string())],
    }
}

/// 按宽度估算换行后的行数
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_result(frame: &mut Frame, lines: Vec<Line<'static>>, area: Rect, palette: &Palette) {
    let panel = Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .block(Block::default().title("Result").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn render_reference_table(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let header = Row::new(["BMI Range", "Category", "Health Risk"]).style(
        Style::default()
            .fg(palette.text)
            .bg(palette.table_header)
            .add_modifier(Modifier::BOLD),
    );

    // 风险描述列占剩余宽度，放不下时按词换行
    let fixed = RANGE_WIDTH + CATEGORY_WIDTH + 2 * COLUMN_SPACING;
    let risk_width = area.width.saturating_sub(2).saturating_sub(fixed).max(10);

    let rows = REFERENCE_TABLE.iter().map(|row| {
        let risk = wrap_words(row.risk, usize::from(risk_width));
        let height = u16::try_from(risk.len()).unwrap_or(1);
        Row::new([
            Cell::from(row.range),
            Cell::from(row.category.label())
                .style(badge_style(row.category, app.input.dark_mode())),
            Cell::from(risk.join("\n")),
        ])
        .height(height)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(RANGE_WIDTH),
            Constraint::Length(CATEGORY_WIDTH),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .column_spacing(COLUMN_SPACING)
    .style(Style::default().fg(palette.text).bg(palette.table))
    .block(Block::default().title("📌 BMI Guide").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[←→/PgUp/Dn] adjust [Tab] switch [e] type [d] dark [r] reset [?] help [q] quit"
        }
        AppMode::Editing(_) => "[0-9] type  [Enter] apply  [Esc] cancel",
        AppMode::Help => "[Esc] close",
    };

    // 第二行显示消息
    let lines = vec![
        Line::from(help_text),
        Line::from(app.message.clone().unwrap_or_default()),
    ];

    let help = Paragraph::new(lines)
        .style(palette.muted())
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_edit_dialog(frame: &mut Frame, app: &App, measure: Measure, palette: &Palette) {
    let area = centered_fixed(50, 7, frame.area());
    let inner = render_dialog_framework(frame, area, "Enter value", palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(frame, chunks[0], measure.label(), &app.input_buffer, palette);

    let (min, max) = measure.bounds();
    let hint = match &app.message {
        Some(message) => message.clone(),
        None => format!(
            "Now {} {}, range {}-{}",
            app.input.get(measure),
            measure.unit(),
            min,
            max
        ),
    };
    frame.render_widget(Paragraph::new(hint).style(palette.muted()), chunks[1]);
}

fn render_help_dialog(frame: &mut Frame, palette: &Palette) {
    let lines = [
        ("Tab / ↑ ↓ / j k", "switch between height and weight"),
        ("← → / h l / + -", "adjust by one step"),
        ("PgUp PgDn / H L", "adjust by a coarse step"),
        ("Home / End", "jump to minimum / maximum"),
        ("e / Enter", "type an exact value"),
        ("d", "toggle dark mode"),
        ("r", "reset height and weight"),
        ("?", "show this help"),
        ("q / Esc", "quit"),
    ]
    .into_iter()
    .map(|(key, desc)| {
        Line::from(vec![
            Span::styled(
                format!("{:<18}", key),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ])
    })
    .collect::<Vec<_>>();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_fixed(70, height, frame.area());
    let inner = render_dialog_framework(frame, area, "Keys", palette);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
