//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.other(),

            Action::Increase => self.adjust(i64::from(self.step)),
            Action::Decrease => self.adjust(-i64::from(self.step)),
            Action::IncreaseCoarse => self.adjust(i64::from(self.coarse_step)),
            Action::DecreaseCoarse => self.adjust(-i64::from(self.coarse_step)),
            Action::JumpToMin => self.jump_to(self.focus.bounds().0),
            Action::JumpToMax => self.jump_to(self.focus.bounds().1),
            Action::Reset => self.reset(),

            Action::ToggleDarkMode => self.toggle_dark_mode(),
            Action::StartEdit => self.start_edit(),
            Action::ShowHelp => self.mode = AppMode::Help,

            Action::Cancel => self.cancel(),
            Action::Submit => {
                if let AppMode::Editing(_) = self.mode {
                    self.confirm_edit();
                }
            }

            Action::Input(c) => {
                // 最多 3 位，超出部分由夹取处理
                if matches!(self.mode, AppMode::Editing(_)) && self.input_buffer.len() < 3 {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if matches!(self.mode, AppMode::Editing(_)) {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 数值调节 ============

    /// 按步长调节当前焦点项
    pub fn adjust(&mut self, delta: i64) {
        let value = self.input.adjust(self.focus, delta);
        debug!(measure = ?self.focus, value, "adjusted");
        self.trace_result();
        self.message = None;
    }

    pub fn jump_to(&mut self, value: u16) {
        self.input.set(self.focus, i64::from(value));
        self.trace_result();
        self.message = None;
    }

    fn trace_result(&self) {
        match self.result() {
            Ok(result) => debug!(bmi = result.bmi, category = result.style_tag, "recomputed"),
            Err(err) => warn!(error = %err, "evaluation failed"),
        }
    }

    /// 恢复默认身高体重
    pub fn reset(&mut self) {
        self.input.reset_measures();
        info!("inputs reset to defaults");
        self.message = Some("Reset to defaults".to_string());
    }

    pub fn toggle_dark_mode(&mut self) {
        self.input.toggle_dark_mode();
        info!(dark_mode = self.input.dark_mode(), "theme toggled");
    }

    // ============ 直接输入 ============

    /// 开始编辑焦点项，输入框从空开始，当前值只作提示
    pub fn start_edit(&mut self) {
        self.mode = AppMode::Editing(self.focus);
        self.input_buffer.clear();
        self.message = None;
    }

    /// 确认输入，超出范围时夹取
    pub fn confirm_edit(&mut self) {
        let AppMode::Editing(measure) = self.mode else {
            return;
        };

        let Ok(raw) = self.input_buffer.parse::<i64>() else {
            self.message = Some("Enter a number".to_string());
            return;
        };

        let value = self.input.set(measure, raw);
        info!(?measure, raw, value, "value entered");
        self.trace_result();
        self.message = if i64::from(value) != raw {
            let (min, max) = measure.bounds();
            Some(format!(
                "{} clamped to {} {} (range {}-{})",
                raw,
                value,
                measure.unit(),
                min,
                max
            ))
        } else {
            None
        };
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Category;
    use crate::config::Config;
    use crate::models::Measure;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn type_value(app: &mut App, text: &str) {
        app.dispatch(Action::StartEdit);
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_quit() {
        assert!(app().dispatch(Action::Quit));
        assert!(!app().dispatch(Action::Increase));
    }

    #[test]
    fn test_adjust_follows_focus_and_steps() {
        let mut app = app();
        app.dispatch(Action::Increase);
        assert_eq!(app.input.height_cm(), 171);

        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, Measure::Weight);
        app.dispatch(Action::DecreaseCoarse);
        assert_eq!(app.input.weight_kg(), 60);
        assert_eq!(app.input.height_cm(), 171);
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut app = app();
        app.dispatch(Action::JumpToMax);
        assert_eq!(app.input.height_cm(), 250);
        app.dispatch(Action::JumpToMin);
        assert_eq!(app.input.height_cm(), 100);
        app.dispatch(Action::Decrease);
        assert_eq!(app.input.height_cm(), 100);
    }

    #[test]
    fn test_result_recomputed_on_every_change() {
        let mut app = app();
        assert_eq!(app.result().unwrap().category, Category::NormalWeight);

        app.dispatch(Action::FocusNext);
        type_value(&mut app, "90");
        app.dispatch(Action::Submit);
        assert_eq!(app.result().unwrap().formatted(), "31.14");
        assert_eq!(app.result().unwrap().category, Category::Obesity);
    }

    #[test]
    fn test_typed_value_replaces_current() {
        let mut app = app();
        app.dispatch(Action::FocusNext);
        type_value(&mut app, "85");
        app.dispatch(Action::Submit);

        assert_eq!(app.input.weight_kg(), 85);
        assert_eq!(app.message, None);

        app.dispatch(Action::FocusNext);
        type_value(&mut app, "182");
        app.dispatch(Action::Submit);
        assert_eq!(app.input.height_cm(), 182);
    }

    #[test]
    fn test_start_edit_begins_empty() {
        let mut app = app();
        app.dispatch(Action::StartEdit);
        assert_eq!(app.mode, AppMode::Editing(Measure::Height));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_edit_commit_clamps() {
        let mut app = app();
        type_value(&mut app, "999");
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.input.height_cm(), 250);
        assert!(app.message.as_deref().unwrap().contains("clamped"));
    }

    #[test]
    fn test_edit_buffer_limited_to_three_digits() {
        let mut app = app();
        type_value(&mut app, "12345");
        assert_eq!(app.input_buffer, "123");
    }

    #[test]
    fn test_empty_edit_is_rejected() {
        let mut app = app();
        type_value(&mut app, "");
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Editing(Measure::Height));
        assert_eq!(app.input.height_cm(), 170);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_cancel_leaves_values_unchanged() {
        let mut app = app();
        type_value(&mut app, "200");
        app.dispatch(Action::Cancel);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.input.height_cm(), 170);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_toggle_does_not_touch_result() {
        let mut app = app();
        let before = app.result().unwrap();
        app.dispatch(Action::ToggleDarkMode);
        app.dispatch(Action::ToggleDarkMode);
        assert!(!app.input.dark_mode());
        assert_eq!(app.result().unwrap(), before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app();
        app.dispatch(Action::IncreaseCoarse);
        app.dispatch(Action::ToggleDarkMode);
        app.dispatch(Action::Reset);

        assert_eq!(app.input.height_cm(), 170);
        assert_eq!(app.input.weight_kg(), 70);
        assert!(app.input.dark_mode());
    }
}
