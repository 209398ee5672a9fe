//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j')
            | KeyCode::Down
            | KeyCode::Char('k')
            | KeyCode::Up => Some(Action::FocusNext),
            KeyCode::Right if shift => Some(Action::IncreaseCoarse),
            KeyCode::Left if shift => Some(Action::DecreaseCoarse),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => Some(Action::Increase),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => Some(Action::Decrease),
            KeyCode::Char('L') | KeyCode::PageUp => Some(Action::IncreaseCoarse),
            KeyCode::Char('H') | KeyCode::PageDown => Some(Action::DecreaseCoarse),
            KeyCode::Home => Some(Action::JumpToMin),
            KeyCode::End => Some(Action::JumpToMax),
            KeyCode::Char('d') => Some(Action::ToggleDarkMode),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEdit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            _ => None,
        },
        AppMode::Editing(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(Action::Cancel)
            }
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> bool {
    match get_action(&app.mode, key, modifiers) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
