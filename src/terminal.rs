//! 终端生命周期
//!
//! raw mode 与备用屏幕的进入和恢复，panic 时同样恢复

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 进入 raw mode 和备用屏幕，中途失败时撤销已做的设置
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;

    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

    match terminal {
        Ok(terminal) => {
            install_panic_hook(|| {
                let _ = restore_terminal();
            });
            Ok(terminal)
        }
        Err(err) => {
            let _ = restore_terminal();
            Err(err)
        }
    }
}

/// 恢复终端，两步都会尝试执行
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    raw.and(screen)
}

/// 先恢复终端，再交给原有的 panic hook 输出信息
pub fn install_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
