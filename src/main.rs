mod bmi;
mod config;
mod error;
mod models;
mod terminal;
mod theme;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, config_path, load_config, log_dir};
use crate::terminal::{Tui, restore_terminal, setup_terminal};
use crate::ui::{App, render};

/// 日志写入文件 (~/.cache/bmi-gauge/logs/bmi-gauge.log)，TUI 占用了终端
fn setup_logging(config: &Config) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir()?, "bmi-gauge.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG 优先于配置文件
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let config_path = config_path()?;
    let config = load_config(&config_path)?;

    let _guard = setup_logging(&config)?;
    tracing::info!(config = %config_path.display(), ?config, "starting");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    let mut terminal = setup_terminal()?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal()?;

    match &result {
        Ok(()) => tracing::info!("exiting"),
        Err(err) => tracing::error!(error = %err, "event loop failed"),
    }

    result?;
    Ok(())
}

fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code, key.modifiers)
            {
                break;
            }
        }
    }
    Ok(())
}
