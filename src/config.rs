use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};

const APP_DIR: &str = "bmi-gauge";

/// 用户配置 (~/.config/bmi-gauge/config.toml)
///
/// 只读；不保存任何会话数值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 方向键步长
    pub step: u16,
    /// PageUp/PageDown 步长
    pub coarse_step: u16,
    /// tracing 过滤表达式，RUST_LOG 优先
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 1,
            coarse_step: 10,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 步长至少为 1
    fn normalized(mut self) -> Self {
        self.step = self.step.max(1);
        self.coarse_step = self.coarse_step.max(1);
        self
    }
}

/// 配置文件路径
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(AppError::MissingDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 日志目录 (~/.cache/bmi-gauge/logs/)
pub fn log_dir() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or(AppError::MissingDir("cache"))?
        .join(APP_DIR)
        .join("logs");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config.normalized())
}
