//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::bmi::{BmiError, BmiResult, evaluate_state};
use crate::config::Config;
use crate::models::{InputState, Measure};

/// 应用状态
pub struct App {
    pub input: InputState,
    pub focus: Measure,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: Option<String>,
    pub step: u16,
    pub coarse_step: u16,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Editing(Measure), // 直接输入数值
    Help,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            focus: Measure::Height,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
            step: config.step,
            coarse_step: config.coarse_step,
        }
    }

    /// 按当前输入重新计算，不缓存
    pub fn result(&self) -> Result<BmiResult, BmiError> {
        evaluate_state(&self.input)
    }
}
