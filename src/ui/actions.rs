//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,

    // 数值调节
    Increase,
    Decrease,
    IncreaseCoarse,
    DecreaseCoarse,
    JumpToMin,
    JumpToMax,
    Reset,

    ToggleDarkMode,
    StartEdit,
    ShowHelp,

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入数字
    DeleteChar,  // Backspace
}
