/// 身高范围 (cm)，闭区间
pub const HEIGHT_RANGE: (u16, u16) = (100, 250);
/// 体重范围 (kg)，闭区间
pub const WEIGHT_RANGE: (u16, u16) = (30, 200);

pub const DEFAULT_HEIGHT_CM: u16 = 170;
pub const DEFAULT_WEIGHT_KG: u16 = 70;

/// 可调节的数值项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Height,
    Weight,
}

impl Measure {
    pub fn bounds(self) -> (u16, u16) {
        match self {
            Measure::Height => HEIGHT_RANGE,
            Measure::Weight => WEIGHT_RANGE,
        }
    }

    pub fn default_value(self) -> u16 {
        match self {
            Measure::Height => DEFAULT_HEIGHT_CM,
            Measure::Weight => DEFAULT_WEIGHT_KG,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Measure::Height => "📏 Height (cm)",
            Measure::Weight => "⚖️ Weight (kg)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Measure::Height => "cm",
            Measure::Weight => "kg",
        }
    }

    /// 切换到另一项
    pub fn other(self) -> Self {
        match self {
            Measure::Height => Measure::Weight,
            Measure::Weight => Measure::Height,
        }
    }

    /// 限制在闭区间内
    pub fn clamp(self, value: i64) -> u16 {
        let (min, max) = self.bounds();
        // 结果必在 u16 范围内
        value.clamp(i64::from(min), i64::from(max)) as u16
    }
}

/// 用户输入状态
///
/// 数值字段只能通过 setter 修改，始终位于各自区间内
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    height_cm: u16,
    weight_kg: u16,
    dark_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
            dark_mode: false,
        }
    }

    pub fn height_cm(&self) -> u16 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> u16 {
        self.weight_kg
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn get(&self, measure: Measure) -> u16 {
        match measure {
            Measure::Height => self.height_cm,
            Measure::Weight => self.weight_kg,
        }
    }

    /// 设置数值（自动夹取），返回实际写入的值
    pub fn set(&mut self, measure: Measure, value: i64) -> u16 {
        let value = measure.clamp(value);
        match measure {
            Measure::Height => self.height_cm = value,
            Measure::Weight => self.weight_kg = value,
        }
        value
    }

    /// 按步长增减
    pub fn adjust(&mut self, measure: Measure, delta: i64) -> u16 {
        let current = i64::from(self.get(measure));
        self.set(measure, current.saturating_add(delta))
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// 恢复默认数值，保留主题
    pub fn reset_measures(&mut self) {
        self.height_cm = Measure::Height.default_value();
        self.weight_kg = Measure::Weight.default_value();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
