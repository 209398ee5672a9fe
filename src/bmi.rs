//! BMI 计算与分类
//!
//! 纯函数：身高、体重 -> BmiResult，不持有任何状态

use std::fmt;

use thiserror::Error;

use crate::models::InputState;

/// 分类阈值
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
pub const NORMAL_LIMIT: f64 = 25.0;
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

/// 计算错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("invalid height: {height_cm} cm (must be greater than 0)")]
    InvalidHeight { height_cm: f64 },
}

/// 体重分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl Category {
    /// 按阈值顺序排列
    #[cfg(test)]
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::NormalWeight,
        Category::Overweight,
        Category::Obesity,
    ];

    /// 半开区间分类，先匹配先得
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Category::Underweight
        } else if bmi < NORMAL_LIMIT {
            Category::NormalWeight
        } else if bmi < OVERWEIGHT_LIMIT {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal Weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    pub fn style_tag(self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::NormalWeight => "normal",
            Category::Overweight => "overweight",
            Category::Obesity => "obesity",
        }
    }

    /// 健康建议（固定文本）
    pub fn tip(self) -> &'static str {
        match self {
            Category::Underweight => {
                "🍏 Try increasing your calorie intake with nutrient-rich foods."
            }
            Category::NormalWeight => "💪 Keep up with a balanced diet and regular exercise.",
            Category::Overweight => {
                "🥗 Focus on a healthy diet and increase your physical activity."
            }
            Category::Obesity => {
                "🚴 Consider consulting a doctor for a personalized weight management plan."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 计算结果，每次求值重新生成
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
    pub tip: &'static str,
    pub style_tag: &'static str,
}

impl BmiResult {
    /// 保留两位小数
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}

/// 计算 BMI 并分类
pub fn evaluate(height_cm: f64, weight_kg: f64) -> Result<BmiResult, BmiError> {
    // NaN 不是 finite
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BmiError::InvalidHeight { height_cm });
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    let category = Category::classify(bmi);

    Ok(BmiResult {
        bmi,
        category,
        tip: category.tip(),
        style_tag: category.style_tag(),
    })
}

/// 从输入状态求值
pub fn evaluate_state(state: &InputState) -> Result<BmiResult, BmiError> {
    evaluate(f64::from(state.height_cm()), f64::from(state.weight_kg()))
}

/// 参考表的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRow {
    pub range: &'static str,
    pub category: Category,
    pub risk: &'static str,
}

/// 固定参考表，与输入无关
pub const REFERENCE_TABLE: [ReferenceRow; 4] = [
    ReferenceRow {
        range: "< 18.5",
        category: Category::Underweight,
        risk: "Possible nutritional deficiency & weakened immune system",
    },
    ReferenceRow {
        range: "18.5 - 24.9",
        category: Category::NormalWeight,
        risk: "Low risk (Healthy Range)",
    },
    ReferenceRow {
        range: "25 - 29.9",
        category: Category::Overweight,
        risk: "Increased risk of cardiovascular diseases",
    },
    ReferenceRow {
        range: "≥ 30",
        category: Category::Obesity,
        risk: "High risk of heart disease, diabetes, & hypertension",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HEIGHT_RANGE, WEIGHT_RANGE};
    use proptest::prelude::*;

    fn eval(h: f64, w: f64) -> BmiResult {
        evaluate(h, w).expect("height is positive")
    }

    #[test]
    fn test_concrete_scenarios() {
        let cases = [
            (170.0, 70.0, "24.22", Category::NormalWeight),
            (160.0, 45.0, "17.58", Category::Underweight),
            (180.0, 90.0, "27.78", Category::Overweight),
            (150.0, 80.0, "35.56", Category::Obesity),
        ];

        for (h, w, shown, category) in cases {
            let result = eval(h, w);
            assert_eq!(result.formatted(), shown, "height={h} weight={w}");
            assert_eq!(result.category, category);
            assert_eq!(result.tip, category.tip());
            assert_eq!(result.style_tag, category.style_tag());
        }
    }

    #[test]
    fn test_boundaries_belong_to_upper_category() {
        // 200 cm -> 4.0 m²，结果精确
        assert_eq!(eval(200.0, 74.0).bmi, 18.5);
        assert_eq!(eval(200.0, 74.0).category, Category::NormalWeight);
        assert_eq!(eval(200.0, 100.0).category, Category::Overweight);
        assert_eq!(eval(200.0, 120.0).category, Category::Obesity);
    }

    #[test]
    fn test_invalid_height() {
        assert_eq!(
            evaluate(0.0, 70.0),
            Err(BmiError::InvalidHeight { height_cm: 0.0 })
        );
        assert!(evaluate(-170.0, 70.0).is_err());
        assert!(evaluate(f64::NAN, 70.0).is_err());
        assert!(evaluate(f64::INFINITY, 70.0).is_err());
    }

    #[test]
    fn test_labels_and_tags() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Underweight", "Normal Weight", "Overweight", "Obesity"]
        );
        assert_eq!(Category::NormalWeight.to_string(), "Normal Weight");
        assert_eq!(Category::NormalWeight.style_tag(), "normal");
    }

    #[test]
    fn test_reference_table_follows_category_order() {
        let categories: Vec<_> = REFERENCE_TABLE.iter().map(|row| row.category).collect();
        assert_eq!(categories, Category::ALL);
        assert_eq!(REFERENCE_TABLE[1].risk, "Low risk (Healthy Range)");
    }

    proptest! {
        #[test]
        fn prop_bmi_matches_formula(
            h in HEIGHT_RANGE.0..=HEIGHT_RANGE.1,
            w in WEIGHT_RANGE.0..=WEIGHT_RANGE.1,
        ) {
            let (h, w) = (f64::from(h), f64::from(w));
            let result = evaluate(h, w).unwrap();
            let expected = w / (h / 100.0).powi(2);
            prop_assert!((result.bmi - expected).abs() < 1e-9);

            let bmi = result.bmi;
            let intervals = [
                bmi < UNDERWEIGHT_LIMIT,
                (UNDERWEIGHT_LIMIT..NORMAL_LIMIT).contains(&bmi),
                (NORMAL_LIMIT..OVERWEIGHT_LIMIT).contains(&bmi),
                bmi >= OVERWEIGHT_LIMIT,
            ];
            prop_assert_eq!(intervals.iter().filter(|hit| **hit).count(), 1);
            let index = intervals.iter().position(|hit| *hit).unwrap();
            prop_assert_eq!(result.category, Category::ALL[index]);
        }

        #[test]
        fn prop_evaluate_is_idempotent(h in 1.0f64..500.0, w in 0.0f64..500.0) {
            prop_assert_eq!(evaluate(h, w), evaluate(h, w));
        }
    }
}
