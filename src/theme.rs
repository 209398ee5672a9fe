//! 主题配色
//!
//! (category, dark_mode) -> Style 的纯映射，计算逻辑不依赖这里

use ratatui::style::{Color, Modifier, Style};

use crate::bmi::Category;

/// 一套界面配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub slider: Color,
    pub title: Color,
    pub panel: Color,
    pub table: Color,
    pub table_header: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(0xFF, 0xFF, 0xFF),
        text: Color::Rgb(0x00, 0x00, 0x00),
        accent: Color::Rgb(0x00, 0x7B, 0xFF),
        slider: Color::Rgb(0x00, 0x7B, 0xFF),
        title: Color::Rgb(0x00, 0x00, 0x00),
        panel: Color::Rgb(0xF4, 0xEC, 0xF7),
        table: Color::Rgb(0xF5, 0xEE, 0xF8),
        table_header: Color::Rgb(0xF4, 0xEC, 0xF7),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(0x1E, 0x1E, 0x1E),
        text: Color::Rgb(0xFF, 0xFF, 0xFF),
        accent: Color::Rgb(0xF1, 0xC4, 0x0F),
        slider: Color::Rgb(0xF3, 0x9C, 0x12),
        title: Color::Rgb(0xF1, 0xC4, 0x0F),
        panel: Color::Rgb(0x44, 0x44, 0x44),
        table: Color::Rgb(0x33, 0x33, 0x33),
        table_header: Color::Rgb(0x55, 0x55, 0x55),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }

    /// 页面基础样式
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().add_modifier(Modifier::DIM)
    }
}

/// 分类徽章底色
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => Color::Rgb(0xF9, 0xE7, 0x9F),
        Category::NormalWeight => Color::Rgb(0xD4, 0xEF, 0xDF),
        Category::Overweight => Color::Rgb(0xFA, 0xDB, 0xD8),
        Category::Obesity => Color::Rgb(0xED, 0xBB, 0x99),
    }
}

/// 分类徽章样式
///
/// 徽章在两种主题下都是浅底黑字
pub fn badge_style(category: Category, _dark_mode: bool) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(category_color(category))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_selection() {
        assert_eq!(Palette::for_mode(false), Palette::LIGHT);
        assert_eq!(Palette::for_mode(true), Palette::DARK);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn test_badge_colors_are_distinct() {
        let colors: Vec<_> = Category::ALL.iter().map(|c| category_color(*c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_badge_style_ignores_theme() {
        for category in Category::ALL {
            assert_eq!(badge_style(category, false), badge_style(category, true));
            assert_eq!(badge_style(category, true).fg, Some(Color::Black));
        }
    }
}
