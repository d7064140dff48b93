//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

// 优先级颜色在所有主题中保持一致
const PRIORITY_LOW: Color = Color::Rgb(34, 197, 94); // 绿色
const PRIORITY_MEDIUM: Color = Color::Rgb(234, 179, 8); // 黄色
const PRIORITY_HIGH: Color = Color::Rgb(239, 68, 68); // 红色
const DANGER: Color = Color::Rgb(220, 38, 38);

/// 紫罗兰主题（默认）
pub fn violet_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 27, 75),            // 深靛蓝
        bg_secondary: Color::Rgb(76, 29, 149), // 深紫
        logo: Color::Rgb(139, 92, 246),
        highlight: Color::Rgb(139, 92, 246), // 紫色
        accent: Color::Rgb(236, 72, 153),    // 粉色
        text: Color::Rgb(245, 243, 255),
        muted: Color::Rgb(167, 139, 250),
        border: Color::Rgb(109, 84, 190),
        completed: Color::Rgb(249, 168, 212),
        priority_low: PRIORITY_LOW,
        priority_medium: PRIORITY_MEDIUM,
        priority_high: PRIORITY_HIGH,
        danger: DANGER,
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(139, 92, 246),
    }
}

/// 珊瑚主题
pub fn coral_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(124, 45, 18),
        bg_secondary: Color::Rgb(159, 18, 57),
        logo: Color::Rgb(249, 115, 22),
        highlight: Color::Rgb(249, 115, 22), // 橙色
        accent: Color::Rgb(244, 63, 94),     // 玫红
        text: Color::Rgb(255, 247, 237),
        muted: Color::Rgb(253, 186, 116),
        border: Color::Rgb(251, 146, 60),
        completed: Color::Rgb(253, 186, 116),
        priority_low: PRIORITY_LOW,
        priority_medium: PRIORITY_MEDIUM,
        priority_high: PRIORITY_HIGH,
        danger: DANGER,
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(234, 88, 12),
    }
}

/// 薄荷主题
pub fn mint_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(6, 78, 59),
        bg_secondary: Color::Rgb(7, 89, 133),
        logo: Color::Rgb(16, 185, 129),
        highlight: Color::Rgb(16, 185, 129), // 翠绿
        accent: Color::Rgb(14, 165, 233),    // 天蓝
        text: Color::Rgb(236, 253, 245),
        muted: Color::Rgb(110, 231, 183),
        border: Color::Rgb(52, 211, 153),
        completed: Color::Rgb(103, 232, 249),
        priority_low: PRIORITY_LOW,
        priority_medium: PRIORITY_MEDIUM,
        priority_high: PRIORITY_HIGH,
        danger: DANGER,
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(16, 185, 129),
    }
}

/// 日落主题
pub fn sunset_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(120, 53, 15),
        bg_secondary: Color::Rgb(127, 29, 29),
        logo: Color::Rgb(245, 158, 11),
        highlight: Color::Rgb(245, 158, 11), // 琥珀
        accent: Color::Rgb(220, 38, 38),     // 深红
        text: Color::Rgb(255, 251, 235),
        muted: Color::Rgb(252, 211, 77),
        border: Color::Rgb(251, 191, 36),
        completed: Color::Rgb(252, 165, 165),
        priority_low: PRIORITY_LOW,
        priority_medium: PRIORITY_MEDIUM,
        priority_high: PRIORITY_HIGH,
        danger: Color::Rgb(185, 28, 28),
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(245, 158, 11),
    }
}

/// 星河主题
pub fn galaxy_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 27, 75),
        bg_secondary: Color::Rgb(131, 24, 67),
        logo: Color::Rgb(99, 102, 241),
        highlight: Color::Rgb(139, 92, 246), // 紫色
        accent: Color::Rgb(236, 72, 153),    // 粉色
        text: Color::Rgb(238, 242, 255),
        muted: Color::Rgb(165, 180, 252),
        border: Color::Rgb(192, 132, 252),
        completed: Color::Rgb(253, 164, 175),
        priority_low: PRIORITY_LOW,
        priority_medium: PRIORITY_MEDIUM,
        priority_high: PRIORITY_HIGH,
        danger: DANGER,
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(99, 102, 241),
    }
}
