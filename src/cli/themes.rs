//! `taskflow themes`：列出可用主题

use crate::theme::Theme;

/// 主题列表（当前主题带标记）
pub fn theme_lines(current: Theme) -> Vec<String> {
    Theme::all()
        .iter()
        .map(|theme| {
            let marker = if *theme == current { "*" } else { " " };
            format!("{} {}", marker, theme.label())
        })
        .collect()
}

pub fn execute(current: Theme) {
    for line in theme_lines(current) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_theme_lines_mark_current() {
        assert_eq!(
            theme_lines(Theme::Mint),
            vec!["  Violet", "  Coral", "* Mint", "  Sunset", "  Galaxy"]
        );
    }
}
