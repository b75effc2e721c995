//! Semantic style builders for the roster theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use roster_core::Role;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Role indicator mapping ---

/// Role indicator for the status bar.
///
/// Returns `(icon_char, label, Style)` for the given capability role.
pub fn role_indicator(role: Role) -> (&'static str, &'static str, Style) {
    match role {
        Role::Admin => (
            "●",
            "Admin",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Role::Viewer => ("○", "Read-only", Style::default().fg(palette::TEXT_MUTED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
        assert_eq!(text_bright().fg, Some(palette::TEXT_BRIGHT));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_glass_block_focused_vs_unfocused() {
        // Block doesn't expose getters, but construction must succeed
        let _focused = glass_block(true);
        let _unfocused = glass_block(false);
    }

    #[test]
    fn test_modal_block_has_title() {
        let _block = modal_block("Test Modal");
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_status_styles_have_correct_colors() {
        assert_eq!(status_green().fg, Some(palette::STATUS_GREEN));
        assert_eq!(status_red().fg, Some(palette::STATUS_RED));
        assert_eq!(status_yellow().fg, Some(palette::STATUS_YELLOW));
    }

    #[test]
    fn test_role_indicator_admin() {
        let (icon, label, style) = role_indicator(Role::Admin);
        assert_eq!(icon, "●");
        assert_eq!(label, "Admin");
        assert_eq!(style.fg, Some(palette::STATUS_GREEN));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_role_indicator_viewer_is_muted() {
        let (icon, label, style) = role_indicator(Role::Viewer);
        assert_eq!(icon, "○");
        assert_eq!(label, "Read-only");
        assert_eq!(style.fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_role_indicator_all_roles_covered() {
        for role in [Role::Admin, Role::Viewer] {
            let (icon, label, _style) = role_indicator(role);
            assert!(!icon.is_empty());
            assert!(!label.is_empty());
        }
    }
}
