//! Color palette for the roster TUI.
//!
//! Named terminal colors only, so the palette degrades gracefully on
//! 16-color terminals.

// Infrastructure constants; not every widget uses every color.
#![allow(dead_code)]

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const ACCENT_DIM: Color = Color::DarkGray; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text
pub const TEXT_BRIGHT: Color = Color::White; // Bright/emphasis text
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success/confirm
pub const STATUS_RED: Color = Color::Red; // Error/delete
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning/search
pub const STATUS_BLUE: Color = Color::Blue; // Info

// --- Search prompt ---
pub const SEARCH_PROMPT: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black; // Modal drop shadow
