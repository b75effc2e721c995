//! Custom widget components

mod confirm_dialog;
mod detail_panel;
mod form_panel;
mod header;
pub mod modal_overlay;
mod roster_table;
mod search_input;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use detail_panel::DetailPanel;
pub use form_panel::FormPanel;
pub use header::MainHeader;
pub use roster_table::RosterTable;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;

/// Truncate `s` to at most `max` Unicode characters, appending `…` when
/// truncated. Operates on whole chars so multi-byte text never splits
/// mid-character.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

/// Compress a count into a short fixed-width form: `999`, `5.4K`, `1.2M`.
pub(crate) fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
