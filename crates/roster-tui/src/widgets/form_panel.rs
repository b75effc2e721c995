//! Create/edit form overlay
//!
//! Centered modal listing every editable field grouped by section, with a
//! scroll window that follows the selection. The selected row either
//! shows its committed value or, while editing, the live input buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use roster_app::form::FormField;
use roster_app::state::{EditorState, SubmitIntent};

use super::modal_overlay::{centered_rect_percent, dim_background};
use super::truncate;
use crate::theme::{palette, styles};

/// Width of the label gutter, error marker included.
const LABEL_WIDTH: usize = 26;

/// One visual row of the form body.
enum DisplayRow<'a> {
    /// Section heading, inserted where the section changes.
    Heading(&'static str),
    /// A field row and its index into `EditorState::fields()`.
    Field(usize, &'a FormField),
}

/// Form overlay widget
pub struct FormPanel<'a> {
    editor: &'a EditorState,
}

impl<'a> FormPanel<'a> {
    pub fn new(editor: &'a EditorState) -> Self {
        Self { editor }
    }

    fn title(&self) -> &'static str {
        match self.editor.intent {
            SubmitIntent::Create => " New influencer ",
            SubmitIntent::Patch { .. } => " Edit influencer ",
            SubmitIntent::Replace { .. } => " Replace influencer ",
        }
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect_percent(80, 85, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(self.title());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Field rows
            Constraint::Length(1), // Error/status footer
        ])
        .split(inner);

        let fields = self.editor.fields();
        let rows = build_rows(&fields);
        self.render_rows(&rows, chunks[0], buf);
        self.render_footer(&fields, chunks[1], buf);
    }
}

impl FormPanel<'_> {
    /// Render the visible window of rows, keeping the selection in view.
    fn render_rows(&self, rows: &[DisplayRow], area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let selected_row = rows
            .iter()
            .position(|row| matches!(row, DisplayRow::Field(i, _) if *i == self.editor.selected_index))
            .unwrap_or(0);

        let visible = area.height as usize;
        let offset = selected_row.saturating_sub(visible.saturating_sub(1));

        for (screen_idx, row) in rows.iter().skip(offset).take(visible).enumerate() {
            let y = area.y + screen_idx as u16;
            match row {
                DisplayRow::Heading(section) => {
                    buf.set_string(area.x + 1, y, *section, styles::accent_bold());
                }
                DisplayRow::Field(index, field) => {
                    self.render_field_row(*index, field, area, y, buf);
                }
            }
        }
    }

    fn render_field_row(
        &self,
        index: usize,
        field: &FormField,
        area: Rect,
        y: u16,
        buf: &mut Buffer,
    ) {
        let is_selected = index == self.editor.selected_index;
        let is_editing = is_selected && self.editor.editing;
        let has_error = !self.editor.errors_for(&field.path).is_empty();

        let row_style = if is_selected && !is_editing {
            styles::focused_selected()
        } else {
            Style::default()
        };

        if is_selected && !is_editing {
            // Paint the selection bar across the row before writing cells.
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(row_style).set_char(' ');
                }
            }
        }

        let mut x = area.x + 1;

        let marker_style = if has_error {
            styles::status_red().patch(row_style)
        } else {
            row_style
        };
        buf.set_string(x, y, if has_error { "✗ " } else { "  " }, marker_style);
        x += 2;

        // List headings double as subsection labels.
        let label_style = if field.is_editable() {
            styles::text_secondary().patch(row_style)
        } else {
            Style::default()
                .fg(palette::TEXT_MUTED)
                .add_modifier(Modifier::BOLD)
                .patch(row_style)
        };
        buf.set_string(
            x,
            y,
            truncate(&field.label, LABEL_WIDTH - 3),
            label_style,
        );
        x = area.x + 1 + LABEL_WIDTH as u16;

        let value_width = area.right().saturating_sub(x) as usize;
        if is_editing {
            let text = format!("{}_", self.editor.edit_buffer);
            buf.set_string(
                x,
                y,
                truncate(&text, value_width),
                styles::status_yellow(),
            );
        } else {
            buf.set_string(
                x,
                y,
                truncate(&field.value, value_width),
                styles::text_primary().patch(row_style),
            );
        }
    }

    /// One-line footer: submit errors first, then the selected field's
    /// validation error, then an overall count.
    fn render_footer(&self, fields: &[FormField], area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = if let Some(error) = &self.editor.error {
            Line::from(Span::styled(format!("✗ {}", error), styles::status_red()))
        } else if let Some(message) = fields
            .get(self.editor.selected_index)
            .and_then(|field| self.editor.errors_for(&field.path).first().copied())
            .map(|e| e.message.clone())
        {
            Line::from(Span::styled(format!("✗ {}", message), styles::status_red()))
        } else if !self.editor.field_errors.is_empty() {
            Line::from(Span::styled(
                format!("✗ {} fields need attention", self.editor.field_errors.len()),
                styles::status_red(),
            ))
        } else {
            Line::from("")
        };

        Paragraph::new(line).render(area, buf);
    }
}

/// Flatten fields into display rows, inserting a heading wherever the
/// section changes.
fn build_rows<'a>(fields: &'a [FormField]) -> Vec<DisplayRow<'a>> {
    let mut rows = Vec::with_capacity(fields.len() + 4);
    let mut current_section = "";

    for (index, field) in fields.iter().enumerate() {
        if field.section != current_section {
            current_section = field.section;
            rows.push(DisplayRow::Heading(field.section));
        }
        rows.push(DisplayRow::Field(index, field));
    }

    rows
}
