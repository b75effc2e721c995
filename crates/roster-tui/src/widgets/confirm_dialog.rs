//! Confirmation dialog widget for delete/quit confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};

/// Confirmation dialog widget
pub struct ConfirmDialog {
    title: String,
    message: String,
    warning: String,
}

impl ConfirmDialog {
    /// Dialog asking to delete a named record
    pub fn delete(name: &str) -> Self {
        Self {
            title: "Delete influencer?".to_string(),
            message: format!("Delete \"{}\" from the roster?", name),
            warning: "This cannot be undone.".to_string(),
        }
    }

    /// Dialog asking to quit while a form holds unsaved edits
    pub fn quit() -> Self {
        Self {
            title: "Quit?".to_string(),
            message: "You have unsaved changes.".to_string(),
            warning: "They will be discarded.".to_string(),
        }
    }
}

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        // Fixed modal size
        let modal_width = 50;
        let modal_height = 9;
        let modal_area = centered_rect(modal_width, modal_height, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        // Create the modal block with border
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::DarkGray));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        // Layout: message + warning + buttons
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message line
            Constraint::Length(1), // Warning line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Rest
        ])
        .split(inner);

        let message = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        message.render(chunks[1], buf);

        let warning = Paragraph::new(self.warning.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        warning.render(chunks[2], buf);

        // Buttons
        let buttons = Line::from(vec![
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("] No", Style::default().fg(Color::DarkGray)),
        ]);

        let buttons_para = Paragraph::new(buttons).alignment(Alignment::Center);
        buttons_para.render(chunks[4], buf);

        render_shadow(buf, modal_area);
    }
}
