//! Record detail overlay
//!
//! Centered modal showing the fully hydrated record: profile fields,
//! aggregate metrics, and a column per platform with audience
//! distributions and collaboration charges.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use roster_app::state::DetailState;
use roster_core::{Influencer, PlatformProfile};

use super::modal_overlay::{centered_rect_percent, dim_background};
use super::format_count;
use crate::theme::styles;

/// Detail overlay widget
pub struct DetailPanel<'a> {
    detail: &'a DetailState,
    /// chrono format string for the created/updated line.
    date_format: &'a str,
}

impl<'a> DetailPanel<'a> {
    pub fn new(detail: &'a DetailState, date_format: &'a str) -> Self {
        Self {
            detail,
            date_format,
        }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect_percent(80, 80, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Influencer ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(error) = &self.detail.error {
            let message = Paragraph::new(Line::from(vec![Span::styled(
                format!("✗ {}", error),
                styles::status_red(),
            )]));
            message.render(inner, buf);
            return;
        }

        let Some(record) = self.detail.record.as_deref() else {
            let message = if self.detail.loading {
                "Loading..."
            } else {
                "No record"
            };
            Paragraph::new(message)
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        };

        // Profile block on top, one platform column each below it.
        let chunks = Layout::vertical([
            Constraint::Length(7), // Profile + metrics
            Constraint::Min(0),    // Platform columns
        ])
        .split(inner);

        Paragraph::new(self.profile_lines(record)).render(chunks[0], buf);

        let columns = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(chunks[1]);

        Paragraph::new(platform_lines("Instagram", &record.instagram))
            .render(columns[0], buf);
        Paragraph::new(platform_lines("YouTube", &record.youtube)).render(columns[1], buf);
    }
}

impl DetailPanel<'_> {
    fn profile_lines(&self, record: &Influencer) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(record.name.clone(), styles::accent_bold()),
                Span::raw("  "),
                Span::styled(record.handle.clone(), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(
                        "{} · {} · {}, {}",
                        record.gender.as_str(),
                        record.language,
                        record.city,
                        record.state
                    ),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Categories  ", styles::text_muted()),
                Span::styled(
                    format!("IG {} · YT {}", record.instagram_category, record.youtube_category),
                    styles::text_primary(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Image  ", styles::text_muted()),
                Span::styled(record.image.clone(), styles::text_secondary()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Averages  ", styles::text_muted()),
                Span::styled(
                    format!(
                        "{} likes · {} views · {} comments · {:.1}% engagement",
                        format_count(record.average_likes as u64),
                        format_count(record.average_views as u64),
                        format_count(record.average_comments as u64),
                        record.average_engagement
                    ),
                    styles::text_primary(),
                ),
            ]),
        ];

        if let Some(created) = record.created_at {
            lines.push(Line::from(Span::styled(
                format!("Added {}", created.format(self.date_format)),
                styles::text_muted(),
            )));
        }

        lines
    }
}

/// Lines for one platform column: followers, link, distributions, charges.
fn platform_lines(title: &'static str, profile: &PlatformProfile) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(title, styles::accent_bold())),
        Line::from(vec![
            Span::styled("Followers  ", styles::text_muted()),
            Span::styled(format_count(profile.followers), styles::text_primary()),
        ]),
    ];

    if let Some(link) = &profile.link {
        lines.push(Line::from(vec![
            Span::styled("Link  ", styles::text_muted()),
            Span::styled(link.clone(), styles::text_secondary()),
        ]));
    }

    lines.push(share_line(
        "Gender",
        profile
            .gender_distribution
            .iter()
            .map(|share| format!("{} {:.0}%", share.gender, share.distribution))
            .collect(),
    ));
    lines.push(share_line(
        "Age",
        profile
            .age_distribution
            .iter()
            .map(|share| format!("{} {:.0}%", share.age, share.value))
            .collect(),
    ));
    lines.push(share_line(
        "Countries",
        profile
            .audience_by_country
            .iter()
            .map(|share| format!("{} {:.0}%", share.name, share.value))
            .collect(),
    ));

    let charges = &profile.collaboration_charges;
    lines.push(Line::from(vec![
        Span::styled("Charges  ", styles::text_muted()),
        Span::styled(
            format!(
                "Reel {} · Story {} · Post {} · Rights {}",
                format_count(charges.reel as u64),
                format_count(charges.story as u64),
                format_count(charges.post as u64),
                format_count(charges.one_month_digital_rights as u64)
            ),
            styles::text_primary(),
        ),
    ]));

    lines
}

fn share_line(label: &'static str, parts: Vec<String>) -> Line<'static> {
    let value = if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" · ")
    };
    Line::from(vec![
        Span::styled(format!("{}  ", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}
