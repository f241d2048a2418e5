//! Read-only summary shown after relatives are saved

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar};
use crate::core::Summary;

pub struct SummaryDialog<'a> {
    summary: &'a Summary,
    scroll: u16,
}

impl<'a> SummaryDialog<'a> {
    pub fn new(summary: &'a Summary) -> Self {
        Self { summary, scroll: 0 }
    }

    /// First content line to show; clamped so the last line stays on screen
    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    /// Number of content lines for a summary
    pub fn line_count(summary: &Summary) -> u16 {
        let user_lines = if summary.user.is_some() { 4 } else { 1 };
        // headings + blank separator + 4 lines per relative
        (3 + user_lines + summary.relatives.len() * 4) as u16
    }

    /// Largest useful scroll offset when drawn in `area`
    pub fn max_scroll(summary: &Summary, area: Rect) -> u16 {
        let lines = Self::line_count(summary);
        // borders + top padding + gap + instructions
        let dialog_height = (lines + 5).min(area.height.saturating_sub(2));
        let visible = dialog_height.saturating_sub(5);
        lines.saturating_sub(visible)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled("User Details", heading))];

        match &self.summary.user {
            Some(user) => {
                lines.push(Line::from(format!("First Name {}", user.first_name)));
                lines.push(Line::from(format!("Last Name {}", user.last_name)));
                lines.push(Line::from(format!("Email {}", user.email)));
                lines.push(Line::from(format!(
                    "Contact Details {}",
                    user.contact_details
                )));
            }
            None => lines.push(Line::from(Span::styled(
                "Not saved",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Relative Details", heading)));

        for (index, relative) in self.summary.relatives.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("Relative {}", index + 1),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(format!("First Name: {}", relative.first_name)));
            lines.push(Line::from(format!("Last Name: {}", relative.last_name)));
            lines.push(Line::from(format!("Relation: {}", relative.relation)));
        }

        lines
    }
}

impl Widget for SummaryDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = Self::line_count(self.summary) + 5;

        let inner = DialogFrame::new("User and Relative Details", 60, height).render(area, buf);
        if inner.height < 3 {
            return;
        }

        let content = Rect {
            x: inner.x + 2,
            y: inner.y + 1,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(3),
        };
        let max_scroll = Self::max_scroll(self.summary, area);
        let scroll = self.scroll.min(max_scroll);

        Paragraph::new(lines).scroll((scroll, 0)).render(content, buf);

        let mut hints = vec![("Enter", "Close")];
        if max_scroll > 0 {
            hints.push(("↑↓", "Scroll"));
        }
        InstructionBar::new(hints).render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            },
            buf,
        );
    }
}
