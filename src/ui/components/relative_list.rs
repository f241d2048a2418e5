//! Accordion of relatives with the selected record expanded into a form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::RelativesSnapshot;
use crate::ui::form_state::{FormField, RelativeFormState};

const REQUIRED_MESSAGE: &str = "This field is required";

pub struct RelativeList<'a> {
    snapshot: &'a RelativesSnapshot,
    form: &'a RelativeFormState,
}

impl<'a> RelativeList<'a> {
    pub fn new(snapshot: &'a RelativesSnapshot, form: &'a RelativeFormState) -> Self {
        Self { snapshot, form }
    }

    /// Lines for the whole list and the line index of the selected header
    fn lines(&self) -> (Vec<Line<'a>>, usize) {
        let mut lines = Vec::new();
        let mut selected_line = 0;

        for (index, record) in self.snapshot.relatives.iter().enumerate() {
            let expanded = index == self.form.selected();
            let marker = if expanded { "▼" } else { "▶" };
            let mut header = vec![Span::styled(
                format!("{marker} Relative {}", index + 1),
                if expanded {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            )];
            if record.is_valid {
                header.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
            }

            if expanded {
                selected_line = lines.len();
            }
            lines.push(Line::from(header));

            if expanded {
                self.push_form_lines(&mut lines, record.is_valid);
            }
        }

        (lines, selected_line)
    }

    fn push_form_lines(&self, lines: &mut Vec<Line<'a>>, is_valid: bool) {
        let form = self.form;
        let label = Style::default().fg(Color::DarkGray);
        let error = Style::default().fg(Color::Red);

        for (field, title, input) in [
            (FormField::FirstName, "First Name", &form.first_name),
            (FormField::LastName, "Last Name", &form.last_name),
        ] {
            let focused = form.focus == field;
            lines.push(Line::from(Span::styled(format!("   {title}"), label)));
            let mut spans = vec![Span::raw("   > ")];
            spans.extend(input.spans(focused, Style::default()));
            lines.push(Line::from(spans));
            if form.show_errors && input.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("   {REQUIRED_MESSAGE}"),
                    error,
                )));
            }
        }

        let relation_style = if form.focus == FormField::Relation {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled("   Relation", label)));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("◀ {} ▶", form.relation), relation_style),
        ]));

        if is_valid {
            lines.push(Line::from(Span::styled(
                "   ✓ Can be saved",
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::default());
    }
}

impl Widget for RelativeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (lines, selected_line) = self.lines();

        // Keep the expanded header on screen
        let offset = selected_line.saturating_sub(area.height.saturating_sub(10) as usize);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}
