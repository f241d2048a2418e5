//! Blocking alert for form notices

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::dialog::{DialogFrame, InstructionBar};
use crate::core::Notice;

const DIALOG_WIDTH: u16 = 50;

/// State for the alert dialog
#[derive(Debug, Clone, Default)]
pub struct AlertDialogState {
    notice: Option<Notice>,
}

impl AlertDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing any visible one
    pub fn show(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn hide(&mut self) {
        self.notice = None;
    }

    pub fn is_visible(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

/// Alert dialog widget
pub struct AlertDialog<'a> {
    state: &'a AlertDialogState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a AlertDialogState) -> Self {
        Self { state }
    }

    fn message_lines(message: &str, width: u16) -> u16 {
        // DialogFrame border plus padding
        let available = width.saturating_sub(6) as usize;
        if available == 0 {
            return 1;
        }
        message.width().div_ceil(available).max(1) as u16
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(notice) = self.state.notice() else {
            return;
        };

        let message = notice.message();
        let message_lines = Self::message_lines(&message, DIALOG_WIDTH);
        // borders, padding, button and instructions
        let height = 8 + message_lines;

        let inner = DialogFrame::new(notice.title(), DIALOG_WIDTH, height)
            .border_color(Color::Red)
            .render(area, buf);
        if inner.height < 5 {
            return;
        }

        Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: inner.x + 1,
                    y: inner.y + 1,
                    width: inner.width.saturating_sub(2),
                    height: message_lines.min(inner.height.saturating_sub(4)),
                },
                buf,
            );

        let button_y = inner.y + inner.height.saturating_sub(3);
        Paragraph::new(Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(
            Rect {
                x: inner.x,
                y: button_y,
                width: inner.width,
                height: 1,
            },
            buf,
        );

        InstructionBar::new(vec![("Enter", "Dismiss")]).render(
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
