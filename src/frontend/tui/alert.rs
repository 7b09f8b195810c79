//! Modal alert drawn over the whole screen.

use super::colors::parse_color;
use crate::data::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const HINT: &str = "Enter / Esc / click to dismiss";

pub struct AlertPopup<'a> {
    alert: &'a Alert,
    border_color: &'a str,
}

impl<'a> AlertPopup<'a> {
    pub fn new(alert: &'a Alert, border_color: &'a str) -> Self {
        Self {
            alert,
            border_color,
        }
    }

    /// Centered box sized to the message, clipped to the screen
    pub fn area(&self, screen: Rect) -> Rect {
        let content = self.alert.message.chars().count().max(HINT.len()) as u16;
        let width = (content + 4).min(screen.width);
        let height = 6.min(screen.height);
        Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        )
    }

    pub fn render(&self, screen: Rect, buf: &mut Buffer) {
        let area = self.area(screen);

        // Clear the area behind the popup
        Clear.render(area, buf);

        let lines = vec![
            Line::styled(
                self.alert.message.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(HINT, Style::default().fg(Color::DarkGray)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.alert.title))
            .border_style(Style::default().fg(parse_color(self.border_color)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
