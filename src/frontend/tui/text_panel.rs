//! Plain text panel for non-calculator sections.

use super::colors::parse_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub fn render_text_panel(title: &str, body: &str, border_color: &str, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(parse_color(border_color)));

    Paragraph::new(body.trim_end())
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
}
