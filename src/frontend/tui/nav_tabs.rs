//! Navigation tab bar
//!
//! Renders section titles in a single row separated by `" | "`, highlighting
//! the active one, and maps click columns back to tab indices.

use super::colors::parse_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const DIVIDER: &str = " | ";

/// Index of the tab whose span contains column `x`
pub fn tab_at_position(spans: &[(u16, u16)], x: u16) -> Option<usize> {
    spans.iter().position(|&(start, end)| x >= start && x < end)
}

pub struct NavTabs<'a> {
    titles: Vec<&'a str>,
    active: usize,
    show_border: bool,
    border_color: &'a str,
    active_color: &'a str,
    inactive_color: &'a str,
}

impl<'a> NavTabs<'a> {
    pub fn new(titles: Vec<&'a str>, active: usize) -> Self {
        Self {
            titles,
            active,
            show_border: true,
            border_color: "#808080",
            active_color: "#FFFF00",
            inactive_color: "#808080",
        }
    }

    pub fn with_border(mut self, show: bool, color: &'a str) -> Self {
        self.show_border = show;
        self.border_color = color;
        self
    }

    pub fn with_tab_colors(mut self, active: &'a str, inactive: &'a str) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    /// Rows the bar occupies
    pub fn height(&self) -> u16 {
        if self.show_border {
            3
        } else {
            1
        }
    }

    /// Row the titles are drawn on, given the bar's full area
    pub fn inner(&self, area: Rect) -> Rect {
        if self.show_border {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        }
    }

    /// Horizontal extent `[start, end)` of every tab, dividers included
    pub fn tab_spans(&self, inner: Rect) -> Vec<(u16, u16)> {
        let mut spans = Vec::with_capacity(self.titles.len());
        let mut x = inner.x;
        for (idx, title) in self.titles.iter().enumerate() {
            let width = title.chars().count() as u16;
            let divider = if idx + 1 < self.titles.len() {
                DIVIDER.len() as u16
            } else {
                0
            };
            spans.push((x, x.saturating_add(width + divider)));
            x = x.saturating_add(width + divider);
        }
        spans
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let active_style = Style::default()
            .fg(parse_color(self.active_color))
            .add_modifier(Modifier::BOLD);
        let inactive_style = Style::default().fg(parse_color(self.inactive_color));

        let mut spans = Vec::new();
        for (idx, title) in self.titles.iter().enumerate() {
            let style = if idx == self.active {
                active_style
            } else {
                inactive_style
            };
            spans.push(Span::styled(*title, style));
            if idx + 1 < self.titles.len() {
                spans.push(Span::styled(DIVIDER, inactive_style));
            }
        }

        let mut paragraph = Paragraph::new(Line::from(spans));
        if self.show_border {
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(parse_color(self.border_color))),
            );
        }
        paragraph.render(area, buf);
    }
}
