//! Calculator panel: two-line display above the keypad grid.
//!
//! Layout is computed separately from drawing so the frontend can reuse the
//! same rectangles for mouse hit testing.

use super::colors::parse_color;
use crate::config::UiConfig;
use crate::core::keypad::{Button, ButtonKind, COLS, KEYPAD, ROWS};
use crate::data::CalculatorDisplay;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const MAX_WIDTH: u16 = 44;
const DISPLAY_HEIGHT: u16 = 4;

/// Rectangles for the display and every keypad button
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelLayout {
    pub display: Rect,
    pub buttons: Vec<(usize, usize, Rect)>,
}

impl PanelLayout {
    /// Split the panel area. The grid is centered and capped at `MAX_WIDTH`.
    pub fn compute(area: Rect) -> Self {
        let width = area.width.min(MAX_WIDTH);
        let x = area.x + (area.width - width) / 2;

        let display = Rect::new(x, area.y, width, DISPLAY_HEIGHT.min(area.height));
        let keypad_height = area.height.saturating_sub(display.height);
        let row_height = keypad_height / ROWS as u16;
        let col_width = width / COLS as u16;

        let mut buttons = Vec::with_capacity(ROWS * COLS);
        if row_height > 0 && col_width > 0 {
            let top = display.y + display.height;
            for row in 0..ROWS {
                for col in 0..COLS {
                    buttons.push((
                        row,
                        col,
                        Rect::new(
                            x + col as u16 * col_width,
                            top + row as u16 * row_height,
                            col_width,
                            row_height,
                        ),
                    ));
                }
            }
        }

        Self { display, buttons }
    }

    pub fn button_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.buttons
            .iter()
            .find(|(_, _, rect)| contains(rect, x, y))
            .map(|&(row, col, _)| (row, col))
    }

    pub fn display_contains(&self, x: u16, y: u16) -> bool {
        contains(&self.display, x, y)
    }
}

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

pub struct CalculatorPanel<'a> {
    display: &'a CalculatorDisplay,
    focused: (usize, usize),
    ui: &'a UiConfig,
}

impl<'a> CalculatorPanel<'a> {
    pub fn new(display: &'a CalculatorDisplay, focused: (usize, usize), ui: &'a UiConfig) -> Self {
        Self {
            display,
            focused,
            ui,
        }
    }

    pub fn render(&self, layout: &PanelLayout, buf: &mut Buffer) {
        self.render_display(layout.display, buf);
        for &(row, col, rect) in &layout.buttons {
            let button = &KEYPAD[row][col];
            self.render_button(button, (row, col) == self.focused, rect, buf);
        }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                self.display.previous.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                self.display.current.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(parse_color(&self.ui.border_color)));
        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(block)
            .render(area, buf);
    }

    fn render_button(&self, button: &Button, focused: bool, area: Rect, buf: &mut Buffer) {
        let color = match button.kind {
            ButtonKind::Number => &self.ui.digit_color,
            ButtonKind::Operator { action: None } => &self.ui.operator_color,
            ButtonKind::Operator { action: Some(_) } => &self.ui.action_color,
        };
        let mut label_style = Style::default().fg(parse_color(color));
        let border_color = if focused {
            label_style = label_style.add_modifier(Modifier::REVERSED);
            parse_color(&self.ui.focus_color)
        } else {
            parse_color(&self.ui.border_color)
        };

        let mut paragraph = Paragraph::new(Line::styled(button.label, label_style))
            .alignment(Alignment::Center);
        // Too short for a border: draw the bare label
        if area.height >= 3 {
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_grid() {
        let layout = PanelLayout::compute(Rect::new(0, 3, 44, 19));
        assert_eq!(layout.display, Rect::new(0, 3, 44, 4));
        assert_eq!(layout.buttons.len(), ROWS * COLS);

        // 15 rows of keypad -> 3 rows per button, 11 cols per button
        assert_eq!(layout.button_at(0, 7), Some((0, 0)));
        assert_eq!(layout.button_at(12, 10), Some((1, 1)));
        assert_eq!(layout.button_at(43, 21), Some((4, 3)));
        assert_eq!(layout.button_at(0, 3), None);
        assert!(layout.display_contains(20, 5));
    }

    #[test]
    fn test_layout_centered_on_wide_screen() {
        let layout = PanelLayout::compute(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.display.width, MAX_WIDTH);
        assert_eq!(layout.display.x, 28);
    }

    #[test]
    fn test_tiny_area_has_no_buttons() {
        let layout = PanelLayout::compute(Rect::new(0, 0, 20, 6));
        assert!(layout.buttons.is_empty());
        assert_eq!(layout.button_at(1, 5), None);
    }

    #[test]
    fn test_render_shows_operands() {
        let ui = UiConfig::default();
        let display = CalculatorDisplay {
            current: "15".to_string(),
            previous: "12 +".to_string(),
        };
        let area = Rect::new(0, 0, 44, 19);
        let layout = PanelLayout::compute(area);
        let mut buf = Buffer::empty(area);
        CalculatorPanel::new(&display, (0, 0), &ui).render(&layout, &mut buf);

        // Right-aligned inside the border
        assert_eq!(buf[(42, 1)].symbol(), "+");
        assert_eq!(buf[(39, 1)].symbol(), "1");
        assert_eq!(buf[(41, 2)].symbol(), "1");
        assert_eq!(buf[(42, 2)].symbol(), "5");
    }
}
