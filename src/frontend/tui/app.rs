use super::alert::AlertPopup;
use super::calculator_panel::{CalculatorPanel, PanelLayout};
use super::nav_tabs::{tab_at_position, NavTabs};
use super::text_panel::render_text_panel;
use crate::config::SectionKind;
use crate::core::{AppCore, HitTarget};
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
    Terminal,
};
use std::io;
use std::time::Duration;

/// Where everything landed in the last frame
#[derive(Clone, Debug, Default)]
pub struct ScreenLayout {
    pub tab_bar: Rect,
    /// Row the tab titles sit on
    pub tab_inner: Rect,
    pub tab_spans: Vec<(u16, u16)>,
    pub panel: Rect,
    pub status: Rect,
    /// Present only while the calculator section is active
    pub calculator: Option<PanelLayout>,
    pub alert_open: bool,
}

impl ScreenLayout {
    pub fn compute(area: Rect, core: &AppCore) -> Self {
        let titles: Vec<&str> = core
            .navigator
            .sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        let tabs = NavTabs::new(titles, core.navigator.active_index())
            .with_border(core.config.ui.show_border, &core.config.ui.border_color);

        let tab_height = tabs.height().min(area.height);
        let tab_bar = Rect::new(area.x, area.y, area.width, tab_height);
        let tab_inner = tabs.inner(tab_bar);
        let tab_spans = tabs.tab_spans(tab_inner);

        let status_height = u16::from(area.height > tab_height);
        let status = Rect::new(
            area.x,
            area.y + area.height - status_height,
            area.width,
            status_height,
        );
        let panel = Rect::new(
            area.x,
            area.y + tab_height,
            area.width,
            area.height - tab_height - status_height,
        );

        let calculator = core
            .on_calculator()
            .then(|| PanelLayout::compute(panel));

        Self {
            tab_bar,
            tab_inner,
            tab_spans,
            panel,
            status,
            calculator,
            alert_open: core.ui_state.has_alert(),
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> HitTarget {
        if self.alert_open {
            return HitTarget::Screen;
        }

        if self.tab_inner.height > 0 && y == self.tab_inner.y {
            if let Some(idx) = tab_at_position(&self.tab_spans, x) {
                return HitTarget::Tab(idx);
            }
        }

        if let Some(panel) = &self.calculator {
            if let Some((row, col)) = panel.button_at(x, y) {
                return HitTarget::Button { row, col };
            }
            if panel.display_contains(x, y) {
                return HitTarget::Display;
            }
        }

        HitTarget::Screen
    }
}

/// Draw one frame into `buf` using a precomputed layout
fn draw(core: &AppCore, layout: &ScreenLayout, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let ui = &core.config.ui;

    let titles: Vec<&str> = core
        .navigator
        .sections()
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    NavTabs::new(titles, core.navigator.active_index())
        .with_border(ui.show_border, &ui.border_color)
        .with_tab_colors(&ui.tab_active_color, &ui.tab_inactive_color)
        .render(layout.tab_bar, buf);

    if let Some(section) = core.navigator.active() {
        match (section.kind, &layout.calculator) {
            (SectionKind::Calculator, Some(panel)) => {
                CalculatorPanel::new(&core.display, core.ui_state.focused_button, ui)
                    .render(panel, buf);
            }
            _ => render_text_panel(
                &section.title,
                &section.body,
                &ui.border_color,
                layout.panel,
                buf,
            ),
        }
    }

    Paragraph::new(core.ui_state.status_text.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .render(layout.status, buf);

    if let Some(alert) = &core.ui_state.alert {
        AlertPopup::new(alert, &ui.alert_border_color).render(area, buf);
    }
}

/// TUI Frontend using ratatui
///
/// Renders the application with ratatui and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    last_layout: ScreenLayout,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16),
            last_layout: ScreenLayout::default(),
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
                modifiers: mouse_event.modifiers,
            }),
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block for the first event up to the timeout, then drain without waiting
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        let mut layout = ScreenLayout::default();
        self.terminal.draw(|f| {
            let area = f.area();
            layout = ScreenLayout::compute(area, core);
            draw(core, &layout, area, f.buffer_mut());
        })?;
        self.last_layout = layout;
        Ok(())
    }

    fn hit_test(&self, x: u16, y: u16) -> HitTarget {
        self.last_layout.hit_test(x, y)
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
