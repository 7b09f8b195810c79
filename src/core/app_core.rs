use crate::config::{Config, SectionKind};
use crate::core::actions::{HitTarget, UiAction};
use crate::core::calculator::{CalcError, Calculator, Operator};
use crate::core::keypad::{self, Button, ButtonAction, ButtonKind};
use crate::core::navigation::{Navigator, Section};
use crate::data::{Alert, CalculatorDisplay, UiState};
use crossterm::event::KeyEvent;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the calculator engine, the section navigator and the UI
/// state. It binds button presses to engine operations and refreshes the
/// display model after every handler; frontends only read from it.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Calculator engine
    pub calculator: Calculator,

    /// What the calculator panel shows (written by the engine)
    pub display: CalculatorDisplay,

    /// Tab navigation
    pub navigator: Navigator,

    /// Focus, alert, status line
    pub ui_state: UiState,

    /// Application running flag
    pub running: bool,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        let sections: Vec<Section> = config.navigation.sections.iter().map(Section::from).collect();
        let mut navigator = Navigator::new(sections);
        if let Some(id) = &config.navigation.default_section {
            navigator.activate_by_id(id);
        }

        let mut core = Self {
            config,
            calculator: Calculator::new(),
            display: CalculatorDisplay::default(),
            navigator,
            ui_state: UiState::new(),
            running: true,
        };
        core.refresh_display();
        core.ui_state
            .set_status("Tab: switch section | arrows + Enter: press button | q: quit");
        core
    }

    /// Whether the calculator panel is the one on screen
    pub fn on_calculator(&self) -> bool {
        self.navigator
            .active()
            .is_some_and(|s| s.kind == SectionKind::Calculator)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = super::input_router::route_key(key, &self.ui_state, self.on_calculator());
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
            UiAction::DismissAlert => {
                self.ui_state.dismiss_alert();
            }
            _ if self.ui_state.has_alert() => {}
            UiAction::NextSection => self.navigator.next(),
            UiAction::PrevSection => self.navigator.prev(),
            UiAction::MoveFocus(direction) => self.ui_state.move_focus(direction),
            UiAction::PressFocused => self.press_focused(),
            UiAction::CopyResult => self.copy_result(),
            UiAction::None => {}
        }
    }

    /// React to a mouse click
    pub fn activate_target(&mut self, target: HitTarget) {
        if self.ui_state.has_alert() {
            // Any click acknowledges the alert
            self.ui_state.dismiss_alert();
            return;
        }

        match target {
            HitTarget::Tab(index) => {
                self.navigator.activate(index);
            }
            HitTarget::Button { row, col } => {
                if let Some(button) = keypad::button_at(row, col) {
                    self.ui_state.focused_button = (row, col);
                    self.press_button(button);
                }
            }
            HitTarget::Display => {
                if self.config.calculator.copy_on_display_click {
                    self.copy_result();
                }
            }
            HitTarget::Screen => {}
        }
    }

    fn press_focused(&mut self) {
        if !self.on_calculator() {
            return;
        }
        let (row, col) = self.ui_state.focused_button;
        if let Some(button) = keypad::button_at(row, col) {
            self.press_button(button);
        }
    }

    /// Dispatch a keypad button to the engine, then refresh the display
    pub fn press_button(&mut self, button: &Button) {
        tracing::debug!("Button pressed: {}", button.label);

        let result = match button.kind {
            ButtonKind::Number => {
                for token in button.label.chars() {
                    self.calculator.append_digit(token);
                }
                Ok(())
            }
            ButtonKind::Operator {
                action: Some(action),
            } => match action {
                ButtonAction::Clear => {
                    self.calculator.clear();
                    Ok(())
                }
                ButtonAction::Delete => {
                    self.calculator.delete_last_digit();
                    Ok(())
                }
                ButtonAction::Equals => self.calculator.compute(),
                ButtonAction::Sqrt => self.calculator.square_root(),
            },
            ButtonKind::Operator { action: None } => match Operator::from_symbol(button.label) {
                Some(op) => self.calculator.choose_operator(op),
                None => {
                    tracing::warn!("Unknown operator button: {}", button.label);
                    Ok(())
                }
            },
        };

        if let Err(e) = result {
            self.report_error(e);
        }
        self.refresh_display();
    }

    fn report_error(&mut self, error: CalcError) {
        tracing::warn!(error = ?error, "Calculator operation rejected");
        self.ui_state.show_alert(Alert::error(error.to_string()));
    }

    fn refresh_display(&mut self) {
        self.calculator.render(&mut self.display);
    }

    fn copy_result(&mut self) {
        let text = self.calculator.current_operand().to_string();
        match crate::clipboard::copy(&text) {
            Ok(()) => self.ui_state.set_status(format!("Copied {} to clipboard", text)),
            Err(e) => {
                tracing::error!("Clipboard copy failed: {}", e);
                self.ui_state.set_status(format!("Copy failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FocusMove;

    fn core() -> AppCore {
        AppCore::new(Config::embedded_default().unwrap())
    }

    fn click(core: &mut AppCore, label: &str) {
        let (row, col) = keypad::KEYPAD
            .iter()
            .enumerate()
            .find_map(|(r, buttons)| {
                buttons
                    .iter()
                    .position(|b| b.label == label)
                    .map(|c| (r, c))
            })
            .unwrap_or_else(|| panic!("no button {}", label));
        core.activate_target(HitTarget::Button { row, col });
    }

    #[test]
    fn test_starts_on_default_section() {
        let core = core();
        assert!(core.on_calculator());
        assert_eq!(core.display.current, "0");
        assert_eq!(core.display.previous, "");
    }

    #[test]
    fn test_clicks_drive_engine_and_display() {
        let mut core = core();
        click(&mut core, "1");
        click(&mut core, "2");
        click(&mut core, "+");
        assert_eq!(core.display.previous, "12 +");
        assert_eq!(core.display.current, "0");

        click(&mut core, "3");
        click(&mut core, "=");
        assert_eq!(core.display.current, "15");
        assert_eq!(core.display.previous, "");
    }

    #[test]
    fn test_action_buttons() {
        let mut core = core();
        click(&mut core, "9");
        click(&mut core, "√");
        assert_eq!(core.display.current, "3");

        click(&mut core, "5");
        click(&mut core, "DEL");
        assert_eq!(core.display.current, "3");

        click(&mut core, "C");
        assert_eq!(core.display.current, "0");
    }

    #[test]
    fn test_division_by_zero_raises_alert() {
        let mut core = core();
        click(&mut core, "1");
        click(&mut core, "0");
        click(&mut core, "÷");
        click(&mut core, "0");
        click(&mut core, "=");

        let alert = core.ui_state.alert.clone().expect("alert shown");
        assert_eq!(alert.message, "Cannot divide by zero!");
        assert_eq!(core.display.current, "0");
        assert_eq!(core.display.previous, "10 ÷");
    }

    #[test]
    fn test_chained_division_by_zero_alerts_and_switches() {
        let mut core = core();
        click(&mut core, "8");
        click(&mut core, "÷");
        click(&mut core, "0");
        click(&mut core, "+");

        let alert = core.ui_state.alert.clone().expect("alert shown");
        assert_eq!(alert.message, "Cannot divide by zero!");
        assert_eq!(core.display.previous, "0 +");
        assert_eq!(core.display.current, "0");
    }

    #[test]
    fn test_alert_blocks_until_dismissed() {
        let mut core = core();
        core.calculator.append_digit('4');
        click(&mut core, "-");
        click(&mut core, "4");
        click(&mut core, "=");
        click(&mut core, "-");
        click(&mut core, "4");
        click(&mut core, "=");
        assert_eq!(core.display.current, "-4");

        click(&mut core, "√");
        assert!(core.ui_state.has_alert());

        // First click only dismisses
        click(&mut core, "C");
        assert!(!core.ui_state.has_alert());
        assert_eq!(core.display.current, "-4");

        core.handle_action(UiAction::NextSection);
        assert!(!core.on_calculator());
    }

    #[test]
    fn test_keyboard_presses_focused_button() {
        let mut core = core();
        // (1, 0) is "7"
        core.handle_action(UiAction::MoveFocus(FocusMove::Down));
        core.handle_action(UiAction::PressFocused);
        assert_eq!(core.display.current, "7");
    }

    #[test]
    fn test_press_ignored_off_calculator() {
        let mut core = core();
        core.handle_action(UiAction::MoveFocus(FocusMove::Down));
        core.handle_action(UiAction::PrevSection);
        assert!(!core.on_calculator());
        core.handle_action(UiAction::PressFocused);
        assert_eq!(core.display.current, "0");
    }

    #[test]
    fn test_tab_click_and_quit() {
        let mut core = core();
        core.activate_target(HitTarget::Tab(2));
        assert_eq!(core.navigator.active().map(|s| s.id.as_str()), Some("about"));

        core.activate_target(HitTarget::Tab(99));
        assert_eq!(core.navigator.active_index(), 2);

        core.handle_action(UiAction::Quit);
        assert!(!core.running);
    }
}
