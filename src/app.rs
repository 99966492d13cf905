//! Application state and core logic

use crate::config::ContactConfig;
use crate::state::{AppState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            state: AppState::new(config.rules()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-driven state (the success banner)
    pub fn tick(&mut self) {
        if self.state.form.poll_timers() {
            self.state.clear_sent_status();
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                if !self.state.dismiss_banner() {
                    self.quit = true;
                }
            }
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.state.submit(),
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Enter => match self.state.focus {
                Focus::Message => self.state.input_char('\n'),
                Focus::SubmitButton => self.state.submit(),
                Focus::Name | Focus::Email => self.state.next_focus(),
            },
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKind, StatusKind};
    use std::time::Duration;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn app() -> App {
        App::new(&ContactConfig::default())
    }

    mod keys {
        use super::*;

        #[test]
        fn test_escape_quits() {
            let mut app = app();
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app();
            ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app();
            type_str(&mut app, "Ada");
            assert_eq!(app.state.form.field(FieldKind::Name).value, "Ada");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app();
            ctrl(&mut app, 'x');
            assert_eq!(app.state.form.field(FieldKind::Name).value, "");
        }

        #[test]
        fn test_release_events_ignored() {
            let mut app = app();
            let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
            key.kind = KeyEventKind::Release;
            app.handle_key(key);
            assert_eq!(app.state.form.field(FieldKind::Name).value, "");
        }

        #[test]
        fn test_tab_blurs_and_validates() {
            let mut app = app();
            type_str(&mut app, "A");
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::Email);
            assert_eq!(
                app.state.form.field(FieldKind::Name).error(),
                Some("Name must be at least 2 characters")
            );
        }

        #[test]
        fn test_back_tab_moves_backward() {
            let mut app = app();
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.focus, Focus::SubmitButton);
        }

        #[test]
        fn test_enter_on_single_line_field_advances() {
            let mut app = app();
            type_str(&mut app, "Al");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.focus, Focus::Email);
            assert!(app.state.form.field(FieldKind::Name).error().is_none());
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = app();
            app.state.focus = Focus::Message;
            type_str(&mut app, "hi");
            press(&mut app, KeyCode::Enter);
            type_str(&mut app, "there");
            assert_eq!(app.state.form.field(FieldKind::Message).value, "hi\nthere");
            assert_eq!(app.state.focus, Focus::Message);
        }

        #[test]
        fn test_backspace_removes_char() {
            let mut app = app();
            type_str(&mut app, "Adx");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.field(FieldKind::Name).value, "Ad");
        }
    }

    mod submit {
        use super::*;

        fn fill(app: &mut App) {
            type_str(app, "Ada Lovelace");
            press(app, KeyCode::Tab);
            type_str(app, "ada@example.com");
            press(app, KeyCode::Tab);
            type_str(app, "I enjoyed your portfolio.");
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = app();
            fill(&mut app);
            ctrl(&mut app, 's');
            assert!(app.state.form.banner().is_visible());
            for kind in FieldKind::ALL {
                assert_eq!(app.state.form.field(kind).value, "");
            }
        }

        #[test]
        fn test_enter_on_button_submits() {
            let mut app = app();
            fill(&mut app);
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::SubmitButton);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.form.banner().is_visible());
        }

        #[test]
        fn test_invalid_submit_keeps_values() {
            let mut app = app();
            type_str(&mut app, "Ada");
            ctrl(&mut app, 's');
            assert!(!app.state.form.banner().is_visible());
            assert_eq!(app.state.form.field(FieldKind::Name).value, "Ada");
            assert_eq!(
                app.state.form.field(FieldKind::Email).error(),
                Some("Email is required")
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_tick_hides_banner_after_duration() {
            let mut app = app();
            fill(&mut app);
            ctrl(&mut app, 's');
            assert_eq!(
                app.state.status.as_ref().map(|s| s.kind),
                Some(StatusKind::Sent)
            );

            tokio::time::advance(Duration::from_millis(4999)).await;
            app.tick();
            assert!(app.state.form.banner().is_visible());

            tokio::time::advance(Duration::from_millis(1)).await;
            app.tick();
            assert!(!app.state.form.banner().is_visible());
            assert!(app.state.status.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_banner_expiry_keeps_later_rejection() {
            let mut app = app();
            fill(&mut app);
            ctrl(&mut app, 's');

            tokio::time::advance(Duration::from_millis(2000)).await;
            ctrl(&mut app, 's');
            let rejected = app.state.status.clone().unwrap();
            assert_eq!(rejected.kind, StatusKind::Rejected);
            assert!(app.state.form.banner().is_visible());

            tokio::time::advance(Duration::from_millis(3000)).await;
            app.tick();
            assert!(!app.state.form.banner().is_visible());
            assert_eq!(app.state.status, Some(rejected));
        }

        #[test]
        fn test_escape_dismisses_banner_before_quitting() {
            let mut app = app();
            fill(&mut app);
            ctrl(&mut app, 's');

            press(&mut app, KeyCode::Esc);
            assert!(!app.should_quit());
            assert!(!app.state.form.banner().is_visible());

            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }
    }
}
