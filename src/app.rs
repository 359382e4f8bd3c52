//! Application state and core logic

use crate::config::SiteConfig;
use crate::state::{ContactForm, Form, ReservationForm, SubmissionStatus, View};
use crate::submission::{SubmissionController, SubmissionSink, SubmitOutcome};
use crate::validation::DateProvider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current page
    pub view: View,
    pub reservation: SubmissionController<ReservationForm>,
    pub contact: SubmissionController<ContactForm>,
    pub config: SiteConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(
        config: SiteConfig,
        sink: Arc<dyn SubmissionSink>,
        dates: Arc<dyn DateProvider>,
    ) -> Self {
        Self {
            view: View::default(),
            reservation: SubmissionController::new(Arc::clone(&sink), Arc::clone(&dates)),
            contact: SubmissionController::new(sink, dates),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether any form is waiting on its sink
    pub fn is_busy(&self) -> bool {
        self.reservation.status().is_submitting() || self.contact.status().is_submitting()
    }

    /// Settle submissions that finished since the last tick
    pub fn tick(&mut self) {
        if let Some(status) = self.reservation.poll_completion() {
            tracing::debug!("Reservation form settled: {}", status.label());
        }
        if let Some(status) = self.contact.poll_completion() {
            tracing::debug!("Contact form settled: {}", status.label());
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Page switching works everywhere
        let page = match key.code {
            KeyCode::F(n @ 1..=4) => View::ALL.get(usize::from(n) - 1).copied(),
            _ => None,
        };
        if let Some(view) = page {
            self.view = view;
            return;
        }

        match self.view {
            View::Book => {
                if handle_form_key(&mut self.reservation, key) == FormKey::Leave {
                    self.view = View::Home;
                }
            }
            View::Contact => {
                if handle_form_key(&mut self.contact, key) == FormKey::Leave {
                    self.view = View::Home;
                }
            }
            View::Home | View::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Right | KeyCode::Tab => self.view = self.view.next(),
                KeyCode::Left | KeyCode::BackTab => self.view = self.view.prev(),
                KeyCode::Char('b') => self.view = View::Book,
                KeyCode::Char('c') => self.view = View::Contact,
                _ => {}
            },
        }
    }

    /// Status line text for the current page
    pub fn status_text(&self) -> String {
        let status = match self.view {
            View::Book => Some(self.reservation.status()),
            View::Contact => Some(self.contact.status()),
            View::Home | View::Menu => None,
        };
        match status {
            Some(SubmissionStatus::Submitting) => "Sending…".to_string(),
            Some(status) => format!("Form: {}", status.label()),
            None => "F1-F4 switch pages · q quit".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKey {
    Handled,
    Leave,
}

/// Route a key press into a form's controller
fn handle_form_key<F: Form>(controller: &mut SubmissionController<F>, key: KeyEvent) -> FormKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let active = controller.form().get_field(controller.form().active_field());
    let on_choice = active.is_some_and(|f| f.is_choice());
    let on_last = controller.form().is_last_field_active();

    match key.code {
        KeyCode::Esc => return FormKey::Leave,
        KeyCode::Char('s') if ctrl => submit(controller),
        KeyCode::Tab | KeyCode::Down => controller.focus_next(),
        KeyCode::BackTab | KeyCode::Up => controller.focus_prev(),
        KeyCode::Right if on_choice => controller.edit_active(|f| f.cycle_next()),
        KeyCode::Left if on_choice => controller.edit_active(|f| f.cycle_prev()),
        KeyCode::Enter if on_last || ctrl => submit(controller),
        KeyCode::Enter => controller.focus_next(),
        KeyCode::Backspace => controller.edit_active(|f| f.pop_char()),
        KeyCode::Char(c) if !ctrl => controller.edit_active(|f| f.push_char(c)),
        _ => {}
    }
    FormKey::Handled
}

fn submit<F: Form>(controller: &mut SubmissionController<F>) {
    match controller.begin_submit() {
        SubmitOutcome::Started => tracing::info!("Submitting {} form", F::NAME),
        SubmitOutcome::Rejected(errors) => {
            tracing::debug!("{} form has {} validation error(s)", F::NAME, errors.len())
        }
        SubmitOutcome::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitFailure;
    use crate::submission::StubSink;
    use crate::validation::FixedDateProvider;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            SiteConfig::default(),
            Arc::new(StubSink::new(Duration::ZERO)),
            Arc::new(FixedDateProvider(
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            )),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.view, View::Home);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_function_keys_switch_pages() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(3)));
        assert_eq!(app.view, View::Book);
        app.handle_key(key(KeyCode::F(4)));
        assert_eq!(app.view, View::Contact);
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.view, View::Menu);
    }

    #[test]
    fn test_q_quits_outside_forms() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_is_typed_inside_forms() {
        let mut app = app();
        app.view = View::Contact;
        type_str(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.contact.form().name.value(), "q");
    }

    #[test]
    fn test_esc_leaves_form() {
        let mut app = app();
        app.view = View::Book;
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view, View::Home);
    }

    #[test]
    fn test_choice_cycles_with_arrows() {
        let mut app = app();
        app.view = View::Book;
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.reservation.form().guests.value(), "3 Guests");
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.reservation.form().guests.value(), "1 Guest");
    }

    #[tokio::test]
    async fn test_contact_form_end_to_end() {
        let mut app = app();
        app.view = View::Contact;
        type_str(&mut app, "Ann");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "hi");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.contact.status(), &SubmissionStatus::Submitting);
        assert!(app.is_busy());

        app.contact.wait_for_completion().await;
        app.tick();
        assert_eq!(app.contact.status(), &SubmissionStatus::Success);
        assert_eq!(app.contact.form(), &ContactForm::default());
        // The reservation form is untouched by the contact submission
        assert_eq!(app.reservation.status(), &SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_ctrl_s_submits_from_any_field() {
        let mut app = app();
        app.view = View::Book;
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(
            app.reservation.status(),
            &SubmissionStatus::Error(SubmitFailure::Validation)
        );
        assert_eq!(app.reservation.form().name.value(), "");
    }

    #[test]
    fn test_status_text() {
        let mut app = app();
        assert!(app.status_text().contains("F1-F4"));
        app.view = View::Book;
        assert_eq!(app.status_text(), "Form: idle");
    }
}
