//! Contact message Field Model

use super::field::FormField;
use super::form_state::Form;
use crate::submission::Payload;
use crate::validation::{validate_contact, ValidationErrors};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", true),
            email: FormField::text("email", "Email", true),
            message: FormField::multiline("message", "Message", true),
            active_field_index: 0,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    const NAME: &'static str = "contact";
    const SUBMIT_LABEL: &'static str = "Send Message";
    const SUBMITTING_LABEL: &'static str = "Sending...";
    const SUCCESS_MESSAGE: &'static str = "Message sent successfully! We'll get back to you soon.";
    const FAILURE_MESSAGE: &'static str = "Failed to send message. Please try again.";

    fn fields(&self) -> Vec<&FormField> {
        vec![&self.name, &self.email, &self.message]
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }

    // Contact messages carry no date rule.
    fn validate(&self, _today: NaiveDate) -> Result<Payload, ValidationErrors> {
        validate_contact(self).map(Payload::Contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let form = ContactForm::new();
        assert!(form.fields().iter().all(|f| f.value().is_empty()));
        assert_eq!(form.field_count(), 3);
    }

    #[test]
    fn test_message_is_multiline() {
        let form = ContactForm::new();
        assert!(form.message.is_multiline());
        assert!(!form.name.is_multiline());
    }

    #[test]
    fn test_set_and_reset() {
        let mut form = ContactForm::new();
        form.set("message", "hello".to_string()).unwrap();
        assert_eq!(form.message.value(), "hello");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_phone_is_not_a_contact_field() {
        let mut form = ContactForm::new();
        assert!(form.set("phone", "1234567890".to_string()).is_err());
    }
}
