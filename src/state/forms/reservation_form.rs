//! Table reservation Field Model

use super::field::FormField;
use super::form_state::Form;
use crate::submission::{Payload, PARTY_SIZE_LABELS, SERVICE_TIME_LABELS};
use crate::validation::{validate_reservation, ValidationErrors};
use chrono::NaiveDate;

pub const DEFAULT_GUESTS: &str = "2 Guests";
pub const DEFAULT_TIME: &str = "7:00 PM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub guests: FormField,
    pub date: FormField,
    pub time: FormField,
    pub special_requests: FormField,
    pub active_field_index: usize,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", true),
            email: FormField::text("email", "Email", true),
            phone: FormField::phone("phone", "Phone"),
            guests: FormField::choice(
                "guests",
                "Number of Guests",
                PARTY_SIZE_LABELS,
                DEFAULT_GUESTS,
            ),
            date: FormField::date("date", "Date"),
            time: FormField::choice("time", "Time", SERVICE_TIME_LABELS, DEFAULT_TIME),
            special_requests: FormField::multiline(
                "specialRequests",
                "Special Requests (Optional)",
                false,
            ),
            active_field_index: 0,
        }
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ReservationForm {
    const NAME: &'static str = "reservation";
    const SUBMIT_LABEL: &'static str = "Book Now";
    const SUBMITTING_LABEL: &'static str = "Submitting...";
    const SUCCESS_MESSAGE: &'static str =
        "Reservation submitted successfully! We'll confirm your booking shortly.";
    const FAILURE_MESSAGE: &'static str =
        "Failed to submit reservation. Please try again or contact us directly.";

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.name,
            &self.email,
            &self.phone,
            &self.guests,
            &self.date,
            &self.time,
            &self.special_requests,
        ]
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "guests" => Some(&mut self.guests),
            "date" => Some(&mut self.date),
            "time" => Some(&mut self.time),
            "specialRequests" => Some(&mut self.special_requests),
            _ => None,
        }
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(6);
    }

    fn validate(&self, today: NaiveDate) -> Result<Payload, ValidationErrors> {
        validate_reservation(self, today).map(Payload::Reservation)
    }
}
