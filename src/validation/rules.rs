//! Field rules and the per-form validators built from them

use super::{ValidationError, ValidationErrors, ValidationKind};
use crate::state::{ContactForm, FormField, ReservationForm};
use crate::submission::{ContactMessage, ReservationRequest};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

const DATE_FORMAT: &str = "%Y-%m-%d";

type Errors = Vec<ValidationError>;

/// Trimmed value of a required field, or a `Required` error
fn required<'a>(errors: &mut Errors, field: &'a FormField) -> Option<&'a str> {
    let value = field.value().trim();
    if value.is_empty() {
        errors.push(ValidationError::field(field.name, ValidationKind::Required));
        None
    } else {
        Some(value)
    }
}

fn email(errors: &mut Errors, field: &FormField) -> Option<String> {
    let value = required(errors, field)?;
    if EMAIL_RE.is_match(value) {
        Some(value.to_string())
    } else {
        errors.push(ValidationError::field(field.name, ValidationKind::InvalidEmail));
        None
    }
}

fn phone(errors: &mut Errors, field: &FormField) -> Option<String> {
    let value = required(errors, field)?;
    if PHONE_RE.is_match(value) {
        Some(value.to_string())
    } else {
        errors.push(ValidationError::field(field.name, ValidationKind::InvalidPhone));
        None
    }
}

fn choice<T: FromStr>(errors: &mut Errors, field: &FormField) -> Option<T> {
    match field.value().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(ValidationError::field(
                field.name,
                ValidationKind::InvalidChoice,
            ));
            None
        }
    }
}

/// Reservation date: a calendar date no earlier than `today`
fn reservation_date(errors: &mut Errors, field: &FormField, today: NaiveDate) -> Option<NaiveDate> {
    let value = required(errors, field)?;
    let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        errors.push(ValidationError::field(field.name, ValidationKind::InvalidDate));
        return None;
    };
    if date < today {
        errors.push(ValidationError::form(ValidationKind::PastDate));
        return None;
    }
    Some(date)
}

/// Validate a reservation against the given current date
pub fn validate_reservation(
    form: &ReservationForm,
    today: NaiveDate,
) -> Result<ReservationRequest, ValidationErrors> {
    let mut errors = Errors::new();

    let name = required(&mut errors, &form.name).map(str::to_string);
    let email = email(&mut errors, &form.email);
    let phone = phone(&mut errors, &form.phone);
    let guests = choice(&mut errors, &form.guests);
    let date = reservation_date(&mut errors, &form.date, today);
    let time = choice(&mut errors, &form.time);

    match (name, email, phone, guests, date, time) {
        (Some(name), Some(email), Some(phone), Some(guests), Some(date), Some(time)) => {
            Ok(ReservationRequest {
                name,
                email,
                phone,
                guests,
                date,
                time,
                special_requests: form.special_requests.value().to_string(),
            })
        }
        _ => Err(into_errors(errors)),
    }
}

/// Validate a contact message
pub fn validate_contact(form: &ContactForm) -> Result<ContactMessage, ValidationErrors> {
    let mut errors = Errors::new();

    let name = required(&mut errors, &form.name).map(str::to_string);
    let email = email(&mut errors, &form.email);
    let message = required(&mut errors, &form.message).map(str::to_string);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
            name,
            email,
            message,
        }),
        _ => Err(into_errors(errors)),
    }
}

// Every rule that yields `None` has pushed an error first.
fn into_errors(errors: Errors) -> ValidationErrors {
    debug_assert!(!errors.is_empty());
    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Form;
    use crate::submission::{PartySize, ServiceTime};
    use crate::validation::ErrorScope;
    use pretty_assertions::assert_eq;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_reservation(date: &str) -> ReservationForm {
        let mut form = ReservationForm::default();
        form.set("name", "Ann".to_string()).unwrap();
        form.set("email", "ann@x.com".to_string()).unwrap();
        form.set("phone", "5551234567".to_string()).unwrap();
        form.set("date", date.to_string()).unwrap();
        form
    }

    mod reservation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_well_formed_reservation_parses() {
            let form = filled_reservation("2024-06-20");
            let request = validate_reservation(&form, june_15()).unwrap();

            assert_eq!(
                request,
                ReservationRequest {
                    name: "Ann".to_string(),
                    email: "ann@x.com".to_string(),
                    phone: "5551234567".to_string(),
                    guests: PartySize::Two,
                    date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
                    time: ServiceTime::SevenPm,
                    special_requests: String::new(),
                }
            );
        }

        #[test]
        fn test_required_fields() {
            let errors = validate_reservation(&ReservationForm::default(), june_15()).unwrap_err();

            for field in ["name", "email", "phone", "date"] {
                assert!(
                    errors.contains(ErrorScope::Field(field), ValidationKind::Required),
                    "missing required error for {field}"
                );
            }
            assert_eq!(errors.len(), 4);
        }

        #[test]
        fn test_whitespace_counts_as_empty() {
            let mut form = filled_reservation("2024-06-20");
            form.set("name", "   ".to_string()).unwrap();
            let errors = validate_reservation(&form, june_15()).unwrap_err();
            assert!(errors.contains(ErrorScope::Field("name"), ValidationKind::Required));
        }

        #[test]
        fn test_phone_must_be_ten_digits() {
            for bad in ["12345", "12345678901", "123-456-7890", "555123456a"] {
                let mut form = filled_reservation("2024-06-20");
                form.set("phone", bad.to_string()).unwrap();
                let errors = validate_reservation(&form, june_15()).unwrap_err();
                assert!(
                    errors.contains(ErrorScope::Field("phone"), ValidationKind::InvalidPhone),
                    "{bad} should be rejected"
                );
            }

            let mut form = filled_reservation("2024-06-20");
            form.set("phone", "1234567890".to_string()).unwrap();
            assert!(validate_reservation(&form, june_15()).is_ok());
        }

        #[test]
        fn test_email_must_be_well_formed() {
            for bad in ["ann", "ann@", "@x.com", "ann@x", "a nn@x.com"] {
                let mut form = filled_reservation("2024-06-20");
                form.set("email", bad.to_string()).unwrap();
                let errors = validate_reservation(&form, june_15()).unwrap_err();
                assert!(
                    errors.contains(ErrorScope::Field("email"), ValidationKind::InvalidEmail),
                    "{bad} should be rejected"
                );
            }
        }

        #[test]
        fn test_yesterday_is_a_form_level_error() {
            let form = filled_reservation("2024-06-14");
            let errors = validate_reservation(&form, june_15()).unwrap_err();
            assert_eq!(
                errors.form_level().collect::<Vec<_>>(),
                vec![ValidationKind::PastDate]
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_today_and_later_pass() {
            for date in ["2024-06-15", "2024-06-16", "2099-01-01"] {
                let form = filled_reservation(date);
                assert!(
                    validate_reservation(&form, june_15()).is_ok(),
                    "{date} should be accepted"
                );
            }
        }

        #[test]
        fn test_unparseable_date() {
            let form = filled_reservation("15/06/2024");
            let errors = validate_reservation(&form, june_15()).unwrap_err();
            assert!(errors.contains(ErrorScope::Field("date"), ValidationKind::InvalidDate));
        }

        #[test]
        fn test_unknown_options_rejected() {
            let mut form = filled_reservation("2024-06-20");
            form.set("guests", "12 Guests".to_string()).unwrap();
            form.set("time", "3:00 AM".to_string()).unwrap();
            let errors = validate_reservation(&form, june_15()).unwrap_err();
            assert!(errors.contains(ErrorScope::Field("guests"), ValidationKind::InvalidChoice));
            assert!(errors.contains(ErrorScope::Field("time"), ValidationKind::InvalidChoice));
        }

        #[test]
        fn test_six_plus_guests_is_accepted() {
            let mut form = filled_reservation("2024-06-20");
            form.set("guests", "6+ Guests".to_string()).unwrap();
            let request = validate_reservation(&form, june_15()).unwrap();
            assert_eq!(request.guests, PartySize::SixOrMore);
        }

        #[test]
        fn test_special_requests_unconstrained() {
            let mut form = filled_reservation("2024-06-20");
            form.set("specialRequests", "  window seat \n".to_string())
                .unwrap();
            let request = validate_reservation(&form, june_15()).unwrap();
            assert_eq!(request.special_requests, "  window seat \n");
        }

        #[test]
        fn test_errors_are_in_field_order() {
            let mut form = ReservationForm::default();
            form.set("email", "nope".to_string()).unwrap();
            form.set("phone", "1".to_string()).unwrap();
            form.set("date", "2000-01-01".to_string()).unwrap();
            let errors = validate_reservation(&form, june_15()).unwrap_err();
            let scopes: Vec<ErrorScope> = errors.iter().map(|e| e.scope).collect();
            assert_eq!(
                scopes,
                vec![
                    ErrorScope::Field("name"),
                    ErrorScope::Field("email"),
                    ErrorScope::Field("phone"),
                    ErrorScope::Form,
                ]
            );
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_message() {
            let mut form = ContactForm::default();
            form.set("name", "Ann".to_string()).unwrap();
            form.set("email", "a@b.com".to_string()).unwrap();
            form.set("message", "hi".to_string()).unwrap();

            assert_eq!(
                validate_contact(&form).unwrap(),
                ContactMessage {
                    name: "Ann".to_string(),
                    email: "a@b.com".to_string(),
                    message: "hi".to_string(),
                }
            );
        }

        #[test]
        fn test_missing_name() {
            let mut form = ContactForm::default();
            form.set("email", "a@b.com".to_string()).unwrap();
            form.set("message", "hi".to_string()).unwrap();

            let errors = validate_contact(&form).unwrap_err();
            assert_eq!(
                errors.for_field("name").collect::<Vec<_>>(),
                vec![ValidationKind::Required]
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_all_empty() {
            let errors = validate_contact(&ContactForm::default()).unwrap_err();
            assert_eq!(errors.len(), 3);
            assert!(errors.contains(ErrorScope::Field("message"), ValidationKind::Required));
        }
    }
}
