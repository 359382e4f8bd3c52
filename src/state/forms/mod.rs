//! Form domain layer
//!
//! Field Models for the reservation and contact forms. Values are kept as the
//! raw strings the guest typed; parsing happens in validation.

mod contact_form;
mod field;
mod form_state;
mod reservation_form;

pub use contact_form::ContactForm;
pub use field::FormField;
pub use form_state::Form;
pub use reservation_form::ReservationForm;
