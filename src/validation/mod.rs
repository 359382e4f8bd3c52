//! Validation of form input into submission payloads
//!
//! Validators are pure functions of a Field Model and the current date. Every
//! rule runs on every call, so the caller gets the complete list of problems in
//! field order rather than only the first one.

mod clock;
mod rules;

pub use clock::{DateProvider, FixedDateProvider, LocalDateProvider};
pub use rules::{validate_contact, validate_reservation};

use std::fmt;

/// What a validation error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// A single named field
    Field(&'static str),
    /// The form as a whole (cross-field or business rules)
    Form,
}

/// Which rule failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    InvalidEmail,
    InvalidPhone,
    InvalidChoice,
    InvalidDate,
    PastDate,
}

impl ValidationKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid 10-digit phone number",
            Self::InvalidChoice => "Please choose one of the listed options",
            Self::InvalidDate => "Please enter a date as YYYY-MM-DD",
            Self::PastDate => "Please select a future date",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub scope: ErrorScope,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn field(name: &'static str, kind: ValidationKind) -> Self {
        Self {
            scope: ErrorScope::Field(name),
            kind,
        }
    }

    pub fn form(kind: ValidationKind) -> Self {
        Self {
            scope: ErrorScope::Form,
            kind,
        }
    }
}

/// A non-empty set of validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap collected errors, or `None` when nothing failed
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors attached to the named field
    pub fn for_field<'a>(&'a self, name: &'a str) -> impl Iterator<Item = ValidationKind> + 'a {
        self.0.iter().filter_map(move |e| match e.scope {
            ErrorScope::Field(field) if field == name => Some(e.kind),
            _ => None,
        })
    }

    /// Errors not attributable to a single field
    pub fn form_level(&self) -> impl Iterator<Item = ValidationKind> + '_ {
        self.0
            .iter()
            .filter(|e| e.scope == ErrorScope::Form)
            .map(|e| e.kind)
    }

    pub fn contains(&self, scope: ErrorScope, kind: ValidationKind) -> bool {
        self.0.iter().any(|e| e.scope == scope && e.kind == kind)
    }
}
