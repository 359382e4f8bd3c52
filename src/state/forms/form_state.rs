//! Shared Field Model behavior

use super::field::FormField;
use crate::error::FormError;
use crate::submission::Payload;
use crate::validation::ValidationErrors;
use chrono::NaiveDate;

/// A Field Model: the current input values of one form
///
/// Implementors hold one [`FormField`] per input plus a cursor for keyboard
/// navigation. `Default` is the documented initial snapshot that `reset`
/// restores.
pub trait Form: Default + Clone {
    /// Short name used in logs and error messages
    const NAME: &'static str;
    const SUBMIT_LABEL: &'static str;
    const SUBMITTING_LABEL: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const FAILURE_MESSAGE: &'static str;

    /// Fields in display order
    fn fields(&self) -> Vec<&FormField>;
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    /// Validate into a payload, given the current local date
    fn validate(&self, today: NaiveDate) -> Result<Payload, ValidationErrors>;

    /// Replace one field's value; no validation is performed here
    fn set(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let field = self.field_mut(name).ok_or_else(|| FormError::UnknownField {
            form: Self::NAME,
            field: name.to_string(),
        })?;
        field.set(value);
        Ok(())
    }

    /// Restore every field to its default value
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().get(index).copied()
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Whether the cursor sits on the last field
    fn is_last_field_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }
}
