//! Form field value objects

/// How a field accepts keystrokes and how it is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Keystrokes are masked to ASCII digits
    Phone,
    /// Date typed as `YYYY-MM-DD`
    Date,
    /// Value is one of a fixed option list
    Choice(&'static [&'static str]),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required, String::new())
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Multiline, required, String::new())
    }

    /// Create a new phone field
    pub fn phone(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Phone, true, String::new())
    }

    /// Create a new date field
    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date, true, String::new())
    }

    /// Create a new choice field with its initial selection
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &str,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Choice(options),
            true,
            default.to_string(),
        )
    }

    fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        required: bool,
        value: String,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value,
        }
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value verbatim, bypassing keystroke masking
    pub fn set(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Push a typed character to the field value
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text | FieldKind::Multiline => self.value.push(c),
            FieldKind::Phone => {
                if c.is_ascii_digit() {
                    self.value.push(c);
                }
            }
            FieldKind::Date => {
                if c.is_ascii_digit() || c == '-' {
                    self.value.push(c);
                }
            }
            // Choice fields are driven by cycle_next/cycle_prev
            FieldKind::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if !self.is_choice() {
            self.value.pop();
        }
    }

    /// Select the next option of a choice field (wraps around)
    pub fn cycle_next(&mut self) {
        if let FieldKind::Choice(options) = self.kind {
            let next = match options.iter().position(|o| *o == self.value) {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            };
            if let Some(option) = options.get(next) {
                self.value = option.to_string();
            }
        }
    }

    /// Select the previous option of a choice field (wraps around)
    pub fn cycle_prev(&mut self) {
        if let FieldKind::Choice(options) = self.kind {
            let prev = match options.iter().position(|o| *o == self.value) {
                Some(0) | None => options.len().saturating_sub(1),
                Some(i) => i - 1,
            };
            if let Some(option) = options.get(prev) {
                self.value = option.to_string();
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) => format!("◂ {} ▸", self.value),
            FieldKind::Date if self.value.is_empty() => "YYYY-MM-DD".to_string(),
            _ => self.value.clone(),
        }
    }
}
