//! Source of "today" for date rules

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date in the guest's local zone
pub trait DateProvider: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock, truncated to the date
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateProvider;

impl DateProvider for LocalDateProvider {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider(pub NaiveDate);

impl DateProvider for FixedDateProvider {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
