//! Date picker state for the joining date

use chrono::NaiveDate;
use shared::validation::today_utc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatePickError {
    #[error("{date} is after the latest selectable date {max}")]
    AfterMax { date: NaiveDate, max: NaiveDate },
}

/// Selected date plus the latest date the picker offers
///
/// Without a fixed maximum the picker stops at today (UTC), evaluated at
/// each pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePicker {
    selected: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl DatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picker whose latest selectable date is fixed
    pub fn with_max(max: NaiveDate) -> Self {
        Self {
            selected: None,
            max: Some(max),
        }
    }

    pub fn max(&self) -> NaiveDate {
        self.max.unwrap_or_else(today_utc)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Select a date, returning its `YYYY-MM-DD` form
    pub fn pick(&mut self, date: NaiveDate) -> Result<String, DatePickError> {
        let max = self.max();
        if date > max {
            return Err(DatePickError::AfterMax { date, max });
        }
        self.selected = Some(date);
        Ok(date.format("%Y-%m-%d").to_string())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
