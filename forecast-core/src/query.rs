//! Read accessors that turn a [`ForecastModel`] into display-ready days.
//!
//! Accessors never fail. Missing or out-of-range data yields
//! [`ForecastDay::placeholder`] because the consuming UI renders a fixed
//! number of slots unconditionally. [`ForecastModel::day`] is the
//! `Option`-returning variant for callers that want to see the gap.

use crate::{
    condition::classify,
    label::label,
    model::{ForecastDay, ForecastModel},
};

/// Highest day offset a query will answer.
pub const MAX_DAY_OFFSET: i64 = 5;

/// Number of day slots in the forecast row.
pub const DAY_SLOTS: usize = 5;

impl ForecastModel {
    /// Current conditions, labelled "Today".
    ///
    /// Assumes the provider's `current` block and `daily[0]` fall on the same
    /// calendar day in the requested timezone.
    pub fn current_day(&self) -> ForecastDay {
        let Some(first) = self.daily.dates.first() else {
            return ForecastDay::placeholder();
        };

        ForecastDay {
            label: label(first, true),
            temperature_high: None,
            temperature_low: None,
            current_temperature: Some(self.current.temperature),
            category: classify(self.current.weather_code),
        }
    }

    /// Forecast for `offset` days from today, or the placeholder day when
    /// the offset is outside `0..=5` or past the end of the data.
    pub fn day_offset(&self, offset: i64) -> ForecastDay {
        self.day(offset).unwrap_or_else(ForecastDay::placeholder)
    }

    pub fn day(&self, offset: i64) -> Option<ForecastDay> {
        if !(0..=MAX_DAY_OFFSET).contains(&offset) {
            return None;
        }
        let idx = usize::try_from(offset).ok()?;

        // Arrays are expected to be the same length; an index missing from any is absent.
        let daily = &self.daily;
        let date = daily.dates.get(idx)?;
        let code = *daily.weather_codes.get(idx)?;
        let high = *daily.temperature_max.get(idx)?;
        let low = *daily.temperature_min.get(idx)?;

        Some(ForecastDay {
            label: label(date, idx == 0),
            temperature_high: Some(high),
            temperature_low: Some(low),
            current_temperature: None,
            category: classify(code),
        })
    }

    /// The fixed row of day slots starting at today.
    pub fn day_slots(&self) -> Vec<ForecastDay> {
        (0..DAY_SLOTS as i64).map(|offset| self.day_offset(offset)).collect()
    }
}
