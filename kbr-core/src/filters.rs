//! Report filter form model: date range and sampling interval.
//!
//! Mirrors the filter fields every chart form carries: a `from`/`to`
//! datetime range plus a sampling interval expressed as a count of hours,
//! days or months.

use crate::error::{ReportError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Datetime format accepted in the filter fields.
pub const FILTER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Date-only format accepted in the filter fields.
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sampling interval unit for time-bucketed charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Days,
    Months,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Hours, TimeUnit::Days, TimeUnit::Months];

    /// Single-letter code used in the form serialization.
    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Months => "m",
        }
    }

    /// Label shown in the unit dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Hours => "Hour(s)",
            TimeUnit::Days => "Day(s)",
            TimeUnit::Months => "Month(s)",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "h" => Ok(TimeUnit::Hours),
            "d" => Ok(TimeUnit::Days),
            "m" => Ok(TimeUnit::Months),
            other => Err(ReportError::InvalidFilter(format!(
                "unknown time unit: {:?}",
                other
            ))),
        }
    }
}

/// Current values of the chart filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilters {
    /// Range start, `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
    pub from_dt: String,
    /// Range end, same formats as `from_dt`.
    pub to_dt: String,
    /// Interval multiplier (e.g. 2 with `Days` samples every other day).
    pub count: f64,
    /// Interval unit.
    pub time_type: TimeUnit,
}

impl Default for ReportFilters {
    fn default() -> Self {
        Self {
            from_dt: String::new(),
            to_dt: String::new(),
            count: 1.0,
            time_type: TimeUnit::Days,
        }
    }
}

impl ReportFilters {
    /// Check the filter values before they go into a request.
    ///
    /// Server-side validation remains authoritative; this only catches the
    /// failures worth reporting without a round trip.
    pub fn validate(&self) -> Result<()> {
        let from = parse_filter_datetime(&self.from_dt)?;
        let to = parse_filter_datetime(&self.to_dt)?;
        if from > to {
            return Err(ReportError::InvalidFilter(format!(
                "range start {} is after range end {}",
                self.from_dt, self.to_dt
            )));
        }
        if !self.count.is_finite() || self.count <= 0.0 {
            return Err(ReportError::InvalidFilter(format!(
                "interval count must be positive, got {}",
                self.count
            )));
        }
        Ok(())
    }
}

/// Parse a filter field as `YYYY-MM-DD HH:MM`, falling back to a date-only
/// value at midnight.
pub fn parse_filter_datetime(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, FILTER_DATETIME_FORMAT) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(trimmed, FILTER_DATE_FORMAT)
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        .map_err(|_| ReportError::InvalidFilter(format!("unparseable date: {:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(from: &str, to: &str) -> ReportFilters {
        ReportFilters {
            from_dt: from.to_string(),
            to_dt: to.to_string(),
            ..ReportFilters::default()
        }
    }

    #[test]
    fn accepts_date_only_and_datetime_values() {
        assert!(filters("2024-01-01", "2024-02-01 12:30").validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = filters("2024-02-01", "2024-01-01").validate().unwrap_err();
        assert!(matches!(err, ReportError::InvalidFilter(_)));
    }

    #[test]
    fn rejects_unparseable_date() {
        assert!(filters("yesterday", "2024-01-01").validate().is_err());
    }

    #[test]
    fn rejects_non_positive_count() {
        let mut f = filters("2024-01-01", "2024-02-01");
        f.count = 0.0;
        assert!(f.validate().is_err());
    }

    #[test]
    fn date_only_value_is_midnight() {
        let dt = parse_filter_datetime("2024-03-15").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn time_unit_codes_round_trip() {
        for unit in TimeUnit::ALL {
            assert_eq!(TimeUnit::from_code(unit.code()).unwrap(), unit);
        }
        assert!(TimeUnit::from_code("w").is_err());
    }
}
