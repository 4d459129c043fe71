//! Chart data request construction and form-body serialization.

use crate::filters::ReportFilters;
use crate::workflow::WorkflowColumns;

/// HTTP method for a chart data load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMethod {
    /// Parameterless initial load.
    Get,
    /// Load carrying the serialized form state.
    Post,
}

impl LoadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMethod::Get => "GET",
            LoadMethod::Post => "POST",
        }
    }
}

/// The current form state, captured as ordered key/value pairs.
///
/// Built fresh for every submit; nothing is cached between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartRequest {
    fields: Vec<(String, String)>,
}

impl ChartRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture filters and (optionally) the workflow columns in the field
    /// order the server-side form framework expects.
    pub fn from_form(filters: &ReportFilters, columns: Option<&WorkflowColumns>) -> Self {
        let mut request = Self::new();
        request.push("from_dt", &filters.from_dt);
        request.push("to_dt", &filters.to_dt);
        request.push("count", &filters.count.to_string());
        request.push("time_type", filters.time_type.code());
        if let Some(columns) = columns {
            for (name, value) in columns.form_fields() {
                request.fields.push((name, value));
            }
        }
        request
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::TimeUnit;

    fn sample_filters() -> ReportFilters {
        ReportFilters {
            from_dt: "2024-01-01".to_string(),
            to_dt: "2024-02-01 12:00".to_string(),
            count: 1.0,
            time_type: TimeUnit::Days,
        }
    }

    #[test]
    fn form_body_is_url_encoded_in_field_order() {
        let request = ChartRequest::from_form(&sample_filters(), None);
        assert_eq!(
            request.to_form_body(),
            "from_dt=2024-01-01&to_dt=2024-02-01%2012%3A00&count=1&time_type=d"
        );
    }

    #[test]
    fn workflow_fields_follow_filters_and_carry_the_count() {
        let mut columns = WorkflowColumns::new(vec![
            "New".to_string(),
            "In Progress".to_string(),
            "Complete".to_string(),
        ]);
        columns.set_selection(0, "In Progress").unwrap();

        let request = ChartRequest::from_form(&sample_filters(), Some(&columns));
        let body = request.to_form_body();
        assert!(
            body.ends_with("form-0-state=In%20Progress&form-1-state=&form-TOTAL_FORMS=2"),
            "unexpected body: {}",
            body
        );
    }

    #[test]
    fn empty_request_serializes_to_empty_body() {
        assert_eq!(ChartRequest::new().to_form_body(), "");
        assert!(ChartRequest::new().is_empty());
    }
}
