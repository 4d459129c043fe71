//! Declarative chart widget descriptors, one render/reload pair per kind.
//!
//! The rendering engine is external: it accepts a JSON configuration
//! describing the series data, key sets, chart type and axes, and an
//! in-place `load` update naming the series to add and the previously
//! shown series to retire (`unload`). This module builds those
//! configurations; `ChartKind` is the dispatch key, and the exhaustive
//! matches below replace any string-keyed lookup, so there is no
//! missing-kind case left to fail at render time.

use crate::chart_kind::ChartKind;
use crate::error::{ReportError, Result};
use crate::response::SuccessResponse;
use serde_json::{json, Value};

/// x-value format of datetime-stamped series points.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Tick format for day-granularity time axes.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// The value keys (series names) a rendered chart of `kind` shows.
///
/// The cumulative flow diagram takes its series from the response `order`;
/// every other kind has a fixed key set.
pub fn value_keys(kind: ChartKind, response: &SuccessResponse) -> Result<Vec<String>> {
    let fixed: &[&str] = match kind {
        ChartKind::Control => &["date", "days"],
        ChartKind::CumulativeFlow => {
            return response.order.clone().ok_or_else(|| {
                ReportError::Decode("cumulative flow response is missing the order key".to_string())
            });
        }
        ChartKind::Burndown => &["done", "not_done", "date", "ideal"],
        ChartKind::Velocity => &["done", "committed", "average"],
        ChartKind::ListHistory => &["cards", "story_points", "date"],
    };
    Ok(fixed.iter().map(|s| s.to_string()).collect())
}

/// Build the full widget configuration for the initial render.
pub fn render_descriptor(kind: ChartKind, response: &SuccessResponse) -> Result<Value> {
    let data = data_block(kind, response)?;
    let descriptor = match kind {
        ChartKind::Control => json!({
            "data": data,
            "size": {"height": 480},
            "legend": {"show": true},
            "axis": {
                "x": {
                    "type": "timeseries",
                    "tick": {"format": DAY_FORMAT, "label": "Date"},
                },
                "y": {"label": "Days"},
            },
        }),
        ChartKind::CumulativeFlow => json!({
            "data": data,
            "size": {"height": 480},
            "legend": {"show": true},
            "axis": {
                "x": {
                    "type": "timeseries",
                    "label": "Date",
                    "tick": {"format": DAY_FORMAT},
                },
                "y": {"label": "# cards"},
            },
            "line": {"connectNull": true},
        }),
        ChartKind::Burndown => json!({
            "data": data,
            "size": {"height": 480},
            "legend": {"show": true},
            "axis": {
                "x": {
                    "type": "timeseries",
                    "label": "Date",
                    "tick": {"format": DAY_FORMAT},
                },
                "y": {"label": "Story points"},
            },
            "line": {"connectNull": true},
        }),
        ChartKind::Velocity => json!({
            "data": data,
            "legend": {"show": true},
            "bar": {"width": {"ratio": 0.5}},
            "axis": {
                "x": {"type": "category", "label": "Sprint"},
                "y": {"label": "Story points"},
            },
        }),
        ChartKind::ListHistory => json!({
            "data": data,
            "legend": {"show": true},
            "axis": {
                "x": {
                    "type": "timeseries",
                    "label": "Time",
                    "tick": {"format": DAY_FORMAT},
                },
                "y": {"label": "Count"},
            },
        }),
    };
    Ok(descriptor)
}

/// Build the in-place update for a submit-triggered reload.
///
/// `unload` names the series currently on the widget; they are retired as
/// the new columns load so stale series never linger after the workflow
/// selection changes.
pub fn reload_descriptor(
    kind: ChartKind,
    response: &SuccessResponse,
    unload: &[String],
) -> Result<Value> {
    let mut block = data_block(kind, response)?;
    block["unload"] = json!(unload);
    Ok(block)
}

/// The shared data section of render and reload descriptors.
fn data_block(kind: ChartKind, response: &SuccessResponse) -> Result<Value> {
    let keys = value_keys(kind, response)?;
    let block = match kind {
        ChartKind::Control => json!({
            "json": response.data,
            "keys": {"value": keys, "x": "date"},
            "xFormat": DATETIME_FORMAT,
            "type": "scatter",
        }),
        ChartKind::CumulativeFlow => json!({
            "json": response.data,
            "keys": {"value": keys, "x": "date"},
            "xFormat": DATETIME_FORMAT,
            "type": "area",
            "groups": [keys],
            "order": null,
        }),
        ChartKind::Burndown => json!({
            "json": response.data,
            "keys": {"value": keys, "x": "date"},
            "xFormat": DATETIME_FORMAT,
            "types": {"done": "bar", "not_done": "line", "ideal": "line"},
        }),
        ChartKind::Velocity => json!({
            "json": response.data,
            "keys": {"value": keys, "x": "name"},
            "types": {"done": "bar", "committed": "bar", "average": "area"},
        }),
        ChartKind::ListHistory => json!({
            "json": response.data,
            "keys": {"value": keys, "x": "date"},
            "xFormat": DATETIME_FORMAT,
            "type": "line",
        }),
    };
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(data: Value, order: Option<Vec<&str>>) -> SuccessResponse {
        SuccessResponse {
            data,
            order: order.map(|o| o.iter().map(|s| s.to_string()).collect()),
            all_lists: None,
            html: None,
        }
    }

    #[test]
    fn burndown_render_forwards_data_verbatim() {
        let payload = json!({"done": 5, "not_done": 3, "date": "2024-01-01", "ideal": 8});
        let response = success(payload.clone(), None);
        let descriptor = render_descriptor(ChartKind::Burndown, &response).unwrap();
        assert_eq!(descriptor["data"]["json"], payload);
        assert_eq!(
            descriptor["data"]["keys"]["value"],
            json!(["done", "not_done", "date", "ideal"])
        );
    }

    #[test]
    fn cumulative_flow_uses_order_as_keys_and_groups() {
        let response = success(json!([]), Some(vec!["a", "b"]));
        let descriptor = render_descriptor(ChartKind::CumulativeFlow, &response).unwrap();
        assert_eq!(descriptor["data"]["keys"]["value"], json!(["a", "b"]));
        assert_eq!(descriptor["data"]["groups"], json!([["a", "b"]]));
    }

    #[test]
    fn cumulative_flow_reload_round_trips_order_and_unloads_previous() {
        let response = success(json!([{"date": "2024-01-01", "a": 1, "b": 2}]), Some(vec!["a", "b"]));
        let previous = vec!["x".to_string(), "y".to_string()];
        let block = reload_descriptor(ChartKind::CumulativeFlow, &response, &previous).unwrap();
        assert_eq!(block["keys"]["value"], json!(["a", "b"]));
        assert_eq!(block["groups"], json!([["a", "b"]]));
        assert_eq!(block["unload"], json!(["x", "y"]));
    }

    #[test]
    fn cumulative_flow_without_order_is_a_decode_failure() {
        let response = success(json!([]), None);
        let err = render_descriptor(ChartKind::CumulativeFlow, &response).unwrap_err();
        assert!(matches!(err, ReportError::Decode(_)));
    }

    #[test]
    fn fixed_kind_reload_unloads_current_series() {
        let response = success(json!([]), None);
        let shown = value_keys(ChartKind::Burndown, &response).unwrap();
        let block = reload_descriptor(ChartKind::Burndown, &response, &shown).unwrap();
        assert_eq!(block["unload"], json!(["done", "not_done", "date", "ideal"]));
    }

    #[test]
    fn control_is_a_timeseries_scatter() {
        let response = success(json!([]), None);
        let descriptor = render_descriptor(ChartKind::Control, &response).unwrap();
        assert_eq!(descriptor["data"]["type"], json!("scatter"));
        assert_eq!(descriptor["axis"]["x"]["type"], json!("timeseries"));
        assert_eq!(descriptor["data"]["xFormat"], json!(DATETIME_FORMAT));
    }

    #[test]
    fn velocity_is_a_category_chart_keyed_by_sprint_name() {
        let response = success(json!([{"name": "s1", "done": 3, "committed": 5, "average": 4.0}]), None);
        let descriptor = render_descriptor(ChartKind::Velocity, &response).unwrap();
        assert_eq!(descriptor["axis"]["x"]["type"], json!("category"));
        assert_eq!(descriptor["data"]["keys"]["x"], json!("name"));
        assert!(descriptor["data"].get("xFormat").is_none());
    }

    #[test]
    fn every_kind_has_a_render_and_reload_descriptor() {
        for kind in ChartKind::ALL {
            let response = success(json!([]), Some(vec!["a"]));
            let shown = value_keys(kind, &response).unwrap();
            assert!(render_descriptor(kind, &response).is_ok());
            assert!(reload_descriptor(kind, &response, &shown).is_ok());
        }
    }
}
