//! The fixed set of report chart kinds.
//!
//! Each page renders exactly one kind, configured at initialization. The
//! kind selects which value keys, chart type and axis setup the widget
//! descriptor carries, and which series get retired on reload.

use crate::error::ReportError;
use std::fmt;
use std::str::FromStr;

/// A report chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Scatter plot of time spent per card in the selected workflow states.
    Control,
    /// Stacked area chart of card counts per workflow state over time.
    CumulativeFlow,
    /// Sprint burndown: done/remaining story points against the ideal line.
    Burndown,
    /// Per-sprint committed vs. completed story points.
    Velocity,
    /// Card and story point counts of a single column over time.
    ListHistory,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Control,
        ChartKind::CumulativeFlow,
        ChartKind::Burndown,
        ChartKind::Velocity,
        ChartKind::ListHistory,
    ];

    /// The identifier used in page configuration and endpoint routing.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Control => "control",
            ChartKind::CumulativeFlow => "cumulative-flow",
            ChartKind::Burndown => "burndown",
            ChartKind::Velocity => "velocity",
            ChartKind::ListHistory => "list-history",
        }
    }

    /// Human-readable chart title.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Control => "Control Chart",
            ChartKind::CumulativeFlow => "Cumulative Flow Diagram",
            ChartKind::Burndown => "Burndown Chart",
            ChartKind::Velocity => "Velocity Chart",
            ChartKind::ListHistory => "Column History",
        }
    }

    /// Short description shown under the chart title.
    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Control => {
                "Time cards spent in the selected workflow states before completion."
            }
            ChartKind::CumulativeFlow => "Cards per workflow state over time.",
            ChartKind::Burndown => {
                "Completed vs. remaining story points against the ideal pace."
            }
            ChartKind::Velocity => "Committed and completed story points per sprint.",
            ChartKind::ListHistory => "Cards and story points in this column over time.",
        }
    }

    /// Whether this kind's form carries the workflow state columns.
    ///
    /// Burndown, velocity and column history pages have no workflow picker;
    /// their requests carry only the filter fields.
    pub fn has_workflow_form(&self) -> bool {
        matches!(self, ChartKind::Control | ChartKind::CumulativeFlow)
    }
}

impl FromStr for ChartKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "control" => Ok(ChartKind::Control),
            "cumulative-flow" => Ok(ChartKind::CumulativeFlow),
            "burndown" => Ok(ChartKind::Burndown),
            "velocity" => Ok(ChartKind::Velocity),
            "list-history" => Ok(ChartKind::ListHistory),
            other => Err(ReportError::Config(format!(
                "unknown chart kind: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_identifier() {
        for kind in ChartKind::ALL {
            let parsed: ChartKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_fails_configuration() {
        let err = "pie".parse::<ChartKind>().unwrap_err();
        assert!(
            matches!(err, ReportError::Config(_)),
            "unknown kind must be a configuration error, got {:?}",
            err
        );
    }

    #[test]
    fn empty_kind_fails_configuration() {
        assert!("".parse::<ChartKind>().is_err());
    }
}
