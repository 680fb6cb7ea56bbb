//! Dashboard DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use domain_claims::{
    CellValue, ClaimFilter, PaidFilter, PipelineOutput, TypeAggregate, TypeCounts, TypeSums,
};

use crate::error::ApiError;

/// Sidebar menu entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    #[serde(rename = "ECharts View")]
    EChartsView,
    #[serde(rename = "Raw Data")]
    RawData,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::EChartsView, View::RawData];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::EChartsView => "ECharts View",
            View::RawData => "Raw Data",
        }
    }

    /// Bootstrap icon name shown next to the menu entry
    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "bar-chart",
            View::EChartsView => "pie-chart",
            View::RawData => "table",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown view {:?}", s)))
    }
}

/// Raw query string of every dashboard request.
///
/// Values are kept as strings so that bad input produces the dashboard's own
/// error messages rather than a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub view: Option<String>,
    pub paid: Option<String>,
    pub high_claims: Option<String>,
}

impl DashboardQuery {
    pub fn view(&self) -> Result<View, ApiError> {
        match self.view.as_deref() {
            None | Some("") => Ok(View::default()),
            Some(v) => v.parse(),
        }
    }

    /// Parses the paid-status and high-claims controls.
    ///
    /// `high_claims` accepts what an HTML checkbox or a JSON client sends:
    /// `on`, `true`, `1` and `off`, `false`, `0`, or an empty value.
    pub fn filter(&self) -> Result<ClaimFilter, ApiError> {
        let paid = match self.paid.as_deref() {
            None | Some("") => PaidFilter::All,
            Some(p) => p
                .parse::<PaidFilter>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        };

        let high_claims_only = match self.high_claims.as_deref() {
            None | Some("") | Some("off") | Some("false") | Some("0") => false,
            Some("on") | Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid high_claims value {:?}, expected true or false",
                    other
                )))
            }
        };

        Ok(ClaimFilter::new(paid, high_claims_only))
    }
}

/// Aggregates for one rendering cycle
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub filter: ClaimFilter,
    pub total: usize,
    pub type_counts: TypeCounts,
    pub type_sums: TypeSums,
    pub aggregates: Vec<TypeAggregate>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardResponse {
    pub fn new(filter: ClaimFilter, output: &PipelineOutput) -> Self {
        Self {
            filter,
            total: output.claims.len(),
            type_counts: output.type_counts.clone(),
            type_sums: output.type_sums.clone(),
            aggregates: output.aggregates(),
            generated_at: Utc::now(),
        }
    }
}

/// The filtered claim table with the derived `Type` column appended
#[derive(Debug, Serialize)]
pub struct ClaimsTableResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ClaimsTableResponse {
    pub const TYPE_COLUMN: &'static str = "Type";

    pub fn new(output: &PipelineOutput) -> Self {
        let mut columns = output.claims.columns.clone();
        columns.push(Self::TYPE_COLUMN.to_string());

        let rows = output
            .claims
            .iter()
            .map(|record| {
                let mut row = record.cells.clone();
                row.resize(output.claims.columns.len(), CellValue::Empty);
                row.push(CellValue::Text(record.claim_type().label().to_string()));
                row
            })
            .collect();

        Self { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(view: Option<&str>, paid: Option<&str>, high: Option<&str>) -> DashboardQuery {
        DashboardQuery {
            view: view.map(String::from),
            paid: paid.map(String::from),
            high_claims: high.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let q = DashboardQuery::default();
        assert_eq!(q.view().unwrap(), View::Dashboard);
        assert_eq!(q.filter().unwrap(), ClaimFilter::default());
    }

    #[test]
    fn test_view_labels_round_trip() {
        for view in View::ALL {
            assert_eq!(view.label().parse::<View>().unwrap(), view);
        }
        assert!(query(Some("Charts"), None, None).view().is_err());
    }

    #[test]
    fn test_checkbox_values() {
        assert!(query(None, None, Some("on")).filter().unwrap().high_claims_only);
        assert!(query(None, None, Some("true")).filter().unwrap().high_claims_only);
        assert!(!query(None, None, Some("false")).filter().unwrap().high_claims_only);
        assert!(query(None, None, Some("maybe")).filter().is_err());
    }

    #[test]
    fn test_paid_values() {
        assert_eq!(
            query(None, Some("YES"), None).filter().unwrap().paid,
            PaidFilter::Yes
        );
        let err = query(None, Some("Yes"), None).filter().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
