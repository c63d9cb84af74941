//! Daily trend series building and axis alignment

use std::collections::HashMap;

use serde::Serialize;

use crate::services::Aggregator;
use crate::types::{
    DailyPoint, Dataset, KpiDefinition, MonthKey, OperationSelector, PRIMARY_COMPANY,
    SECONDARY_COMPANY,
};

/// Two daily series plotted on one shared date axis.
#[derive(Debug, Clone, Serialize)]
pub struct AlignedSeries {
    /// Sorted union of both series' dates
    pub dates: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Builds per-day series for trend charting.
pub struct SeriesBuilder;

impl SeriesBuilder {
    /// Per-day totals for one KPI in one (month, operation) scope, sorted
    /// ascending by date.
    ///
    /// Always sums, regardless of the KPI's monthly rule: a day-granularity
    /// trend is a point-in-time read, so same-day rows across operations
    /// stack into one cross-operation total even for snapshot KPIs.
    pub fn daily(
        dataset: Option<&Dataset>,
        month: &MonthKey,
        selector: &OperationSelector,
        kpi: &KpiDefinition,
    ) -> Vec<DailyPoint> {
        let rows = Aggregator::filter_rows(dataset, month, selector);

        let mut by_date: HashMap<&str, f64> = HashMap::new();
        for row in rows {
            let primary = kpi
                .primary_field
                .map(|f| row.value(PRIMARY_COMPANY, f))
                .unwrap_or(0.0);
            let secondary = kpi
                .secondary_field
                .map(|f| row.value(SECONDARY_COMPANY, f))
                .unwrap_or(0.0);
            *by_date.entry(row.date.as_str()).or_insert(0.0) += primary + secondary;
        }

        let mut points: Vec<DailyPoint> = by_date
            .into_iter()
            .map(|(date, value)| DailyPoint {
                date: date.to_string(),
                value,
            })
            .collect();
        points.sort_by(|a, b| a.date.cmp(&b.date));
        points
    }

    /// Merge two series onto the sorted union of their dates, filling 0
    /// where a series has no point for a day.
    pub fn align(left: &[DailyPoint], right: &[DailyPoint]) -> AlignedSeries {
        let mut dates: Vec<String> = left
            .iter()
            .chain(right.iter())
            .map(|p| p.date.clone())
            .collect();
        dates.sort();
        dates.dedup();

        let left_by: HashMap<&str, f64> =
            left.iter().map(|p| (p.date.as_str(), p.value)).collect();
        let right_by: HashMap<&str, f64> =
            right.iter().map(|p| (p.date.as_str(), p.value)).collect();

        let left_values = dates
            .iter()
            .map(|d| left_by.get(d.as_str()).copied().unwrap_or(0.0))
            .collect();
        let right_values = dates
            .iter()
            .map(|d| right_by.get(d.as_str()).copied().unwrap_or(0.0))
            .collect();

        AlignedSeries {
            dates,
            left: left_values,
            right: right_values,
        }
    }
}
