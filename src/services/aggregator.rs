//! Aggregator service: month-scoped KPI aggregation over daily records

use crate::types::{
    AggregateResult, AggregationRule, DailyRecord, Dataset, KpiDefinition, MonthKey,
    OperationRow, OperationSelector, PRIMARY_COMPANY, SECONDARY_COMPANY,
};

/// Pure aggregation functions over an immutable dataset.
///
/// Every entry point takes the dataset as an explicit parameter; `None`
/// means "no data yet" and yields zeros or empty output, never an error.
pub struct Aggregator;

impl Aggregator {
    /// Select the rows matching a month and operation scope.
    ///
    /// Output order is unspecified; callers that need chronology sort
    /// themselves.
    pub fn filter_rows<'a>(
        dataset: Option<&'a Dataset>,
        month: &MonthKey,
        selector: &OperationSelector,
    ) -> Vec<&'a DailyRecord> {
        let Some(dataset) = dataset else {
            return Vec::new();
        };
        dataset
            .data
            .iter()
            .filter(|r| month.contains(&r.date) && selector.matches(&r.operation))
            .collect()
    }

    /// Aggregate one (company, field) pair for a month and operation scope.
    ///
    /// `Sum` totals the field over all matching rows. `Last` takes the value
    /// of the chronologically last row; under the `All` scope it sums each
    /// operation's own last snapshot instead of taking the overall latest
    /// row, since operations are independent counters and a single latest
    /// row would zero out every other operation's snapshot.
    pub fn field(
        dataset: Option<&Dataset>,
        month: &MonthKey,
        selector: &OperationSelector,
        company: &str,
        field: Option<&str>,
    ) -> f64 {
        let Some(field) = field else {
            return 0.0;
        };
        let Some(dataset) = dataset else {
            return 0.0;
        };

        let rows = Self::filter_rows(Some(dataset), month, selector);

        match dataset.rule(company, field) {
            AggregationRule::Sum => rows.iter().map(|r| r.value(company, field)).sum(),
            AggregationRule::Last => match selector {
                OperationSelector::Only(_) => Self::last_value(&rows, company, field),
                OperationSelector::All => dataset
                    .operations()
                    .iter()
                    .map(|op| {
                        let op_rows: Vec<&DailyRecord> = rows
                            .iter()
                            .copied()
                            .filter(|r| r.operation == *op)
                            .collect();
                        Self::last_value(&op_rows, company, field)
                    })
                    .sum(),
            },
        }
    }

    /// Aggregate one KPI: one [`Self::field`] call per company side.
    pub fn kpi(
        dataset: Option<&Dataset>,
        month: &MonthKey,
        selector: &OperationSelector,
        kpi: &KpiDefinition,
    ) -> AggregateResult {
        let primary = Self::field(dataset, month, selector, PRIMARY_COMPANY, kpi.primary_field);
        let secondary = Self::field(
            dataset,
            month,
            selector,
            SECONDARY_COMPANY,
            kpi.secondary_field,
        );
        AggregateResult::new(primary, secondary)
    }

    /// One aggregate per known operation code, in configured order.
    pub fn operation_breakdown(
        dataset: Option<&Dataset>,
        month: &MonthKey,
        kpi: &KpiDefinition,
    ) -> Vec<OperationRow> {
        let Some(dataset) = dataset else {
            return Vec::new();
        };
        dataset
            .operations()
            .iter()
            .map(|op| OperationRow {
                operation: (*op).to_string(),
                result: Self::kpi(
                    Some(dataset),
                    month,
                    &OperationSelector::Only((*op).to_string()),
                    kpi,
                ),
            })
            .collect()
    }

    /// Value of the chronologically last row. The lexicographic date sort is
    /// stable, so two rows sharing the latest date resolve to the one that
    /// came later in input order. Empty input yields 0.
    fn last_value(rows: &[&DailyRecord], company: &str, field: &str) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted.last().map(|r| r.value(company, field)).unwrap_or(0.0)
    }
}
