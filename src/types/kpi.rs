//! KPI definitions and aggregate output types

use serde::Serialize;

/// Company keys as they appear in dataset rows.
pub const PRIMARY_COMPANY: &str = "Africell";
pub const SECONDARY_COMPANY: &str = "Afrimoney";

/// Maps a user-facing KPI name to its per-company dataset fields.
///
/// A side with no field mapping always contributes 0 (e.g. Data Consumption
/// exists for the telecom company only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiDefinition {
    pub name: &'static str,
    pub primary_field: Option<&'static str>,
    pub secondary_field: Option<&'static str>,
    pub unit: &'static str,
}

impl KpiDefinition {
    pub const fn new(
        name: &'static str,
        primary_field: Option<&'static str>,
        secondary_field: Option<&'static str>,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            primary_field,
            secondary_field,
            unit,
        }
    }
}

/// Dashboard KPI cards, in display order.
pub const DISPLAY_KPIS: [KpiDefinition; 9] = [
    KpiDefinition::new("Revenue", Some("Revenue_USD"), Some("Revenue_USD"), "USD"),
    KpiDefinition::new("Recharge", Some("Recharge_USD"), Some("Recharge_USD"), "USD"),
    KpiDefinition::new("Data Consumption", Some("Data_Consumption_GB"), None, "GB"),
    KpiDefinition::new("Minute Of Use", Some("Minute_of_Use_Min"), None, "Min"),
    KpiDefinition::new("Churn Subs", Some("Churn_Subs"), Some("Churn_Subs"), "Subs"),
    KpiDefinition::new(
        "New Joining",
        Some("New_Joining_Subs"),
        Some("New_Joining_Subs"),
        "Subs",
    ),
    KpiDefinition::new("Rgs 30", Some("RGS_30_Subs"), Some("RGS_30_Subs"), "Subs"),
    KpiDefinition::new(
        "Active 30",
        Some("Active_30_Subs"),
        Some("Active_30_Subs"),
        "Subs",
    ),
    KpiDefinition::new("Total Subs", Some("Total_Subs"), Some("Total_Subs"), "Subs"),
];

/// The two KPIs plotted by the trend view.
pub const REVENUE_KPI: &KpiDefinition = &DISPLAY_KPIS[0];
pub const RECHARGE_KPI: &KpiDefinition = &DISPLAY_KPIS[1];

/// Subscriber bar chart subset of [`DISPLAY_KPIS`].
pub const SUBSCRIBER_KPIS: [KpiDefinition; 3] = [
    KpiDefinition::new("Rgs 30", Some("RGS_30_Subs"), Some("RGS_30_Subs"), "Subs"),
    KpiDefinition::new(
        "Active 30",
        Some("Active_30_Subs"),
        Some("Active_30_Subs"),
        "Subs",
    ),
    KpiDefinition::new("Total Subs", Some("Total_Subs"), Some("Total_Subs"), "Subs"),
];

/// Look up a dashboard KPI by display name (case-insensitive).
pub fn find_kpi(name: &str) -> Option<&'static KpiDefinition> {
    DISPLAY_KPIS.iter().find(|k| k.name.eq_ignore_ascii_case(name))
}

/// Aggregate for one KPI in one (month, operation) scope.
///
/// `total` is always `primary + secondary`; construct via [`AggregateResult::new`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateResult {
    pub primary: f64,
    pub secondary: f64,
    pub total: f64,
}

impl AggregateResult {
    pub fn new(primary: f64, secondary: f64) -> Self {
        Self {
            primary,
            secondary,
            total: primary + secondary,
        }
    }
}

/// One point of a daily trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub value: f64,
}

/// Per-operation breakdown row for the "all operations" detail table.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRow {
    pub operation: String,
    #[serde(flatten)]
    pub result: AggregateResult,
}
