//! Dataset model: daily records, aggregation configuration, operation scope

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Fallback operation codes for datasets whose metadata carries no list.
pub const DEFAULT_OPERATIONS: [&str; 4] = ["DRC", "SL", "GM", "AO"];

/// Monthly aggregation rule for a (company, field) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationRule {
    /// Total of the field across all matching rows
    Sum,
    /// Value from the chronologically last row within the month
    Last,
}

/// One dataset row: a (date, operation) pair with per-company field values.
///
/// Company values stay raw JSON so sparse or malformed rows read as 0
/// instead of failing the whole load.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    /// Calendar day, canonical `YYYY-MM-DD`
    pub date: String,
    /// Operation code (e.g. "DRC")
    pub operation: String,
    /// Company name → { field name → value }
    #[serde(flatten)]
    pub companies: HashMap<String, serde_json::Value>,
}

impl DailyRecord {
    /// Numeric value for (company, field). Missing company, missing field,
    /// and non-numeric leaves all coerce to 0.0.
    pub fn value(&self, company: &str, field: &str) -> f64 {
        self.companies
            .get(company)
            .and_then(|fields| fields.get(field))
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
}

/// Dataset-supplied metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    /// Known operation codes, in display order
    #[serde(default)]
    pub operations: Vec<String>,
    /// Overall date coverage, used to pick the default reporting month
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// Inclusive date coverage of the dataset (`YYYY-MM-DD` bounds)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Per-company per-field aggregation overrides plus the global default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub monthly_aggregation_rules: AggregationRules,
    /// Company name → { field name → config }
    #[serde(default)]
    pub kpis: HashMap<String, HashMap<String, FieldConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregationRules {
    #[serde(default)]
    pub default_rule: Option<AggregationRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub monthly_aggregation: Option<AggregationRule>,
}

/// The full in-memory dataset: rows plus configuration.
///
/// Loaded once and treated as immutable; every aggregation call takes it
/// as an explicit parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub configuration: Configuration,
    #[serde(default)]
    pub data: Vec<DailyRecord>,
}

impl Dataset {
    /// Known operation codes: the metadata-supplied list is the source of
    /// truth; the fixed default set applies only when that list is absent
    /// or empty.
    pub fn operations(&self) -> Vec<&str> {
        if self.metadata.operations.is_empty() {
            DEFAULT_OPERATIONS.to_vec()
        } else {
            self.metadata.operations.iter().map(String::as_str).collect()
        }
    }

    /// Aggregation rule for (company, field): explicit per-field override,
    /// then the configured default, then `Sum`.
    pub fn rule(&self, company: &str, field: &str) -> AggregationRule {
        self.configuration
            .kpis
            .get(company)
            .and_then(|fields| fields.get(field))
            .and_then(|cfg| cfg.monthly_aggregation)
            .or(self.configuration.monthly_aggregation_rules.default_rule)
            .unwrap_or(AggregationRule::Sum)
    }
}

/// Operation scope for an aggregation pass: one code, or every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationSelector {
    All,
    Only(String),
}

impl OperationSelector {
    pub fn matches(&self, operation: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(code) => code == operation,
        }
    }
}

impl FromStr for OperationSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for OperationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(code) => write!(f, "{}", code),
        }
    }
}
