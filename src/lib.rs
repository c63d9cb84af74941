//! Monthly KPI aggregation over daily dashboard datasets
//!
//! A dataset of daily per-operation, per-company metric rows is reduced to
//! month-scoped KPI aggregates, per-day trend series, three-period
//! comparisons, and per-operation breakdowns. The aggregation engine in
//! [`services`] is pure and stateless; [`cli`] is a thin terminal reporter
//! on top of it.

pub mod cli;
pub mod services;
pub mod types;
