//! Type definitions for kpidash

mod dataset;
mod error;
mod kpi;
mod month;

pub use dataset::*;
pub use error::*;
pub use kpi::*;
pub use month::*;
