//! JSON export of aggregate reports.
//!
//! The report itself carries no timestamp so repeated runs stay identical;
//! the export envelope records when it was produced.

use crate::error::ExportResult;
use crate::report::AggregateReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Downloadable report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExport {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub report: AggregateReport,
}

impl ReportExport {
    /// Wrap a report, stamped with the current time
    pub fn new(report: AggregateReport) -> Self {
        Self::at(report, Utc::now())
    }

    /// Wrap a report with an explicit timestamp
    pub fn at(report: AggregateReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }

    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn write_to_file(&self, path: &Path) -> ExportResult<()> {
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "Exported cable report");
        Ok(())
    }
}
