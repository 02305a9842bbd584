//! Historical employee dataset: validated load from CSV or JSON, held
//! immutable for the process lifetime.
//!
//! Datasets are human-maintained, so the row policy is skip-and-continue:
//! a malformed row (missing column, bad number, out-of-range rating,
//! duplicate id) is logged and counted, never fatal. Only a dataset with
//! zero valid rows aborts the load.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::{compute_statistics, DatasetStatistics};
use crate::stress::StressLevel;
use crate::WorkProfile;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported dataset format `{0}` (use .csv or .json)")]
    UnsupportedFormat(String),
    #[error("malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no valid rows in dataset ({skipped} skipped)")]
    Empty { skipped: usize },
}

/// One historical record: raw metrics, the scores derived at the time, and
/// the recorded outcome. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub work_hours_per_week: f64,
    pub sleep_hours_per_day: f64,
    pub meetings_per_week: f64,
    pub emails_per_day: f64,
    pub deadline_pressure: f64,
    pub task_complexity: f64,
    pub team_support: f64,
    pub work_life_balance: f64,
    pub stress_level: StressLevel,
    pub burnout_score: f64,
    pub outcome: String,
}

impl EmployeeRecord {
    /// The record's metrics as a query profile, e.g. for record-to-record
    /// similarity.
    pub fn profile(&self) -> WorkProfile {
        WorkProfile {
            work_hours_per_week: self.work_hours_per_week,
            sleep_hours_per_day: self.sleep_hours_per_day,
            meetings_per_week: self.meetings_per_week,
            emails_per_day: self.emails_per_day,
            deadline_pressure: self.deadline_pressure,
            task_complexity: self.task_complexity,
            team_support: self.team_support,
            work_life_balance: self.work_life_balance,
        }
    }

    /// Range checks applied at the load boundary. Inside the engines
    /// values are clamped instead; here a violation skips the row.
    fn validate(&self) -> Result<(), String> {
        if self.employee_id.trim().is_empty() {
            return Err("employee_id must not be empty".to_string());
        }
        for (name, value) in [
            ("work_hours_per_week", self.work_hours_per_week),
            ("sleep_hours_per_day", self.sleep_hours_per_day),
            ("meetings_per_week", self.meetings_per_week),
            ("emails_per_day", self.emails_per_day),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        for (name, value) in [
            ("deadline_pressure", self.deadline_pressure),
            ("task_complexity", self.task_complexity),
            ("team_support", self.team_support),
            ("work_life_balance", self.work_life_balance),
        ] {
            if !(1.0..=10.0).contains(&value) {
                return Err(format!("{name} out of 1-10 range: {value}"));
            }
        }
        if !(0.0..=100.0).contains(&self.burnout_score) {
            return Err(format!(
                "burnout_score out of 0-100 range: {}",
                self.burnout_score
            ));
        }
        Ok(())
    }
}

/// Load outcome: how many rows made it in, how many were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Read-only store over the historical records. Constructed once at
/// startup and passed by reference into whatever needs it.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<EmployeeRecord>,
    summary: LoadSummary,
}

impl DatasetStore {
    /// Loads a dataset file, dispatching on its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DatasetStore, DatasetError> {
        let path = path.as_ref();
        let text = read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Self::from_csv(&text),
            Some("json") => Self::from_json(&text),
            other => Err(DatasetError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Parses a JSON array of records. Elements are deserialized one at a
    /// time so a malformed object skips that row, same as the CSV path;
    /// only a document that is not an array at all is a hard error.
    pub fn from_json(text: &str) -> Result<DatasetStore, DatasetError> {
        let rows: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let candidates = rows
            .into_iter()
            .map(|value| {
                serde_json::from_value::<EmployeeRecord>(value)
                    .map_err(|e| format!("malformed record: {e}"))
            })
            .collect();
        Self::from_candidates(candidates)
    }

    /// Parses comma-separated rows under a header line. Column order is
    /// free and unknown extra columns are ignored; quoted fields may
    /// contain commas.
    pub fn from_csv(text: &str) -> Result<DatasetStore, DatasetError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = match lines.next() {
            Some(h) => h,
            None => return Err(DatasetError::Empty { skipped: 0 }),
        };
        let columns: Vec<String> = split_csv_line(header)
            .into_iter()
            .map(|c| c.trim().to_string())
            .collect();
        let rows = lines.map(|line| parse_csv_row(&columns, line)).collect();
        Self::from_candidates(rows)
    }

    /// Builds a store from already-constructed records, applying the same
    /// validation and duplicate policy as the file loaders.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<DatasetStore, DatasetError> {
        Self::from_candidates(records.into_iter().map(Ok).collect())
    }

    fn from_candidates(
        rows: Vec<Result<EmployeeRecord, String>>,
    ) -> Result<DatasetStore, DatasetError> {
        let mut records: Vec<EmployeeRecord> = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (idx, row) in rows.into_iter().enumerate() {
            let row_no = idx + 1;
            match row {
                Ok(record) => {
                    if let Err(reason) = record.validate() {
                        warn!("skipping dataset row {row_no}: {reason}");
                        skipped += 1;
                    } else if !seen.insert(record.employee_id.clone()) {
                        warn!(
                            "skipping dataset row {row_no}: duplicate employee_id {}",
                            record.employee_id
                        );
                        skipped += 1;
                    } else {
                        records.push(record);
                    }
                }
                Err(reason) => {
                    warn!("skipping dataset row {row_no}: {reason}");
                    skipped += 1;
                }
            }
        }

        if records.is_empty() {
            return Err(DatasetError::Empty { skipped });
        }
        let summary = LoadSummary {
            loaded: records.len(),
            skipped,
        };
        info!(
            "dataset loaded: {} records, {} rows skipped",
            summary.loaded, summary.skipped
        );
        Ok(DatasetStore { records, summary })
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dataset-wide statistics, recomputed on demand (cheap at this scale).
    pub fn stats(&self) -> DatasetStatistics {
        compute_statistics(&self.records)
    }
}

/// Splits one CSV line, honoring double-quoted fields (`""` escapes a
/// quote inside a quoted field).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn parse_csv_row(columns: &[String], line: &str) -> Result<EmployeeRecord, String> {
    let fields = split_csv_line(line);
    let get = |name: &str| -> Result<&str, String> {
        let idx = columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| format!("missing column {name}"))?;
        match fields.get(idx).map(|f| f.trim()) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(format!("empty field {name}")),
        }
    };
    let num = |name: &str| -> Result<f64, String> {
        get(name)?
            .parse::<f64>()
            .map_err(|e| format!("bad number in {name}: {e}"))
    };

    let stress_raw = get("stress_level")?;
    let stress_level = StressLevel::parse(stress_raw)
        .ok_or_else(|| format!("unknown stress_level: {stress_raw}"))?;

    Ok(EmployeeRecord {
        employee_id: get("employee_id")?.to_string(),
        work_hours_per_week: num("work_hours_per_week")?,
        sleep_hours_per_day: num("sleep_hours_per_day")?,
        meetings_per_week: num("meetings_per_week")?,
        emails_per_day: num("emails_per_day")?,
        deadline_pressure: num("deadline_pressure")?,
        task_complexity: num("task_complexity")?,
        team_support: num("team_support")?,
        work_life_balance: num("work_life_balance")?,
        stress_level,
        burnout_score: num("burnout_score")?,
        outcome: get("outcome")?.to_string(),
    })
}
