// 📦 Batch Generation - CSV of students → CSV of references
//
// One output row per input row. A row that fails (bad amount, missing
// subject, ...) records its error and the batch keeps going.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::amount::Amount;
use crate::builder::{ReferenceBuilder, ReferenceInput};
use crate::date::parse_due_date;

/// Input row. Empty `period`, `subject` and `plant_year` cells mean "not given".
#[derive(Debug, Clone, Deserialize)]
pub struct BatchInput {
    pub student_id: String,
    pub concept: String,
    pub amount: String,
    pub due_date: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub plant_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// Line in the source CSV (header is line 1)
    pub line: u64,
    pub student_id: String,
    pub concept: String,
    pub reference: Option<String>,
    pub error: Option<String>,
}

impl BatchRow {
    pub fn is_ok(&self) -> bool {
        self.reference.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub generated: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        let generated = rows.iter().filter(|r| r.is_ok()).count();
        BatchSummary {
            total: rows.len(),
            generated,
            failed: rows.len() - generated,
        }
    }
}

impl BatchInput {
    fn to_reference_input(&self) -> Result<ReferenceInput, String> {
        let amount = self.amount.parse::<Amount>().map_err(|e| e.to_string())?;
        let due_date = parse_due_date(&self.due_date).map_err(|e| e.to_string())?;

        let mut input = ReferenceInput::new(&*self.concept, &*self.student_id, amount, due_date);
        input.period_token = self.period.clone();
        input.subject_code = self.subject.clone();
        input.plant_year = self.plant_year;
        Ok(input)
    }
}

/// Generate one reference per CSV row.
///
/// Only an unreadable header or I/O failure aborts; row errors are kept in
/// the returned rows.
pub fn generate_from_csv<R: Read>(reader: R, builder: &ReferenceBuilder) -> Result<Vec<BatchRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record.context("Failed to read CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row = match record.deserialize::<BatchInput>(Some(&headers)) {
            Ok(raw) => {
                let outcome = raw
                    .to_reference_input()
                    .and_then(|input| builder.build(&input).map_err(|e| e.to_string()));
                match outcome {
                    Ok(reference) => BatchRow {
                        line,
                        student_id: raw.student_id,
                        concept: raw.concept,
                        reference: Some(reference.full),
                        error: None,
                    },
                    Err(error) => {
                        tracing::warn!(line, student_id = %raw.student_id, "row skipped: {}", error);
                        BatchRow {
                            line,
                            student_id: raw.student_id,
                            concept: raw.concept,
                            reference: None,
                            error: Some(error),
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!(line, "malformed row: {}", e);
                BatchRow {
                    line,
                    student_id: column(&headers, &record, "student_id"),
                    concept: column(&headers, &record, "concept"),
                    reference: None,
                    error: Some(format!("malformed row: {}", e)),
                }
            }
        };

        rows.push(row);
    }

    Ok(rows)
}

/// Raw cell of a named column, empty when the column or cell is absent.
fn column(headers: &csv::StringRecord, record: &csv::StringRecord, name: &str) -> String {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|i| record.get(i))
        .unwrap_or_default()
        .to_string()
}

pub fn write_csv<W: Write>(writer: W, rows: &[BatchRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).context("Failed to write batch row")?;
    }
    wtr.flush().context("Failed to flush batch output")?;
    Ok(())
}
