// 🏗️ Reference Builder - assembles a complete bank payment reference
//
// Layout of a full reference:
//
//   plant year | institution | concept | student id | period or subject
//   | compressed date | compressed amount | spacer | checksum (2)
//
// The checksum covers everything before it. No clock is read here: the due
// date and any defaults derived from it come from the caller.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amount::{compress_amount, Amount};
use crate::checksum::checksum;
use crate::config::CodecConfig;
use crate::date::{compress_date_from, infer_period_token};
use crate::error::{ReferenceError, ReferenceResult};

/// Expected length of a period label such as `FEBJUL25`
pub const PERIOD_TOKEN_LEN: usize = 8;

// ============================================================================
// INPUT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceInput {
    /// Two-digit concept code ("01", "04", "06", ...)
    pub concept_code: String,

    pub due_date: NaiveDate,

    pub amount: Amount,

    /// Matrícula
    pub student_id: String,

    /// Period label; inferred from the due date when absent
    #[serde(default)]
    pub period_token: Option<String>,

    /// Course code, required by advisory concepts
    #[serde(default)]
    pub subject_code: Option<String>,

    /// Year printed at the start of the reference; defaults to the due date's year
    #[serde(default)]
    pub plant_year: Option<i32>,
}

impl ReferenceInput {
    pub fn new(
        concept_code: impl Into<String>,
        student_id: impl Into<String>,
        amount: Amount,
        due_date: NaiveDate,
    ) -> Self {
        ReferenceInput {
            concept_code: concept_code.into(),
            due_date,
            amount,
            student_id: student_id.into(),
            period_token: None,
            subject_code: None,
            plant_year: None,
        }
    }

    pub fn with_period(mut self, period_token: impl Into<String>) -> Self {
        self.period_token = Some(period_token.into());
        self
    }

    pub fn with_subject(mut self, subject_code: impl Into<String>) -> Self {
        self.subject_code = Some(subject_code.into());
        self
    }

    pub fn with_plant_year(mut self, plant_year: i32) -> Self {
        self.plant_year = Some(plant_year);
        self
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// What identifies the charge after the student id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChargeKey {
    /// General concept billed for an academic period
    Period(String),
    /// Advisory concept billed for one subject
    Subject(String),
}

impl ChargeKey {
    pub fn as_str(&self) -> &str {
        match self {
            ChargeKey::Period(s) | ChargeKey::Subject(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReference {
    /// Everything the checksum covers
    pub base: String,
    pub checksum: String,
    /// `base` followed by `checksum`
    pub full: String,
    pub compressed_date: String,
    pub compressed_amount: String,
    pub charge_key: ChargeKey,
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    config: CodecConfig,
}

impl ReferenceBuilder {
    pub fn new(config: CodecConfig) -> Self {
        ReferenceBuilder { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn build(&self, input: &ReferenceInput) -> ReferenceResult<GeneratedReference> {
        let concept = validate_concept(&input.concept_code)?;

        let student_id = input.student_id.trim().to_ascii_uppercase();
        if student_id.is_empty() {
            return Err(ReferenceError::invalid_input(
                "student_id",
                "must not be empty",
            ));
        }

        let plant_year = input.plant_year.unwrap_or_else(|| input.due_date.year());
        if !(1000..=9999).contains(&plant_year) {
            return Err(ReferenceError::invalid_input(
                "plant_year",
                format!("{} is not a four-digit year", plant_year),
            ));
        }

        let charge_key = self.charge_key(concept, input)?;
        let compressed_date = compress_date_from(input.due_date, self.config.base_year)?;
        let compressed_amount = compress_amount(input.amount);

        let base = format!(
            "{}{}{}{}{}{}{}{}",
            plant_year,
            self.config.institution_code,
            concept,
            student_id,
            charge_key.as_str(),
            compressed_date,
            compressed_amount,
            self.config.spacer_digit,
        );
        let digit = checksum(&base);
        let full = format!("{}{}", base, digit);

        tracing::debug!(
            concept,
            compressed_date = %compressed_date,
            compressed_amount = %compressed_amount,
            checksum = %digit,
            "generated reference {}",
            full
        );

        Ok(GeneratedReference {
            base,
            checksum: digit,
            full,
            compressed_date,
            compressed_amount,
            charge_key,
        })
    }

    /// Advisory concepts are keyed by subject; everything else by period.
    fn charge_key(&self, concept: &str, input: &ReferenceInput) -> ReferenceResult<ChargeKey> {
        if self.config.is_advisory(concept) {
            return match non_blank(&input.subject_code) {
                Some(subject) => Ok(ChargeKey::Subject(subject)),
                None => Err(ReferenceError::MissingSubjectCode {
                    concept: concept.to_string(),
                }),
            };
        }

        let missing = || ReferenceError::MissingPeriodToken {
            concept: concept.to_string(),
        };

        match &input.period_token {
            Some(_) => {
                let period = non_blank(&input.period_token).ok_or_else(missing)?;
                if period.len() != PERIOD_TOKEN_LEN {
                    return Err(ReferenceError::invalid_input(
                        "period_token",
                        format!("{:?} must be {} characters", period, PERIOD_TOKEN_LEN),
                    ));
                }
                Ok(ChargeKey::Period(period))
            }
            None if self.config.infer_period => {
                Ok(ChargeKey::Period(infer_period_token(input.due_date)))
            }
            None => Err(missing()),
        }
    }
}

/// Build a reference with the institution's default configuration.
pub fn build_reference(input: &ReferenceInput) -> ReferenceResult<GeneratedReference> {
    ReferenceBuilder::default().build(input)
}

fn validate_concept(raw: &str) -> ReferenceResult<&str> {
    let concept = raw.trim();
    if concept.len() != 2 || !concept.chars().all(|c| c.is_ascii_digit()) {
        return Err(ReferenceError::invalid_input(
            "concept_code",
            format!("{:?} must be exactly 2 digits", raw),
        ));
    }
    Ok(concept)
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
}
