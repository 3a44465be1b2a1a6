use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::experience::{JobExperience, JobExperienceRecord};

pub const MAX_TEXT_LENGTH: usize = 100;

// ───── Field Names ──────────────────────────────────────────────────

pub const JOB_TITLE: &str = "job_title";
pub const EMPLOYMENT_TYPE: &str = "employment_type";
pub const COMPANY: &str = "company";
pub const IS_CURRENT: &str = "is_current";
pub const START_MONTH: &str = "start_date.month";
pub const START_YEAR: &str = "start_date.year";
pub const END_MONTH: &str = "end_date.month";
pub const END_YEAR: &str = "end_date.year";
pub const END_DATE: &str = "end_date";

/// Editable text and select inputs. The `is_current` checkbox is toggled
/// separately because it carries a side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    JobTitle,
    EmploymentType,
    Company,
    StartMonth,
    StartYear,
    EndMonth,
    EndYear,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::JobTitle => JOB_TITLE,
            FormField::EmploymentType => EMPLOYMENT_TYPE,
            FormField::Company => COMPANY,
            FormField::StartMonth => START_MONTH,
            FormField::StartYear => START_YEAR,
            FormField::EndMonth => END_MONTH,
            FormField::EndYear => END_YEAR,
        }
    }

    pub fn is_end_date(&self) -> bool {
        matches!(self, FormField::EndMonth | FormField::EndYear)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ───── Raw Input ────────────────────────────────────────────────────

/// Field values exactly as the rendered form submits them.
///
/// Accepted both as JSON and as `application/x-www-form-urlencoded`, so the
/// date parts use the dotted input names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ExperienceFormInput {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Title is required"),
        custom(function = "validate_title_length")
    )]
    pub job_title: String,

    #[serde(default)]
    pub employment_type: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Company or organisation is required"),
        custom(function = "validate_company_length")
    )]
    pub company: String,

    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub is_current: bool,

    #[serde(default, rename = "start_date.month", deserialize_with = "deserialize_date_part")]
    pub start_month: String,

    #[serde(default, rename = "start_date.year", deserialize_with = "deserialize_date_part")]
    pub start_year: String,

    #[serde(default, rename = "end_date.month", deserialize_with = "deserialize_date_part")]
    pub end_month: String,

    #[serde(default, rename = "end_date.year", deserialize_with = "deserialize_date_part")]
    pub end_year: String,
}

impl ExperienceFormInput {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::JobTitle => &self.job_title,
            FormField::EmploymentType => &self.employment_type,
            FormField::Company => &self.company,
            FormField::StartMonth => &self.start_month,
            FormField::StartYear => &self.start_year,
            FormField::EndMonth => &self.end_month,
            FormField::EndYear => &self.end_year,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::JobTitle => &mut self.job_title,
            FormField::EmploymentType => &mut self.employment_type,
            FormField::Company => &mut self.company,
            FormField::StartMonth => &mut self.start_month,
            FormField::StartYear => &mut self.start_year,
            FormField::EndMonth => &mut self.end_month,
            FormField::EndYear => &mut self.end_year,
        }
    }

    pub fn clear_end_date(&mut self) {
        self.end_month.clear();
        self.end_year.clear();
    }

    /// Copy with every value trimmed; validation always runs on this.
    pub fn normalized(&self) -> Self {
        Self {
            job_title: self.job_title.trim().to_string(),
            employment_type: self.employment_type.trim().to_string(),
            company: self.company.trim().to_string(),
            is_current: self.is_current,
            start_month: self.start_month.trim().to_string(),
            start_year: self.start_year.trim().to_string(),
            end_month: self.end_month.trim().to_string(),
            end_year: self.end_year.trim().to_string(),
        }
    }
}

impl From<&JobExperience> for ExperienceFormInput {
    fn from(experience: &JobExperience) -> Self {
        let record = JobExperienceRecord::from(experience.clone());

        ExperienceFormInput {
            job_title: record.job_title,
            employment_type: record
                .employment_type
                .map(|kind| kind.to_string())
                .unwrap_or_default(),
            company: record.company,
            is_current: record.is_current,
            start_month: record.start_date.month().to_string(),
            start_year: record.start_date.year().to_string(),
            end_month: record
                .end_date
                .map(|d| d.month().to_string())
                .unwrap_or_default(),
            end_year: record
                .end_date
                .map(|d| d.year().to_string())
                .unwrap_or_default(),
        }
    }
}

fn validate_title_length(value: &str) -> Result<(), ValidationError> {
    validate_text_length(value, "Title")
}

fn validate_company_length(value: &str) -> Result<(), ValidationError> {
    validate_text_length(value, "Company or organisation")
}

fn validate_text_length(value: &str, label: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        let mut err = ValidationError::new("too_long");
        err.message = Some(format!("{label} must be at most {MAX_TEXT_LENGTH} characters").into());
        return Err(err);
    }
    Ok(())
}

/// Select values arrive as strings from HTML forms; JSON clients may send
/// plain numbers for month and year.
fn deserialize_date_part<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DatePart {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<DatePart>::deserialize(deserializer)? {
        Some(DatePart::Number(n)) => n.to_string(),
        Some(DatePart::Text(text)) => text,
        None => String::new(),
    })
}

/// HTML checkboxes submit `on` when ticked and nothing otherwise; JSON
/// clients send a boolean.
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Flag(bool),
        Text(String),
    }

    match Checkbox::deserialize(deserializer)? {
        Checkbox::Flag(flag) => Ok(flag),
        Checkbox::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" | "yes" => Ok(true),
            "" | "off" | "false" | "0" | "no" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid checkbox value: {other}"
            ))),
        },
    }
}

// ───── Field Errors ─────────────────────────────────────────────────

/// One message per offending field, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Keeps the first message reported for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut form_errors = FormErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                form_errors.insert(field.to_string(), message);
            }
        }
        form_errors
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{messages}")
    }
}
