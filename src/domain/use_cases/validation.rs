use std::str::FromStr;

use chrono::Month;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::{
    entities::{
        experience::{CurrentJob, EmploymentType, JobDetails, JobExperience, MonthYear, PreviousJob},
        experience_form::{
            ExperienceFormInput, EMPLOYMENT_TYPE, END_DATE, END_MONTH, END_YEAR, START_MONTH,
            START_YEAR,
        },
        form_options::YearRange,
    },
    errors::ValidationFailure,
};

/// Turns raw form input into a [`JobExperience`], collecting every
/// field-scoped violation instead of stopping at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceSchema {
    years: YearRange,
}

struct DateFields {
    month: &'static str,
    year: &'static str,
    month_label: &'static str,
    year_label: &'static str,
}

const START_FIELDS: DateFields = DateFields {
    month: START_MONTH,
    year: START_YEAR,
    month_label: "Start month",
    year_label: "Start year",
};

const END_FIELDS: DateFields = DateFields {
    month: END_MONTH,
    year: END_YEAR,
    month_label: "End month",
    year_label: "End year",
};

impl ExperienceSchema {
    pub fn new(years: YearRange) -> Self {
        Self { years }
    }

    pub fn year_range(&self) -> YearRange {
        self.years
    }

    pub fn validate(&self, input: &ExperienceFormInput) -> Result<JobExperience, ValidationErrors> {
        let input = input.normalized();

        let mut errors = match input.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let employment_type = parse_employment_type(&input.employment_type, &mut errors);
        let start_date = self.parse_date(&input.start_month, &input.start_year, &START_FIELDS, &mut errors);

        // The discriminant decides whether end_date exists at all.
        let end_date = if input.is_current {
            None
        } else {
            let end_date = self.parse_date(&input.end_month, &input.end_year, &END_FIELDS, &mut errors);
            if let (Some(start), Some(end)) = (start_date, end_date) {
                if !end.is_after(&start) {
                    errors.add(END_DATE, ValidationFailure::InvalidDateOrdering.into());
                }
            }
            end_date
        };

        if !errors.errors().is_empty() {
            let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
            debug!(?fields, "experience input rejected");
            return Err(errors);
        }

        let Some(start_date) = start_date else {
            return Err(errors);
        };

        let details = JobDetails {
            job_title: input.job_title,
            employment_type: employment_type.flatten(),
            company: input.company,
            start_date,
        };

        if input.is_current {
            return Ok(JobExperience::Current(CurrentJob { details }));
        }

        match end_date {
            Some(end_date) => Ok(JobExperience::Previous(PreviousJob { details, end_date })),
            None => Err(errors),
        }
    }

    fn parse_date(
        &self,
        month: &str,
        year: &str,
        fields: &DateFields,
        errors: &mut ValidationErrors,
    ) -> Option<MonthYear> {
        let month = match parse_month(month) {
            Ok(month) => Some(month),
            Err(failure) => {
                let failure = match failure {
                    ValidationFailure::MissingRequiredField(_) => {
                        ValidationFailure::MissingRequiredField(fields.month_label)
                    }
                    other => other,
                };
                errors.add(fields.month, failure.into());
                None
            }
        };

        let year = match self.parse_year(year) {
            Ok(year) => Some(year),
            Err(failure) => {
                let failure = match failure {
                    ValidationFailure::MissingRequiredField(_) => {
                        ValidationFailure::MissingRequiredField(fields.year_label)
                    }
                    other => other,
                };
                errors.add(fields.year, failure.into());
                None
            }
        };

        MonthYear::new(month?, year?)
    }

    fn parse_year(&self, raw: &str) -> Result<i32, ValidationFailure> {
        if raw.is_empty() {
            return Err(ValidationFailure::MissingRequiredField("Year"));
        }

        let out_of_range = ValidationFailure::YearOutOfRange {
            min: self.years.min,
            max: self.years.max,
        };

        if raw.len() != 4 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(out_of_range);
        }

        match raw.parse::<i32>() {
            Ok(year) if self.years.contains(year) => Ok(year),
            _ => Err(out_of_range),
        }
    }
}

/// Accepts `1`..`12` as well as month names (`March`, `mar`).
pub fn parse_month(raw: &str) -> Result<u32, ValidationFailure> {
    if raw.is_empty() {
        return Err(ValidationFailure::MissingRequiredField("Month"));
    }

    if let Ok(number) = raw.parse::<u32>() {
        return if (1..=12).contains(&number) {
            Ok(number)
        } else {
            Err(ValidationFailure::InvalidMonth)
        };
    }

    Month::from_str(raw)
        .map(|month| month.number_from_month())
        .map_err(|_| ValidationFailure::InvalidMonth)
}

/// `Some(None)` for an unselected type, `None` when the value is invalid.
fn parse_employment_type(
    raw: &str,
    errors: &mut ValidationErrors,
) -> Option<Option<EmploymentType>> {
    if raw.is_empty() {
        return Some(None);
    }

    match EmploymentType::from_str(raw) {
        Ok(kind) => Some(Some(kind)),
        Err(_) => {
            errors.add(EMPLOYMENT_TYPE, ValidationFailure::InvalidEmploymentType.into());
            None
        }
    }
}
