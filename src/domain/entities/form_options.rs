use chrono::Month;
use serde::Serialize;

use crate::entities::{
    experience::EmploymentType,
    experience_form::{
        COMPANY, EMPLOYMENT_TYPE, END_MONTH, END_YEAR, IS_CURRENT, JOB_TITLE, START_MONTH,
        START_YEAR,
    },
};

/// One `<option>` of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Inclusive range of years offered by the year selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// The `span` years ending at `last_year`.
    pub fn ending_at(last_year: i32, span: u32) -> Self {
        let span = span.max(1) as i32;
        Self {
            min: last_year - span + 1,
            max: last_year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Years, most recent first.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        (self.min..=self.max).rev()
    }
}

/// January..December as `1`..`12`.
pub fn month_options() -> Vec<SelectOption> {
    (1u8..=12)
        .filter_map(|n| Month::try_from(n).ok().map(|m| (n, m)))
        .map(|(n, m)| SelectOption::new(n.to_string(), m.name()))
        .collect()
}

pub fn year_options(range: &YearRange) -> Vec<SelectOption> {
    range
        .years()
        .map(|year| SelectOption::new(year.to_string(), year.to_string()))
        .collect()
}

/// Leading "Please select" entry maps to no employment type.
pub fn employment_type_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Please select"))
        .chain(
            EmploymentType::ALL
                .iter()
                .map(|kind| SelectOption::new(kind.to_string(), kind.to_string())),
        )
        .collect()
}

// ───── Form Descriptor ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Select,
    Checkbox,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

/// Everything a front-end needs to render the experience form.
#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub year_range: YearRange,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(year_range: YearRange) -> Self {
        let months = month_options();
        let years = year_options(&year_range);

        let select = |name, label, required, options: &Vec<SelectOption>| FieldDescriptor {
            name,
            label,
            kind: InputKind::Select,
            required,
            placeholder: None,
            options: Some(options.clone()),
        };

        let fields = vec![
            FieldDescriptor {
                name: JOB_TITLE,
                label: "Title",
                kind: InputKind::Text,
                required: true,
                placeholder: Some("Ex: Retail Sales Manager"),
                options: None,
            },
            select(EMPLOYMENT_TYPE, "Employment type", false, &employment_type_options()),
            FieldDescriptor {
                name: COMPANY,
                label: "Company or organisation",
                kind: InputKind::Text,
                required: true,
                placeholder: Some("Ex: Microsoft"),
                options: None,
            },
            FieldDescriptor {
                name: IS_CURRENT,
                label: "I am currently working in this role",
                kind: InputKind::Checkbox,
                required: false,
                placeholder: None,
                options: None,
            },
            select(START_MONTH, "Start month", true, &months),
            select(START_YEAR, "Start year", true, &years),
            select(END_MONTH, "End month", true, &months),
            select(END_YEAR, "End year", true, &years),
        ];

        FormDescriptor { year_range, fields }
    }
}
