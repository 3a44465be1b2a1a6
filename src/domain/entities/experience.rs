use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{Month, NaiveDate};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// ───── Employment Type ──────────────────────────────────────────────

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[display("Full-time")]
    #[serde(rename = "Full-time")]
    FullTime,

    #[display("Part-time")]
    #[serde(rename = "Part-time")]
    PartTime,

    #[display("Permanent")]
    Permanent,

    #[display("Self-employed")]
    #[serde(rename = "Self-employed")]
    SelfEmployed,

    #[display("Freelance")]
    Freelance,

    #[display("Contract")]
    Contract,

    #[display("Internship")]
    Internship,

    #[display("Apprenticeship")]
    Apprenticeship,
}

impl EmploymentType {
    /// Every employment type, in the order the select lists them.
    pub const ALL: [EmploymentType; 8] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Permanent,
        EmploymentType::SelfEmployed,
        EmploymentType::Freelance,
        EmploymentType::Contract,
        EmploymentType::Internship,
        EmploymentType::Apprenticeship,
    ];
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("Unknown employment type: {_0}")]
pub struct UnknownEmploymentType(pub String);

impl FromStr for EmploymentType {
    type Err = UnknownEmploymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EmploymentType::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEmploymentType(s.to_string()))
    }
}

// ───── Month / Year ─────────────────────────────────────────────────

/// A calendar month of a given year. Months are one-indexed (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthYear")]
pub struct MonthYear {
    month: u32,
    year: i32,
}

#[derive(Deserialize)]
struct RawMonthYear {
    month: u32,
    year: i32,
}

impl TryFrom<RawMonthYear> for MonthYear {
    type Error = String;

    fn try_from(raw: RawMonthYear) -> Result<Self, Self::Error> {
        MonthYear::new(raw.month, raw.year)
            .ok_or_else(|| format!("invalid month {} for year {}", raw.month, raw.year))
    }
}

impl MonthYear {
    /// Returns `None` when the month is outside 1..=12 or the year cannot be
    /// represented as a calendar date.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the month, used for chronological comparison.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    pub fn is_after(&self, other: &MonthYear) -> bool {
        self.first_day() > other.first_day()
    }
}

impl Ord for MonthYear {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first_day().cmp(&other.first_day())
    }
}

impl PartialOrd for MonthYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

// ───── Job Experience ───────────────────────────────────────────────

/// Fields shared by both experience variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub job_title: String,
    pub employment_type: Option<EmploymentType>,
    pub company: String,
    pub start_date: MonthYear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentJob {
    pub details: JobDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousJob {
    pub details: JobDetails,
    pub end_date: MonthYear,
}

/// A validated job experience. The variant is selected by `is_current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JobExperienceRecord", into = "JobExperienceRecord")]
pub enum JobExperience {
    Current(CurrentJob),
    Previous(PreviousJob),
}

impl JobExperience {
    pub fn details(&self) -> &JobDetails {
        match self {
            JobExperience::Current(job) => &job.details,
            JobExperience::Previous(job) => &job.details,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, JobExperience::Current(_))
    }

    pub fn end_date(&self) -> Option<MonthYear> {
        match self {
            JobExperience::Current(_) => None,
            JobExperience::Previous(job) => Some(job.end_date),
        }
    }
}

/// Wire shape of [`JobExperience`]: flat, discriminated by `is_current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobExperienceRecord {
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    pub company: String,
    pub is_current: bool,
    pub start_date: MonthYear,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MonthYear>,
}

impl From<JobExperience> for JobExperienceRecord {
    fn from(experience: JobExperience) -> Self {
        let (details, is_current, end_date) = match experience {
            JobExperience::Current(job) => (job.details, true, None),
            JobExperience::Previous(job) => (job.details, false, Some(job.end_date)),
        };

        JobExperienceRecord {
            job_title: details.job_title,
            employment_type: details.employment_type,
            company: details.company,
            is_current,
            start_date: details.start_date,
            end_date,
        }
    }
}

impl TryFrom<JobExperienceRecord> for JobExperience {
    type Error = String;

    fn try_from(record: JobExperienceRecord) -> Result<Self, Self::Error> {
        let details = JobDetails {
            job_title: record.job_title,
            employment_type: record.employment_type,
            company: record.company,
            start_date: record.start_date,
        };

        if record.is_current {
            return Ok(JobExperience::Current(CurrentJob { details }));
        }

        match record.end_date {
            Some(end_date) if end_date.is_after(&details.start_date) => {
                Ok(JobExperience::Previous(PreviousJob { details, end_date }))
            }
            Some(_) => Err("end_date must be after start_date".to_string()),
            None => Err("end_date is required when is_current is false".to_string()),
        }
    }
}
