use crate::{PROJECT_ID, WORKSPACE_ID};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::{error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    EmptyDescription,
    ParseClockTime(String),
    StartNotBeforeEnd(String, String, String),
    DayOffsetOutOfRange(String, u8),
    UnresolvableLocalTime(NaiveDateTime),
    ReadFile(String, String),
    ParseFile(String, String),
}

impl error::Error for ScheduleError {}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            ScheduleError::EmptyDescription => String::from("description must not be empty"),
            ScheduleError::ParseClockTime(raw) => {
                format!("clock time must be given as HH:MM: \"{}\"", raw)
            }
            ScheduleError::StartNotBeforeEnd(description, start, end) => {
                format!(
                    "\"{}\" must end after it starts: {} to {}",
                    description, start, end
                )
            }
            ScheduleError::DayOffsetOutOfRange(description, day_offset) => {
                format!(
                    "\"{}\" has day offset {}, expected 0 (Monday) to 4 (Friday)",
                    description, day_offset
                )
            }
            ScheduleError::UnresolvableLocalTime(time) => {
                format!(
                    "local time {} does not map to exactly one instant in this timezone",
                    time
                )
            }
            ScheduleError::ReadFile(path, cause) => {
                format!("could not read schedule file {}: {}", path, cause)
            }
            ScheduleError::ParseFile(path, cause) => {
                format!("could not parse schedule file {}: {}", path, cause)
            }
        };
        f.write_str(&description)
    }
}

/// One line of the weekly plan, not yet pinned to a calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_offset: u8,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl ScheduleEntry {
    pub fn new(day_offset: u8, start_time: &str, end_time: &str, description: &str) -> Self {
        Self {
            day_offset,
            start_time: start_time.to_owned(),
            end_time: end_time.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Parse the HH:MM clock strings, checking that the entry ends after it starts.
    pub fn clock_times(&self) -> Result<(NaiveTime, NaiveTime), ScheduleError> {
        let start = parse_clock_time(&self.start_time)?;
        let end = parse_clock_time(&self.end_time)?;

        if start >= end {
            return Err(ScheduleError::StartNotBeforeEnd(
                self.description.clone(),
                self.start_time.clone(),
                self.end_time.clone(),
            ));
        }
        Ok((start, end))
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.description.is_empty() {
            return Err(ScheduleError::EmptyDescription);
        }
        if self.day_offset > 4 {
            return Err(ScheduleError::DayOffsetOutOfRange(
                self.description.clone(),
                self.day_offset,
            ));
        }
        let _ = self.clock_times()?;

        Ok(())
    }

    /// Pin this entry to the week starting at the given Monday.
    pub fn materialize(&self, monday: NaiveDate) -> Result<TimeEntry, ScheduleError> {
        let (start, end) = self.clock_times()?;
        let date = monday + Duration::days(self.day_offset as i64);

        Ok(TimeEntry {
            start: date.and_time(start),
            end: date.and_time(end),
            description: self.description.clone(),
        })
    }
}

fn parse_clock_time(raw: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ScheduleError::ParseClockTime(raw.to_owned()))
}

/// A concrete window on the calendar, still in local wall-clock terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub description: String,
}

impl TimeEntry {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Resolve the wall-clock window in the given timezone and convert it to
    /// UTC instants, attaching the fixed workspace and project.
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> Result<TimeEntryRequest, ScheduleError> {
        let start = resolve_utc(&self.start, tz)?;
        let end = resolve_utc(&self.end, tz)?;

        Ok(TimeEntryRequest {
            start,
            end,
            description: self.description.clone(),
            project_id: PROJECT_ID.to_owned(),
            workspace_id: WORKSPACE_ID.to_owned(),
        })
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = format!(
            "{} {}-{}",
            self.date(),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        );

        fmt::Display::fmt(&str, f)
    }
}

fn resolve_utc<Tz: TimeZone>(
    time: &NaiveDateTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, ScheduleError> {
    tz.from_local_datetime(time)
        .single()
        .map(|resolved| resolved.with_timezone(&Utc))
        .ok_or(ScheduleError::UnresolvableLocalTime(*time))
}

/// Request body for the time entry endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub project_id: String,
    pub workspace_id: String,
}
