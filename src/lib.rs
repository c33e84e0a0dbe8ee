pub mod api;
pub mod date_ext;
pub mod models;
pub mod schedule;

use api::ApiError;
use chrono::{NaiveDate, TimeZone};
use models::{ScheduleEntry, ScheduleError, TimeEntry, TimeEntryRequest};

// MSE Practicum 2025
pub const WORKSPACE_ID: &str = "68a7cf46e201a71118ccc40f";

// Koppers Project
pub const PROJECT_ID: &str = "68a7d0031fc540325e9abcd6";

pub const CLOCKIFY_API_URL: &str = "https://api.clockify.me/api/v1";

/// Pin every schedule entry to the week starting at the given Monday.
pub fn materialize_week(
    entries: &[ScheduleEntry],
    monday: NaiveDate,
) -> Result<Vec<TimeEntry>, ScheduleError> {
    entries
        .iter()
        .map(|entry| entry.materialize(monday))
        .collect()
}

#[derive(Debug)]
pub enum EntryOutcome {
    Planned,
    Created,
    Failed(ApiError),
}

#[derive(Debug)]
pub struct WeekReport {
    outcomes: Vec<EntryOutcome>,
}

impl WeekReport {
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn planned(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntryOutcome::Planned))
    }

    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntryOutcome::Created))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntryOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| pred(outcome)).count()
    }
}

/// Walk the materialized week in table order. Every entry gets its intent
/// logged; the POST itself only happens in commit mode. A failed entry is
/// logged and the walk moves on, so one rejection cannot starve the rest
/// of the week.
pub fn submit_week<Tz, F>(
    entries: &[TimeEntry],
    tz: &Tz,
    commit: bool,
    mut post: F,
) -> Result<WeekReport, ScheduleError>
where
    Tz: TimeZone,
    F: FnMut(&TimeEntryRequest) -> Result<(), ApiError>,
{
    // Every window is resolved before anything is sent, so a timezone
    // problem aborts the week before the first POST.
    let requests = entries
        .iter()
        .map(|entry| entry.to_request(tz))
        .collect::<Result<Vec<_>, ScheduleError>>()?;

    let mut outcomes = Vec::with_capacity(entries.len());

    for (entry, request) in entries.iter().zip(requests.iter()) {
        log::info!("Planned: {} \"{}\"", entry, entry.description);

        if !commit {
            outcomes.push(EntryOutcome::Planned);
            continue;
        }

        match post(request) {
            Ok(()) => {
                log::info!("Logged: {}", entry);
                outcomes.push(EntryOutcome::Created);
            }
            Err(e) => {
                log::error!("Failed for {}: {}", entry.date(), e);
                outcomes.push(EntryOutcome::Failed(e));
            }
        }
    }

    Ok(WeekReport { outcomes })
}
