// The weekly plan that gets logged against the practicum project.
//
// The built-in table is the usual week: core hours every weekday plus the
// two Wednesday meetings. A JSON file passed on the command line replaces
// it wholesale, so one-off weeks do not need a recompile.

use crate::models::{ScheduleEntry, ScheduleError};
use std::fs;
use std::path::Path;

pub fn builtin() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::new(0, "10:00", "14:00", "Core hours"),
        ScheduleEntry::new(1, "10:00", "14:00", "Core hours"),
        ScheduleEntry::new(2, "10:00", "14:00", "Core hours"),
        ScheduleEntry::new(2, "14:00", "16:00", "Client meeting"),
        ScheduleEntry::new(2, "18:00", "20:00", "Mentor meeting"),
        ScheduleEntry::new(3, "10:00", "14:00", "Core hours"),
        ScheduleEntry::new(4, "10:00", "14:00", "Core hours"),
    ]
}

/// Read a replacement plan from a JSON file.
pub fn load_file(path: &Path) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ScheduleError::ReadFile(path.display().to_string(), e.to_string()))?;
    let entries = serde_json::from_str(&raw)
        .map_err(|e| ScheduleError::ParseFile(path.display().to_string(), e.to_string()))?;

    Ok(entries)
}

/// Check every entry before any of them is submitted.
pub fn validate(entries: &[ScheduleEntry]) -> Result<(), ScheduleError> {
    for entry in entries {
        entry.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// The built-in table validates and covers all five weekdays.
    #[test]
    fn builtin_table_is_valid() {
        let entries = builtin();
        validate(&entries).unwrap();

        for day_offset in 0u8..5 {
            assert!(entries.iter().any(|entry| entry.day_offset == day_offset));
        }
    }

    /// The file format is a JSON array with camelCase keys and HH:MM times.
    #[test]
    fn schedule_json_parses_to_entries() {
        let raw = r#"[
            {"dayOffset": 2, "startTime": "14:00", "endTime": "16:00", "description": "Client meeting"}
        ]"#;

        let entries: Vec<ScheduleEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            entries,
            vec![ScheduleEntry::new(2, "14:00", "16:00", "Client meeting")]
        );
    }

    /// A schedule file on disk replaces the built-in table.
    #[test]
    fn schedule_file_loads_from_disk() {
        let path = env::temp_dir().join("stundenzettel-schedule-load-test.json");
        fs::write(
            &path,
            r#"[{"dayOffset": 0, "startTime": "09:00", "endTime": "11:30", "description": "Standup week"}]"#,
        )
        .unwrap();

        let entries = load_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            entries,
            vec![ScheduleEntry::new(0, "09:00", "11:30", "Standup week")]
        );
    }

    /// A missing schedule file is reported with its path.
    #[test]
    fn missing_schedule_file_is_an_error() {
        let path = env::temp_dir().join("stundenzettel-schedule-missing-test.json");
        match load_file(&path) {
            Err(ScheduleError::ReadFile(reported, _)) => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    /// A file that is not a schedule array is reported as unparseable.
    #[test]
    fn malformed_schedule_file_is_an_error() {
        let path = env::temp_dir().join("stundenzettel-schedule-malformed-test.json");
        fs::write(&path, r#"{"not": "a schedule"}"#).unwrap();

        let result = load_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ScheduleError::ParseFile(_, _))));
    }

    /// Validation rejects a table containing one bad entry.
    #[test]
    fn validation_names_the_offending_entry() {
        let mut entries = builtin();
        entries.push(ScheduleEntry::new(6, "10:00", "14:00", "Sunday shift"));

        assert_eq!(
            validate(&entries),
            Err(ScheduleError::DayOffsetOutOfRange(
                String::from("Sunday shift"),
                6
            ))
        );
    }

    /// An empty replacement plan passes validation; the week is a no-op.
    #[test]
    fn empty_table_validates() {
        assert_eq!(validate(&[]), Ok(()));
    }
}
