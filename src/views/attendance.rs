//! Attendance page view models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    AttendanceAction, AttendanceDay, attendance_percentage, classify_status, format_date,
    format_minutes_or, format_working_duration_or,
};
use crate::config::DisplayConfig;
use crate::models::{AttendanceRecord, AttendanceStatus, Tone};

/// The card for today's attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayCard {
    /// Today, as `dd/mm/yyyy`.
    pub date: String,
    /// Today's check-in, if any.
    pub check_in: Option<DateTime<Utc>>,
    /// Today's check-out, if any.
    pub check_out: Option<DateTime<Utc>>,
    /// Worked time so far, once checked out.
    pub working_hours: String,
    /// Today's status.
    pub status: AttendanceStatus,
    /// Label for the status badge.
    pub status_label: String,
    /// Tone for the status badge.
    pub tone: Tone,
    /// The action the toggle performs next; `None` once checked out.
    pub next_action: Option<AttendanceAction>,
}

/// One row of the attendance history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The record's day, as `dd/mm/yyyy`.
    pub date: String,
    /// Check-in instant.
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out instant.
    pub check_out: Option<DateTime<Utc>>,
    /// Stored working minutes, as `"<H>h <M>m"`.
    pub working_hours: String,
    /// Derived status.
    pub status: AttendanceStatus,
    /// Label for the status badge.
    pub status_label: String,
    /// Tone for the status badge.
    pub tone: Tone,
}

/// Everything the attendance page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceView {
    /// Today's card.
    pub today: TodayCard,
    /// History rows, in the order the backend listed them.
    pub history: Vec<AttendanceRow>,
    /// Share of complete days, 0-100.
    pub attendance_percentage: u8,
}

/// Builds the attendance page from a history and the current day.
pub fn attendance_view(
    records: &[AttendanceRecord],
    today: NaiveDate,
    config: &DisplayConfig,
) -> AttendanceView {
    AttendanceView {
        today: today_card(records, today, config),
        history: records.iter().map(|r| attendance_row(r, config)).collect(),
        attendance_percentage: attendance_percentage(records),
    }
}

/// Builds today's card from the history.
pub fn today_card(records: &[AttendanceRecord], today: NaiveDate, config: &DisplayConfig) -> TodayCard {
    let state = AttendanceDay::for_date(records, today);
    let (check_in, check_out) = match state {
        AttendanceDay::NoRecord => (None, None),
        AttendanceDay::CheckedIn { check_in } => (Some(check_in), None),
        AttendanceDay::CheckedOut {
            check_in,
            check_out,
        } => (Some(check_in), Some(check_out)),
    };
    let next_action = match state {
        AttendanceDay::NoRecord => Some(AttendanceAction::CheckIn),
        AttendanceDay::CheckedIn { .. } => Some(AttendanceAction::CheckOut),
        AttendanceDay::CheckedOut { .. } => None,
    };
    let status = state.status();

    TodayCard {
        date: format_date(today),
        check_in,
        check_out,
        working_hours: format_working_duration_or(check_in, check_out, &config.placeholders.duration),
        status,
        status_label: status.label().to_string(),
        tone: status.tone(),
        next_action,
    }
}

/// Builds one history row.
pub fn attendance_row(record: &AttendanceRecord, config: &DisplayConfig) -> AttendanceRow {
    let status = classify_status(record);

    AttendanceRow {
        date: format_date(record.date),
        check_in: record.check_in,
        check_out: record.check_out,
        working_hours: format_minutes_or(record.working_minutes, &config.placeholders.duration),
        status,
        status_label: status.label().to_string(),
        tone: status.tone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap()
    }

    fn history() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord {
                check_in: Some(at(5, 9, 0)),
                ..AttendanceRecord::new(day(5))
            },
            AttendanceRecord {
                check_in: Some(at(4, 9, 0)),
                check_out: Some(at(4, 17, 30)),
                working_minutes: 510,
                ..AttendanceRecord::new(day(4))
            },
            AttendanceRecord::new(day(3)),
        ]
    }

    #[test]
    fn test_today_checked_in() {
        let view = attendance_view(&history(), day(5), &DisplayConfig::default());

        assert_eq!(view.today.date, "05/03/2024");
        assert_eq!(view.today.status, AttendanceStatus::Working);
        assert_eq!(view.today.tone, Tone::Info);
        assert_eq!(view.today.working_hours, "—");
        assert_eq!(view.today.next_action, Some(AttendanceAction::CheckOut));
    }

    #[test]
    fn test_today_without_record() {
        let card = today_card(&history(), day(6), &DisplayConfig::default());

        assert_eq!(card.status, AttendanceStatus::Absent);
        assert_eq!(card.status_label, "Absent");
        assert_eq!(card.next_action, Some(AttendanceAction::CheckIn));
        assert!(card.check_in.is_none());
    }

    #[test]
    fn test_today_checked_out_has_no_next_action() {
        let card = today_card(&history(), day(4), &DisplayConfig::default());

        assert_eq!(card.status, AttendanceStatus::Completed);
        assert_eq!(card.working_hours, "8h 30m");
        assert_eq!(card.next_action, None);
    }

    #[test]
    fn test_history_rows() {
        let view = attendance_view(&history(), day(5), &DisplayConfig::default());

        let statuses: Vec<AttendanceStatus> = view.history.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                AttendanceStatus::Working,
                AttendanceStatus::Completed,
                AttendanceStatus::Absent
            ]
        );
        assert_eq!(view.history[1].working_hours, "8h 30m");
        assert_eq!(view.history[2].working_hours, "—");
        assert_eq!(view.history[2].date, "03/03/2024");
    }

    #[test]
    fn test_percentage_included() {
        let view = attendance_view(&history(), day(5), &DisplayConfig::default());
        assert_eq!(view.attendance_percentage, 33);
    }

    #[test]
    fn test_configured_placeholder_is_used() {
        let mut config = DisplayConfig::default();
        config.placeholders.duration = "n/a".to_string();

        let view = attendance_view(&history(), day(5), &config);
        assert_eq!(view.today.working_hours, "n/a");
        assert_eq!(view.history[2].working_hours, "n/a");
    }

    #[test]
    fn test_checked_out_card_matches_row_formatting() {
        let mut config = DisplayConfig::default();
        config.placeholders.duration = "n/a".to_string();

        let card = today_card(&history(), day(4), &config);
        let row = attendance_row(&history()[1], &config);
        assert_eq!(card.working_hours, "8h 30m");
        assert_eq!(row.working_hours, "8h 30m");
    }
}
