use chrono::{DateTime, NaiveDate, Utc};
use punchclock::config::Config;
use punchclock::core::report::{REPORT_HEADERS, ReportBody, build_report};
use punchclock::models::employee::Employee;
use punchclock::models::punch::Punch;
use punchclock::models::punch_kind::PunchKind;

fn test_config() -> Config {
    Config {
        database: String::new(),
        business_offset: "-04:00".to_string(),
        standard_shift: "7h30".to_string(),
    }
}

fn test_employee() -> Employee {
    Employee {
        id: 1,
        username: "jdoe".to_string(),
        full_name: "John Doe".to_string(),
        national_id: None,
        phone: None,
        role: None,
        hire_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
    }
}

fn punch(kind: PunchKind, ts: &str) -> Punch {
    let instant: DateTime<Utc> = ts.parse().expect("test timestamp");
    Punch::new(1, instant, kind, "server")
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn rows_carry_local_times_totals_and_remarks() {
    // 08:00 to 16:30 on the UTC-4 wall clock, one hour above the baseline
    let punches = vec![
        punch(PunchKind::Entry, "2024-01-15T12:00:00Z"),
        punch(PunchKind::Exit, "2024-01-15T20:30:00Z"),
    ];

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    let rows = match &doc.body {
        ReportBody::Table(rows) => rows,
        ReportBody::Notice(_) => panic!("expected a table"),
    };

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), REPORT_HEADERS.len());
    assert_eq!(row[0], "15/01/2024");
    assert_eq!(row[1], "Monday");
    assert_eq!(row[2], "08:00"); // In 1
    assert_eq!(row[3], "16:30"); // Out 1
    assert_eq!(row[4], "-"); // In 2 unused
    assert_eq!(row[10], "8:30"); // Total
    assert_eq!(row[11], "+1:00"); // Balance
    assert_eq!(row[12], "Overtime");
}

#[test]
fn days_are_sorted_ascending_and_empty_days_get_no_row() {
    let punches = vec![
        punch(PunchKind::Entry, "2024-01-17T12:00:00Z"),
        punch(PunchKind::Exit, "2024-01-17T19:30:00Z"),
        punch(PunchKind::Entry, "2024-01-15T12:00:00Z"),
        punch(PunchKind::Exit, "2024-01-15T19:30:00Z"),
    ];

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    let rows = match &doc.body {
        ReportBody::Table(rows) => rows,
        ReportBody::Notice(_) => panic!("expected a table"),
    };

    // the untouched 16th appears nowhere
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "15/01/2024");
    assert_eq!(rows[1][0], "17/01/2024");
}

#[test]
fn weekend_day_is_marked_compensated() {
    let punches = vec![
        punch(PunchKind::Entry, "2024-01-13T12:00:00Z"),
        punch(PunchKind::Exit, "2024-01-13T13:00:00Z"),
    ];

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    let rows = match &doc.body {
        ReportBody::Table(rows) => rows,
        ReportBody::Notice(_) => panic!("expected a table"),
    };

    assert_eq!(rows[0][1], "Saturday");
    assert_eq!(rows[0][12], "Compensated");
}

#[test]
fn punches_beyond_the_fourth_pair_lose_their_column_only() {
    // five entry/exit pairs of 30 minutes each
    let mut punches = Vec::new();
    for hour in 10..15 {
        punches.push(punch(PunchKind::Entry, &format!("2024-01-15T{hour:02}:00:00Z")));
        punches.push(punch(PunchKind::Exit, &format!("2024-01-15T{hour:02}:30:00Z")));
    }

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    let rows = match &doc.body {
        ReportBody::Table(rows) => rows,
        ReportBody::Notice(_) => panic!("expected a table"),
    };

    let row = &rows[0];
    // four pairs rendered, fifth silently without a column
    assert_eq!(row[2], "06:00");
    assert_eq!(row[9], "09:30");
    // but the total still counts all five intervals
    assert_eq!(row[10], "2:30");
}

#[test]
fn orphan_punch_shows_in_its_column_but_adds_no_time() {
    let punches = vec![
        punch(PunchKind::Entry, "2024-01-15T12:00:00Z"),
        punch(PunchKind::Entry, "2024-01-15T12:05:00Z"),
        punch(PunchKind::Exit, "2024-01-15T20:00:00Z"),
    ];

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    let rows = match &doc.body {
        ReportBody::Table(rows) => rows,
        ReportBody::Notice(_) => panic!("expected a table"),
    };

    let row = &rows[0];
    assert_eq!(row[2], "08:00"); // the dropped entry still occupies In 1
    assert_eq!(row[4], "08:05"); // In 2
    assert_eq!(row[3], "16:00"); // Out 1
    assert_eq!(row[10], "7:55"); // only 08:05 to 16:00 counts
}

#[test]
fn empty_range_yields_a_notice_not_a_table() {
    let doc = build_report(&test_employee(), &[], jan(1), jan(31), &test_config());

    match &doc.body {
        ReportBody::Notice(msg) => {
            assert!(msg.contains("No punch records found"));
        }
        ReportBody::Table(_) => panic!("expected a notice"),
    }
    assert!(doc.footer.is_empty());
}

#[test]
fn footer_counts_punches_and_days() {
    let punches = vec![
        punch(PunchKind::Entry, "2024-01-15T12:00:00Z"),
        punch(PunchKind::Exit, "2024-01-15T19:30:00Z"),
        punch(PunchKind::Entry, "2024-01-16T12:00:00Z"),
    ];

    let doc = build_report(&test_employee(), &punches, jan(1), jan(31), &test_config());

    assert!(doc.footer.iter().any(|l| l == "Total punches: 3"));
    assert!(doc.footer.iter().any(|l| l == "Days with punches: 2"));
    assert!(doc.footer.iter().any(|l| l == "Standard shift: 7:30 daily"));
}
