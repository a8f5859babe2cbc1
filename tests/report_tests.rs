use predicates::str::contains;
use std::fs;

mod common;
use common::{add_employee, init_db, init_db_with_data, pclock, punch_at, setup_test_db, temp_out};

#[test]
fn monthly_report_produces_a_pdf() {
    let db = setup_test_db("report_month");
    init_db_with_data(&db);
    let out = temp_out("report_month", "pdf");

    pclock()
        .args([
            "--db", &db, "report", "1", "--month", "2024-01", "--file", &out, "-f",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read generated pdf");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 500);
}

#[test]
fn empty_range_still_produces_a_notice_document() {
    let db = setup_test_db("report_empty");
    init_db(&db);
    add_employee(&db);
    let out = temp_out("report_empty", "pdf");

    pclock()
        .args([
            "--db", &db, "report", "1", "--month", "2023-12", "--file", &out, "-f",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read generated pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn custom_range_spans_multiple_days() {
    let db = setup_test_db("report_range");
    init_db_with_data(&db);

    // a second, short day and a weekend punch pair
    punch_at(&db, "1", "2024-01-16T12:00:00Z");
    punch_at(&db, "1", "2024-01-16T14:00:00Z");
    punch_at(&db, "1", "2024-01-13T12:00:00Z");
    punch_at(&db, "1", "2024-01-13T13:00:00Z");

    let out = temp_out("report_range", "pdf");

    pclock()
        .args([
            "--db", &db, "report", "1", "--from", "2024-01-13", "--to", "2024-01-16", "--file",
            &out, "-f",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read generated pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn report_for_unknown_employee_fails() {
    let db = setup_test_db("report_no_employee");
    init_db(&db);
    let out = temp_out("report_no_employee", "pdf");

    pclock()
        .args(["--db", &db, "report", "9", "--month", "2024-01", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Employee not found: 9"));
}

#[test]
fn month_and_custom_range_are_mutually_exclusive() {
    let db = setup_test_db("report_conflicting_args");
    init_db_with_data(&db);
    let out = temp_out("report_conflicting_args", "pdf");

    pclock()
        .args([
            "--db", &db, "report", "1", "--month", "2024-01", "--from", "2024-01-01", "--to",
            "2024-01-31", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("not both"));
}

#[test]
fn half_open_custom_range_is_rejected() {
    let db = setup_test_db("report_half_range");
    init_db_with_data(&db);
    let out = temp_out("report_half_range", "pdf");

    pclock()
        .args(["--db", &db, "report", "1", "--from", "2024-01-01", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--from and --to must be given together"));
}
