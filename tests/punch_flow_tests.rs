use predicates::str::contains;

mod common;
use common::{add_employee, init_db, pclock, punch_at, setup_test_db};

#[test]
fn first_punch_is_recorded_as_entry() {
    let db = setup_test_db("first_punch_entry");
    init_db(&db);
    add_employee(&db);

    pclock()
        .args(["--db", &db, "punch", "1", "--at", "2024-01-15T12:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Entry recorded at 08:00:00 on 15/01/2024"))
        .stdout(contains("next: Exit"));
}

#[test]
fn punches_alternate_entry_exit_entry() {
    let db = setup_test_db("punch_alternation");
    init_db(&db);
    add_employee(&db);

    punch_at(&db, "1", "2024-01-15T12:00:00Z");

    pclock()
        .args(["--db", &db, "punch", "1", "--at", "2024-01-15T16:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Exit recorded"));

    pclock()
        .args(["--db", &db, "punch", "1", "--at", "2024-01-15T17:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Entry recorded"));

    // after entry, exit, entry the next expected punch is an exit
    pclock()
        .args(["--db", &db, "status", "1"])
        .assert()
        .success()
        .stdout(contains("Next punch: Exit"))
        .stdout(contains("Last punch: Entry at 15/01/2024 13:00"));
}

#[test]
fn status_with_no_punches_expects_entry() {
    let db = setup_test_db("status_empty");
    init_db(&db);
    add_employee(&db);

    pclock()
        .args(["--db", &db, "status", "1"])
        .assert()
        .success()
        .stdout(contains("Next punch: Entry"))
        .stdout(contains("Last punch: none"));
}

#[test]
fn unknown_employee_is_a_clean_error() {
    let db = setup_test_db("unknown_employee");
    init_db(&db);

    pclock()
        .args(["--db", &db, "punch", "42"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: 42"));

    pclock()
        .args(["--db", &db, "status", "42"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: 42"));
}

#[test]
fn unreadable_client_timestamp_falls_back_to_server_clock() {
    let db = setup_test_db("timestamp_fallback");
    init_db(&db);
    add_employee(&db);

    pclock()
        .args(["--db", &db, "punch", "1", "--at", "yesterday-noon"])
        .assert()
        .success()
        .stdout(contains("falling back to the server clock"))
        .stdout(contains("Timestamp source: server-fallback"));
}

#[test]
fn server_timestamp_is_used_when_none_is_given() {
    let db = setup_test_db("server_timestamp");
    init_db(&db);
    add_employee(&db);

    pclock()
        .args(["--db", &db, "punch", "1"])
        .assert()
        .success()
        .stdout(contains("Entry recorded"))
        .stdout(contains("Timestamp source: server"));
}

#[test]
fn note_can_be_set_and_cleared() {
    let db = setup_test_db("note_edit");
    init_db(&db);
    add_employee(&db);
    punch_at(&db, "1", "2024-01-15T12:00:00Z");

    pclock()
        .args(["--db", &db, "note", "1", "--text", "forgot badge, confirmed by reception"])
        .assert()
        .success()
        .stdout(contains("Note updated for punch 1."));

    pclock()
        .args(["--db", &db, "history", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("forgot badge"));

    pclock()
        .args(["--db", &db, "note", "1", "--clear"])
        .assert()
        .success()
        .stdout(contains("Note cleared for punch 1."));
}

#[test]
fn note_on_missing_punch_fails() {
    let db = setup_test_db("note_missing");
    init_db(&db);

    pclock()
        .args(["--db", &db, "note", "99", "--text", "whatever"])
        .assert()
        .failure()
        .stderr(contains("Punch record not found: 99"));
}
