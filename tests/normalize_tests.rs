use chrono::{NaiveDate, Utc};
use punchclock::core::normalize::{normalize_recorded, parse_instant, to_business, utc_window};
use punchclock::utils::time::{format_minutes, format_signed_minutes, parse_offset, parse_shift_minutes};

fn business_offset() -> chrono::FixedOffset {
    parse_offset("-04:00").unwrap()
}

#[test]
fn utc_noon_renders_as_eight_local() {
    let instant = parse_instant("2024-01-15T12:00:00Z").unwrap();
    let local = to_business(instant, business_offset());

    assert_eq!(local.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 08:00:00");
}

#[test]
fn naive_timestamps_are_read_as_utc() {
    let with_t = parse_instant("2024-01-15T12:00:00").unwrap();
    let with_space = parse_instant("2024-01-15 12:00:00").unwrap();
    let explicit = parse_instant("2024-01-15T12:00:00Z").unwrap();

    assert_eq!(with_t, explicit);
    assert_eq!(with_space, explicit);
}

#[test]
fn offset_aware_input_is_converted_not_reinterpreted() {
    // 14:00 at +02:00 is the same instant as 12:00 UTC
    let instant = parse_instant("2024-01-15T14:00:00+02:00").unwrap();

    assert_eq!(instant, parse_instant("2024-01-15T12:00:00Z").unwrap());
}

#[test]
fn malformed_timestamp_falls_back_to_the_original_text() {
    assert_eq!(normalize_recorded("not-a-timestamp", business_offset()), "not-a-timestamp");
}

#[test]
fn well_formed_timestamp_is_rendered_on_the_business_clock() {
    assert_eq!(
        normalize_recorded("2024-01-15T12:00:00Z", business_offset()),
        "15/01/2024 08:00:00"
    );
}

#[test]
fn day_window_covers_the_local_day_in_utc() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let (lo, hi) = utc_window(date, date, business_offset());

    // local midnight at UTC-4 is 04:00 UTC
    assert_eq!(lo, "2024-01-15T04:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap());
    assert_eq!(hi, "2024-01-16T04:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap());
}

#[test]
fn offset_parsing_accepts_both_signs() {
    assert_eq!(parse_offset("-04:00").unwrap().local_minus_utc(), -4 * 3600);
    assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 5 * 3600 + 1800);
    assert!(parse_offset("04:00").is_none());
    assert!(parse_offset("-25:00").is_none());
}

#[test]
fn shift_length_parsing() {
    assert_eq!(parse_shift_minutes("7h30"), Some(450));
    assert_eq!(parse_shift_minutes("8h"), Some(480));
    assert_eq!(parse_shift_minutes("450"), Some(450));
    assert_eq!(parse_shift_minutes("7h75"), None);
    assert_eq!(parse_shift_minutes("abc"), None);
}

#[test]
fn minute_formatting() {
    assert_eq!(format_minutes(450), "7:30");
    assert_eq!(format_minutes(0), "0:00");
    assert_eq!(format_minutes(61), "1:01");

    assert_eq!(format_signed_minutes(0), "0:00");
    assert_eq!(format_signed_minutes(75), "+1:15");
    assert_eq!(format_signed_minutes(-120), "-2:00");
}
