use super::*;

#[test]
fn format_date_truncates_iso_timestamp() {
    assert_eq!(
        format_date(Some("2024-03-01T12:34:56.000Z")),
        "2024-03-01"
    );
}

#[test]
fn format_date_keeps_short_values() {
    assert_eq!(format_date(Some("2024")), "2024");
}

#[test]
fn format_date_missing_is_na() {
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_date(Some("")), "N/A");
}

#[test]
fn or_na_falls_back_on_empty() {
    assert_eq!(or_na(Some("x@y.z")), "x@y.z");
    assert_eq!(or_na(Some("")), "N/A");
    assert_eq!(or_na(None), "N/A");
}
