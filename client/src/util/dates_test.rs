use super::*;

#[test]
fn short_date_from_rfc3339() {
    assert_eq!(short_date("2024-03-05T10:00:00.000Z"), "Mar 5, 2024");
    assert_eq!(short_date("2023-12-31T23:59:59+00:00"), "Dec 31, 2023");
}

#[test]
fn long_date_spells_out_month() {
    assert_eq!(long_date("2024-09-17T08:30:00Z"), "September 17, 2024");
}

#[test]
fn date_only_input_is_accepted() {
    assert_eq!(short_date("2022-01-02"), "Jan 2, 2022");
    assert_eq!(long_date("2022-01-02"), "January 2, 2022");
}

#[test]
fn unparseable_input_is_returned_as_is() {
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(long_date(""), "");
}
