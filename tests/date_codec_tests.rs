use chrono::NaiveDate;
use graphnav_rs::core::{DateCodec, FixedClock, Instant, ParseMode};
use graphnav_rs::error::NavError;

fn fixed_clock() -> FixedClock {
    let now = NaiveDate::from_ymd_opt(2010, 5, 5)
        .and_then(|date| date.and_hms_opt(10, 52, 26))
        .expect("valid fixture datetime");
    FixedClock(now)
}

fn codec() -> DateCodec<FixedClock> {
    DateCodec::new(fixed_clock())
}

#[test]
fn now_resolves_to_the_clock_instant() {
    let decoded = codec().decode("now").expect("decode now");
    let expected = Instant::from_fields(2010, 4, 5, 10, 52, 26).expect("fixture");
    assert_eq!(decoded, expected);
}

#[test]
fn five_mins_ago_is_300_seconds_back() {
    let decoded = codec().decode("5 mins ago").expect("decode");
    let now = codec().decode("now").expect("decode now");
    assert_eq!(now.epoch_millis() - decoded.epoch_millis(), 300_000);
}

#[test]
fn two_years_ago_uses_the_fixed_365_day_year() {
    let decoded = codec().decode("2 years ago").expect("decode");
    let now = codec().decode("now").expect("decode now");
    assert_eq!(
        now.epoch_millis() - decoded.epoch_millis(),
        2 * 31_536_000 * 1_000
    );
}

#[test]
fn three_months_ago_uses_the_fixed_30_day_month() {
    let decoded = codec().decode("3 months ago").expect("decode");
    let now = codec().decode("now").expect("decode now");
    assert_eq!(
        now.epoch_millis() - decoded.epoch_millis(),
        3 * 2_592_000 * 1_000
    );
}

#[test]
fn absolute_form_round_trips_exactly() {
    let text = "Wed May 5 10:52:26 HST 2010";
    let decoded = codec().decode(text).expect("decode");
    assert_eq!(codec().encode(decoded), text);
}

#[test]
fn double_space_form_decodes_like_the_single_space_form() {
    let single = codec().decode("Wed May 5 10:52:26 HST 2010").expect("single");
    let double = codec()
        .decode("Wed May  5 10:52:26 HST 2010")
        .expect("double");
    assert_eq!(single, double);
}

#[test]
fn encode_never_zero_pads() {
    let instant = Instant::from_fields(2010, 4, 5, 9, 5, 6).expect("fixture");
    assert_eq!(codec().encode(instant), "Wed May 5 9:5:6 HST 2010");
}

#[test]
fn encode_always_prints_the_display_zone_label() {
    // The parser ignores the zone token, so any label decodes the same and
    // re-encodes with the fixed display literal.
    let decoded = codec().decode("Wed May 5 10:52:26 UTC 2010").expect("decode");
    assert_eq!(codec().encode(decoded), "Wed May 5 10:52:26 HST 2010");
}

#[test]
fn weekday_token_is_not_validated_against_the_date() {
    let mislabeled = codec().decode("Mon May 5 10:52:26 HST 2010").expect("decode");
    let correct = codec().decode("Wed May 5 10:52:26 HST 2010").expect("decode");
    assert_eq!(mislabeled, correct);
    // Re-encoding emits the derived weekday, not the claimed one.
    assert_eq!(codec().encode(mislabeled), "Wed May 5 10:52:26 HST 2010");
}

#[test]
fn full_month_names_are_accepted() {
    let abbreviated = codec().decode("Sat December 25 6:0:0 HST 2010").expect("decode");
    let expected = Instant::from_fields(2010, 11, 25, 6, 0, 0).expect("fixture");
    assert_eq!(abbreviated, expected);
}

#[test]
fn out_of_range_day_rolls_into_the_next_month() {
    let decoded = codec().decode("Sat Apr 31 0:0:0 HST 2010").expect("decode");
    let expected = Instant::from_fields(2010, 4, 1, 0, 0, 0).expect("fixture");
    assert_eq!(decoded, expected);
}

#[test]
fn strict_mode_reports_unknown_units_and_months() {
    assert!(matches!(
        codec().decode("7 fortnights ago"),
        Err(NavError::UnknownUnit(name)) if name == "fortnights"
    ));
    assert!(matches!(
        codec().decode("Wed Smarch 5 10:52:26 HST 2010"),
        Err(NavError::UnknownMonth(name)) if name == "Smarch"
    ));
}

#[test]
fn legacy_mode_degrades_instead_of_failing() {
    let legacy = codec().with_mode(ParseMode::Legacy);

    // Unknown unit: the amount is left in raw seconds.
    let decoded = legacy.decode("7 fortnights ago").expect("decode");
    let now = legacy.decode("now").expect("decode now");
    assert_eq!(now.epoch_millis() - decoded.epoch_millis(), 7_000);

    // Unknown month: January stands in.
    let decoded = legacy.decode("Wed Smarch 5 10:52:26 HST 2010").expect("decode");
    let expected = Instant::from_fields(2010, 0, 5, 10, 52, 26).expect("fixture");
    assert_eq!(decoded, expected);
}

#[test]
fn structurally_broken_input_is_an_error_in_both_modes() {
    for text in ["", "soon", "Wed May 2010"] {
        assert!(codec().decode(text).is_err(), "{text:?}");
        assert!(
            codec().with_mode(ParseMode::Legacy).decode(text).is_err(),
            "{text:?}"
        );
    }
}
