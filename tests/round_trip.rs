//! Exhaustive round-trip checks over the whole supported calendar.

use iseries_date::{
    CalendarDate, ConvertError, DateOrdinalConverter, MAX_ORDINAL, MIN_ORDINAL, from_offset, to_offset, to_offset_ymd,
};

/// Every calendar day from 0001-01-01 to 9999-12-31, in order.
fn all_dates() -> impl Iterator<Item = CalendarDate> {
    (1..=9999u16).flat_map(|year| {
        (1..=12u8).flat_map(move |month| {
            (1..=31u8).filter_map(move |day| CalendarDate::from_ymd(year, month, day).ok())
        })
    })
}

#[test]
fn every_date_survives_a_round_trip() {
    let mut count = 0;
    for date in all_dates() {
        let offset = to_offset(date);
        assert_eq!(from_offset(offset).unwrap(), date, "round trip through offset {offset}");
        count += 1;
    }
    assert_eq!(count, MAX_ORDINAL - MIN_ORDINAL + 1);
}

#[test]
fn consecutive_dates_have_consecutive_offsets() {
    let mut previous: Option<i32> = None;
    for date in all_dates() {
        let offset = to_offset(date).get();
        if let Some(prev) = previous {
            assert_eq!(offset, prev + 1, "gap before {date}");
        }
        previous = Some(offset);
    }
}

#[test]
fn every_offset_survives_a_round_trip() {
    let converter = DateOrdinalConverter::default();
    for offset in converter.min_offset().get()..=converter.max_offset().get() {
        let date = converter.from_offset(offset).unwrap();
        assert_eq!(converter.to_offset(date).get(), offset, "round trip through {date}");
    }
}

#[test]
fn offsets_past_either_end_are_rejected() {
    let converter = DateOrdinalConverter::default();
    let below = converter.min_offset().get() - 1;
    let above = converter.max_offset().get() + 1;
    assert!(matches!(from_offset(below), Err(ConvertError::OutOfRange { .. })));
    assert!(matches!(from_offset(above), Err(ConvertError::OutOfRange { .. })));
}

#[test]
fn reference_values() {
    assert_eq!(to_offset_ymd(1899, 11, 29).unwrap().get(), 0);
    assert_eq!(to_offset_ymd(1899, 11, 30).unwrap().get(), 1);
    assert_eq!(to_offset_ymd(1899, 11, 28).unwrap().get(), -1);
    assert_eq!(to_offset_ymd(2000, 1, 1).unwrap().get(), 36_557);
    assert_eq!(from_offset(0).unwrap().to_ymd(), (1899, 11, 29));
}

#[test]
fn custom_epoch_round_trips_at_the_edges() {
    let converter = DateOrdinalConverter::new(CalendarDate::from_ymd(1970, 1, 1).unwrap());
    for date in [CalendarDate::min_value(), CalendarDate::epoch(), CalendarDate::max_value()] {
        assert_eq!(converter.from_offset(converter.to_offset(date)).unwrap(), date);
    }
}
