use chrono::NaiveDate;
use luach_calendar::{
    CalendarError, DayNumber, HebrewDate, Month, day_number_to_hebrew, gregorian,
    hebrew_to_day_number,
};

fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn hebrew_to_civil_fixed_points() {
    let cases: &[(u8, Month, i32, i64, NaiveDate)] = &[
        (29, Month::Cheshvan, 5769, 733373, civil(2008, 11, 27)),
        (15, Month::Cheshvan, 5769, 733359, civil(2008, 11, 13)),
        (4, Month::Tamuz, 5536, 648478, civil(1776, 6, 21)),
        (4, Month::Tevet, 5511, 639175, civil(1751, 1, 1)),
        (18, Month::Tevet, 3761, 1, civil(1, 1, 1)),
        (7, Month::Cheshvan, 4569, 295059, civil(808, 11, 4)),
        (30, Month::AdarI, 5787, 740049, civil(2027, 3, 9)),
    ];
    for &(day, month, year, expected_dn, expected_civil) in cases {
        let date = HebrewDate::new(day, month, year).unwrap();
        assert_eq!(
            date.day_number().get(),
            expected_dn,
            "day number of {date}: expected {expected_dn}"
        );
        assert_eq!(
            date.to_civil().unwrap(),
            expected_civil,
            "civil date of {date}: expected {expected_civil}"
        );
    }
}

#[test]
fn civil_to_hebrew() {
    let date = HebrewDate::from_civil(civil(2010, 12, 7)).unwrap();
    assert_eq!(date.to_string(), "30 Kislev 5771");

    let date = HebrewDate::from_civil(civil(1751, 1, 1)).unwrap();
    assert_eq!(date.month(), Month::Tevet);
    assert_eq!(date.day(), 4);
    assert_eq!(date.year(), 5511);
}

#[test]
fn ancient_date_uses_proleptic_civil_calendar() {
    let date = HebrewDate::new(3, Month::Tishrei, 1003).unwrap();
    assert_eq!(date.day_number().get(), -1007451);
    assert_eq!(date.to_civil().unwrap(), civil(-2758, 9, 10));
}

#[test]
fn day_number_to_hebrew_matches_constructor() {
    for raw in [733359, 295059, 1, 648478, -1007451] {
        let (year, month, day) = day_number_to_hebrew(DayNumber::new(raw)).unwrap();
        assert_eq!(
            hebrew_to_day_number(year, month, day).unwrap().get(),
            raw,
            "({year}, {month}, {day}) should map back to {raw}"
        );
    }
}

#[test]
fn out_of_range_day_number() {
    let err = HebrewDate::from_day_number(DayNumber::new(12345678)).unwrap_err();
    assert_eq!(err.to_string(), "day number 12345678 out of range");
}

#[test]
fn copies_are_the_same_date() {
    let a = HebrewDate::from_civil(civil(1751, 1, 1)).unwrap();
    let b = a;
    assert!(a.is_same_date(b));

    let c = HebrewDate::from_name(29, "Cheshvan", 5769).unwrap();
    let d = HebrewDate::from_day_number(c.day_number()).unwrap();
    assert!(c.is_same_date(d));
    assert_eq!(c, d);
}

#[test]
fn neighbours_of_29_cheshvan_5769() {
    let date = HebrewDate::new(29, Month::Cheshvan, 5769).unwrap();
    assert_eq!(date.prev().unwrap().month(), Month::Cheshvan);
    assert_eq!(date.next().unwrap().month(), Month::Kislev);
}

#[test]
fn from_parts_errors() {
    assert_eq!(
        HebrewDate::from_parts(&["17 Cheshvan 5759"]).unwrap_err(),
        CalendarError::InvalidArgument {
            reason: "17 Cheshvan 5759".to_string()
        }
    );
    assert_eq!(
        HebrewDate::from_parts(&["1", "2", "3", "4"])
            .unwrap_err()
            .to_string(),
        "bad argument: date requires 1 or 3 arguments, got 4"
    );
    assert!(matches!(
        HebrewDate::from_parts(&["15", "Brumaire", "5780"]),
        Err(CalendarError::UnknownMonthName { .. })
    ));
}

#[test]
fn gregorian_collaborator_agrees_with_hebrew_date() {
    let d = civil(2021, 5, 17);
    let date = HebrewDate::from_civil(d).unwrap();
    assert_eq!(date.day_number(), gregorian::to_day_number(d));
    assert_eq!(date.to_string(), "6 Sivan 5781");
}
