// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, GregorianToKurdishRequest, GregorianToKurdishResponse, KurdishToGregorianRequest,
    KurdishToGregorianResponse, MonthInput, ValidateKurdishDateResponse,
    convert_gregorian_to_kurdish, convert_kurdish_to_gregorian, validate_kurdish_date,
};

fn to_kurdish(date: &str) -> Result<GregorianToKurdishResponse, ApiError> {
    convert_gregorian_to_kurdish(&GregorianToKurdishRequest {
        date: String::from(date),
    })
}

fn to_gregorian(year: i32, month: MonthInput, day: u8) -> Result<KurdishToGregorianResponse, ApiError> {
    convert_kurdish_to_gregorian(&KurdishToGregorianRequest { year, month, day })
}

#[test]
fn test_gregorian_to_kurdish() {
    let response: GregorianToKurdishResponse = to_kurdish("2025-10-17").unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.gregorian_date, "2025-10-17");
    assert_eq!(response.kurdish_date.year, 2725);
    assert_eq!(response.kurdish_date.month, "Rezber");
    assert_eq!(response.kurdish_date.day, 25);
    assert!(!response.approximate);
}

#[test]
fn test_reference_conversions() {
    for (gregorian, year, month, day) in [
        ("2024-03-20", 2723, "Reşeme", 30),
        ("2025-03-20", 2724, "Reşeme", 29),
        ("2025-01-01", 2724, "Befranbar", 11),
        ("2025-01-21", 2724, "Rêbendan", 1),
        ("2024-02-29", 2723, "Reşeme", 10),
        ("2023-07-25", 2723, "Gelawêj", 3),
    ] {
        let response: GregorianToKurdishResponse = to_kurdish(gregorian).unwrap();
        assert_eq!(
            (
                response.kurdish_date.year,
                response.kurdish_date.month.as_str(),
                response.kurdish_date.day
            ),
            (year, month, day),
            "{gregorian}"
        );
    }
}

#[test]
fn test_bad_gregorian_date() {
    assert_eq!(
        to_kurdish("2025-02-30").unwrap_err(),
        ApiError::InvalidDateFormat {
            value: String::from("2025-02-30")
        }
    );
}

#[test]
fn test_pre_1900_is_approximate() {
    assert!(to_kurdish("1850-03-21").unwrap().approximate);
    assert!(!to_kurdish("1900-01-01").unwrap().approximate);
}

#[test]
fn test_kurdish_to_gregorian_by_name_and_number() {
    let by_name: KurdishToGregorianResponse =
        to_gregorian(2725, MonthInput::Name(String::from("Xakelew")), 1).unwrap();
    let by_number: KurdishToGregorianResponse = to_gregorian(2725, MonthInput::Number(1), 1).unwrap();
    let by_numeric_text: KurdishToGregorianResponse =
        to_gregorian(2725, MonthInput::Name(String::from("1")), 1).unwrap();

    assert_eq!(by_name.gregorian_date, "2025-03-21");
    assert_eq!(by_name, by_number);
    assert_eq!(by_name, by_numeric_text);
    assert_eq!(by_name.kurdish_date.full_date, "١ی Xakelew ٢٧٢٥");
}

#[test]
fn test_kurdish_leap_day_round_trips() {
    let response: KurdishToGregorianResponse =
        to_gregorian(2723, MonthInput::Name(String::from("Reşeme")), 10).unwrap();

    assert_eq!(response.gregorian_date, "2024-02-29");
}

#[test]
fn test_invalid_kurdish_dates() {
    for (year, month, day) in [
        (2724, MonthInput::Name(String::from("Reşeme")), 30),
        (2725, MonthInput::Name(String::from("Rezber")), 31),
        (2725, MonthInput::Name(String::from("Januar")), 1),
        (2725, MonthInput::Number(13), 1),
        (2725, MonthInput::Number(1), 0),
    ] {
        assert!(matches!(
            to_gregorian(year, month, day),
            Err(ApiError::InvalidKurdishDate { .. })
        ));
    }
}

#[test]
fn test_validate_kurdish_date() {
    let valid: ValidateKurdishDateResponse = validate_kurdish_date(&KurdishToGregorianRequest {
        year: 2723,
        month: MonthInput::Name(String::from("Reşeme")),
        day: 30,
    });
    let invalid: ValidateKurdishDateResponse = validate_kurdish_date(&KurdishToGregorianRequest {
        year: 2724,
        month: MonthInput::Number(12),
        day: 30,
    });
    let unknown_month: ValidateKurdishDateResponse =
        validate_kurdish_date(&KurdishToGregorianRequest {
            year: 2724,
            month: MonthInput::Name(String::from("Nisan")),
            day: 1,
        });

    assert!(valid.is_valid);
    assert_eq!(valid.kurdish_date.month, "Reşeme");
    assert!(!invalid.is_valid);
    assert_eq!(invalid.kurdish_date.month, "12");
    assert!(!unknown_month.is_valid);
}

#[test]
fn test_extreme_kurdish_years() {
    let validated: ValidateKurdishDateResponse = validate_kurdish_date(&KurdishToGregorianRequest {
        year: i32::MIN,
        month: MonthInput::Name(String::from("Reşeme")),
        day: 1,
    });
    assert!(!validated.is_valid);

    for year in [i32::MIN, i32::MAX] {
        assert!(matches!(
            to_gregorian(year, MonthInput::Number(1), 1),
            Err(ApiError::InvalidKurdishDate { .. })
        ));
    }
}

#[test]
fn test_month_input_deserializes_name_or_number() {
    let by_number: KurdishToGregorianRequest =
        serde_json::from_str(r#"{ "year": 2725, "month": 7, "day": 25 }"#).unwrap();
    let by_name: KurdishToGregorianRequest =
        serde_json::from_str(r#"{ "year": 2725, "month": "Rezber", "day": 25 }"#).unwrap();

    assert_eq!(by_number.month, MonthInput::Number(7));
    assert_eq!(
        to_gregorian(by_name.year, by_name.month, by_name.day)
            .unwrap()
            .gregorian_date,
        "2025-10-17"
    );
}
