//! 온도 변환표 회귀 테스트.
use unit_converter::conversion::{convert, convert_temperature, ConversionError};
use unit_converter::Category;

fn unsupported(res: Result<f64, ConversionError>) -> bool {
    matches!(res, Err(ConversionError::UnsupportedTemperature { .. }))
}

#[test]
fn celsius_to_fahrenheit() {
    assert_eq!(convert_temperature("0", "celsius", "fahrenheit"), Ok(32.0));
    assert_eq!(convert_temperature("-40", "celsius", "fahrenheit"), Ok(-40.0));
}

#[test]
fn fahrenheit_to_celsius() {
    assert_eq!(convert_temperature("98.6", "fahrenheit", "celsius"), Ok(37.0));
}

#[test]
fn celsius_kelvin_both_ways() {
    assert_eq!(convert_temperature("100", "celsius", "kelvin"), Ok(373.15));
    assert_eq!(convert_temperature("300", "kelvin", "celsius"), Ok(26.85));
    assert_eq!(convert_temperature("0", "kelvin", "celsius"), Ok(-273.15));
}

#[test]
fn results_are_rounded_to_four_places() {
    // 1°F = -17.2222...°C
    assert_eq!(convert_temperature("1", "fahrenheit", "celsius"), Ok(-17.2222));
}

#[test]
fn fahrenheit_kelvin_is_not_composed() {
    assert!(unsupported(convert_temperature("25", "fahrenheit", "kelvin")));
    assert!(unsupported(convert_temperature("25", "kelvin", "fahrenheit")));
    assert_eq!(
        convert_temperature("25", "fahrenheit", "kelvin")
            .unwrap_err()
            .to_string(),
        "❌ Unsupported temperature conversion."
    );
}

#[test]
fn same_unit_is_returned_without_rounding() {
    assert_eq!(convert_temperature("10", "celsius", "celsius"), Ok(10.0));
    // 동일 단위는 반올림하지 않는 호환 동작을 유지한다.
    assert_eq!(
        convert_temperature("10.123456789", "kelvin", "kelvin"),
        Ok(10.123456789)
    );
}

#[test]
fn units_outside_the_scale_set_are_unsupported() {
    assert!(unsupported(convert_temperature("1", "rankine", "celsius")));
    assert!(unsupported(convert_temperature("1", "rankine", "rankine")));
    assert!(unsupported(convert_temperature("1", "Celsius", "kelvin")));
}

#[test]
fn parse_error_wins_over_unit_checks() {
    let res = convert_temperature("warm", "fahrenheit", "kelvin");
    assert!(matches!(res, Err(ConversionError::Parse { .. })));
}

#[test]
fn dispatcher_routes_temperature_and_ratio_categories() {
    assert_eq!(convert(Category::Temperature, "0", "celsius", "fahrenheit"), Ok(32.0));
    assert_eq!(convert(Category::Mass, "5", "kilogram", "pound"), Ok(11.0231));
    assert_eq!(convert(Category::Time, "1", "hour", "second"), Ok(3600.0));
    // 온도 단위를 배율 범주에 넘기면 미지 단위다.
    assert!(matches!(
        convert(Category::Length, "1", "celsius", "meter"),
        Err(ConversionError::UnknownUnit { category: "length", .. })
    ));
}

#[test]
fn repeated_calls_are_idempotent() {
    let first = convert(Category::Volume, "3.3", "gallon", "milliliter");
    for _ in 0..3 {
        assert_eq!(convert(Category::Volume, "3.3", "gallon", "milliliter"), first);
    }
}
