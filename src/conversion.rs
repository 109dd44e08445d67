use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::units::{transform_temperature, TemperatureUnit, UnitTable};

/// 배율표 변환 결과의 소수 자릿수.
pub const RATIO_DECIMALS: usize = 5;
/// 온도 변환 결과의 소수 자릿수. 같은 단위끼리는 반올림하지 않는다.
pub const TEMPERATURE_DECIMALS: usize = 4;

/// 단위 변환 시 발생 가능한 오류. `Display` 문자열이 그대로 사용자 메시지가 된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 숫자로 해석할 수 없는 입력값
    #[error("❌ Enter a numeric value.")]
    Parse { input: String },
    /// 범주의 배율표에 없는 단위
    #[error("❌ Unknown unit '{unit}' for {category}.")]
    UnknownUnit { category: &'static str, unit: String },
    /// 변환표에 없는 온도 변환 방향
    #[error("❌ Unsupported temperature conversion.")]
    UnsupportedTemperature { from: String, to: String },
    /// 결과가 f64 범위를 넘음
    #[error("❌ Result is out of range.")]
    OutOfRange,
}

/// 변환 한 번의 결과: 반올림된 값 또는 오류.
pub type ConversionResult = Result<f64, ConversionError>;

/// 입력 문자열을 유한한 실수로 해석한다. 앞뒤 공백은 무시하고 inf/nan은 거부한다.
/// 숫자 사이의 `_` 자릿수 구분자(`1_000`)는 허용한다.
pub fn parse_value(input: &str) -> ConversionResult {
    strip_digit_separators(input.trim())
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConversionError::Parse {
            input: input.to_string(),
        })
}

/// 양옆이 모두 숫자인 `_`만 지운다. 그 밖의 위치에 있는 `_`는 None.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

/// 소수점 이하 `decimals` 자리로 반올림한다. 십진 포맷 결과에 가장 가까운 f64를 돌려준다.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// 배율표 기반 변환: `value * (table[to] / table[from])`를 소수 5자리로 반올림한다.
///
/// 같은 단위끼리는 `r / r == 1.0`이 정확히 성립하므로 결과는 `round_to(value, 5)`와 같다.
pub fn convert_by_ratio(
    value: &str,
    from_unit: &str,
    to_unit: &str,
    table: &UnitTable,
) -> ConversionResult {
    let value = parse_value(value)?;
    let from = lookup_ratio(table, from_unit)?;
    let to = lookup_ratio(table, to_unit)?;

    let raw = value * (to / from);
    if !raw.is_finite() {
        return Err(ConversionError::OutOfRange);
    }
    let result = round_to(raw, RATIO_DECIMALS);
    debug!(
        category = table.name(),
        from_unit, to_unit, value, result, "ratio conversion"
    );
    Ok(result)
}

fn lookup_ratio(table: &UnitTable, unit: &str) -> ConversionResult {
    table.ratio(unit).ok_or_else(|| ConversionError::UnknownUnit {
        category: table.name(),
        unit: unit.to_string(),
    })
}

/// 온도 변환. 지원 방향(섭씨↔화씨, 섭씨↔켈빈)만 계산하고 소수 4자리로 반올림한다.
///
/// 입력/출력 단위가 같으면 해석한 값을 반올림 없이 그대로 돌려준다.
pub fn convert_temperature(value: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
    let value = parse_value(value)?;
    let unsupported = || ConversionError::UnsupportedTemperature {
        from: from_unit.to_string(),
        to: to_unit.to_string(),
    };
    let from = TemperatureUnit::from_name(from_unit).ok_or_else(unsupported)?;
    let to = TemperatureUnit::from_name(to_unit).ok_or_else(unsupported)?;

    if from == to {
        return Ok(value);
    }

    let raw = transform_temperature(value, from, to).ok_or_else(unsupported)?;
    let result = round_to(raw, TEMPERATURE_DECIMALS);
    debug!(from_unit, to_unit, value, result, "temperature conversion");
    Ok(result)
}

/// 범주에 맞는 변환 함수로 분기한다. 두 화면(CLI/GUI) 모두 이 함수만 호출한다.
pub fn convert(category: Category, value: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
    match category.ratio_table() {
        Some(table) => convert_by_ratio(value, from_unit, to_unit, table),
        None => convert_temperature(value, from_unit, to_unit),
    }
}
