/// 온도 단위. 눈금마다 영점이 달라 배율표 대신 방향별 변환식을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    /// 단위 키(대소문자 구분)를 enum으로 바꾼다.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == name)
    }
}

/// 지원하는 방향의 온도 변환식을 적용한다. 표에 없는 방향이면 None.
///
/// 지원 방향은 섭씨↔화씨, 섭씨↔켈빈 네 가지뿐이다. 화씨↔켈빈은 섭씨를 거쳐
/// 합성하지 않는다.
pub fn transform_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Option<f64> {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => Some(value * 9.0 / 5.0 + 32.0),
        (Fahrenheit, Celsius) => Some((value - 32.0) * 5.0 / 9.0),
        (Celsius, Kelvin) => Some(value + 273.15),
        (Kelvin, Celsius) => Some(value - 273.15),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_four_directions_are_defined() {
        let mut supported = 0;
        for from in TemperatureUnit::ALL {
            for to in TemperatureUnit::ALL {
                if transform_temperature(0.0, from, to).is_some() {
                    supported += 1;
                }
            }
        }
        assert_eq!(supported, 4);
    }

    #[test]
    fn freezing_point_of_water() {
        let f = transform_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert_eq!(f, Some(32.0));
        let c = transform_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert_eq!(c, Some(0.0));
    }

    #[test]
    fn names_round_trip() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(TemperatureUnit::from_name(unit.as_str()), Some(unit));
        }
        assert_eq!(TemperatureUnit::from_name("Celsius"), None);
        assert_eq!(TemperatureUnit::from_name("rankine"), None);
    }
}
