use serde::{Deserialize, Serialize};

use crate::units::{self, TemperatureUnit, UnitTable};

/// 변환 가능한 측정 범주.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mass,
    Length,
    Temperature,
    Volume,
    Time,
}

impl Category {
    /// 화면 표시 순서.
    pub const ALL: [Category; 5] = [
        Category::Mass,
        Category::Length,
        Category::Temperature,
        Category::Volume,
        Category::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mass => "mass",
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Time => "time",
        }
    }

    /// 배율표 기반 범주면 해당 표를 돌려준다. 온도는 변환표를 쓰므로 None.
    pub fn ratio_table(&self) -> Option<&'static UnitTable> {
        match self {
            Category::Mass => Some(&units::MASS),
            Category::Length => Some(&units::LENGTH),
            Category::Volume => Some(&units::VOLUME),
            Category::Time => Some(&units::TIME),
            Category::Temperature => None,
        }
    }

    /// 드롭다운에 나열할 단위 키 목록.
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self.ratio_table() {
            Some(table) => table.unit_names().collect(),
            None => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
        }
    }

    /// 기본 입력/변환 단위 쌍.
    pub fn default_units(&self) -> (&'static str, &'static str) {
        match self {
            Category::Mass => ("kilogram", "pound"),
            Category::Length => ("meter", "foot"),
            Category::Temperature => ("celsius", "fahrenheit"),
            Category::Volume => ("liter", "gallon"),
            Category::Time => ("second", "minute"),
        }
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.unit_names().iter().any(|u| *u == unit)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_belong_to_their_category() {
        for c in Category::ALL {
            let (from, to) = c.default_units();
            assert!(c.has_unit(from), "{c}: {from}");
            assert!(c.has_unit(to), "{c}: {to}");
        }
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("volume".parse::<Category>(), Ok(Category::Volume));
        assert!("Volume".parse::<Category>().is_err());
    }
}
