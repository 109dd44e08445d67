//! 범주별 단위 정의. 배율표 4종과 온도 변환표로 구성된다.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod volume;

pub use length::LENGTH;
pub use mass::MASS;
pub use temperature::{transform_temperature, TemperatureUnit};
pub use time::TIME;
pub use volume::VOLUME;

/// 단위명 → "기준 단위 1당 해당 단위의 양" 배율표.
///
/// 모든 항목은 같은 기준 단위에 대한 값이므로 `to / from` 배율만으로
/// 표 안의 임의의 두 단위를 직접 환산할 수 있다. 항목 순서는 화면 표시 순서다.
#[derive(Debug)]
pub struct UnitTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { name, entries }
    }

    /// 표 이름 (범주 식별자와 같다).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 단위의 배율. 표에 없는 단위면 None.
    pub fn ratio(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, ratio)| *ratio)
    }

    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> {
        let entries = self.entries;
        entries.iter().map(|(name, _)| *name)
    }

    /// 배율이 정확히 1인 기준 단위.
    pub fn reference_unit(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, ratio)| *ratio == 1.0)
            .map(|(name, _)| *name)
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> [&'static UnitTable; 4] {
        [&MASS, &LENGTH, &VOLUME, &TIME]
    }

    #[test]
    fn every_table_has_one_reference_unit() {
        for table in tables() {
            let ones = table.entries().iter().filter(|(_, r)| *r == 1.0).count();
            assert_eq!(ones, 1, "{}", table.name());
        }
    }

    #[test]
    fn ratios_are_positive_and_finite() {
        for table in tables() {
            for (unit, ratio) in table.entries() {
                assert!(ratio.is_finite() && *ratio > 0.0, "{}: {unit}", table.name());
            }
        }
    }

    #[test]
    fn unit_keys_are_unique() {
        for table in tables() {
            let mut names: Vec<_> = table.unit_names().collect();
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before, "{}", table.name());
        }
    }

    #[test]
    fn reference_units() {
        assert_eq!(MASS.reference_unit(), Some("kilogram"));
        assert_eq!(LENGTH.reference_unit(), Some("meter"));
        assert_eq!(VOLUME.reference_unit(), Some("liter"));
        assert_eq!(TIME.reference_unit(), Some("second"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(MASS.ratio("pound"), Some(2.20462));
        assert_eq!(MASS.ratio("Pound"), None);
    }
}
