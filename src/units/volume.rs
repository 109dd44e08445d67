use super::UnitTable;

/// 체적 배율표. 기준 단위는 liter이다.
pub static VOLUME: UnitTable = UnitTable::new(
    "volume",
    &[("liter", 1.0), ("milliliter", 1000.0), ("gallon", 0.264172)],
);
