use super::UnitTable;

/// 시간 배율표. 기준 단위는 second이다.
pub static TIME: UnitTable = UnitTable::new(
    "time",
    &[("second", 1.0), ("minute", 1.0 / 60.0), ("hour", 1.0 / 3600.0)],
);
