use super::UnitTable;

/// 길이 배율표. 기준 단위는 meter이다.
pub static LENGTH: UnitTable = UnitTable::new(
    "length",
    &[
        ("meter", 1.0),
        ("centimeter", 100.0),
        ("millimeter", 1000.0),
        ("kilometer", 0.001),
        ("inch", 39.3701),
        ("foot", 3.28084),
    ],
);
