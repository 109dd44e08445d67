use super::UnitTable;

/// 질량 배율표. 기준 단위는 kilogram이다.
pub static MASS: UnitTable = UnitTable::new(
    "mass",
    &[
        ("kilogram", 1.0),
        ("gram", 1000.0),
        ("milligram", 1_000_000.0),
        ("pound", 2.20462),
    ],
);
