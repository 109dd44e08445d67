//! 변환 엔진을 라이브러리로 분리하여 CLI와 GUI가 같은 로직을 공유한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod logging;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::{convert, convert_by_ratio, convert_temperature, ConversionError};
