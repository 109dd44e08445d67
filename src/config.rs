use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::category::Category;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 범주 하나의 기본 입력/변환 단위.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

impl UnitPair {
    fn for_category(category: Category) -> Self {
        let (from, to) = category.default_units();
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// 각 범주별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub mass: UnitPair,
    pub length: UnitPair,
    pub temperature: UnitPair,
    pub volume: UnitPair,
    pub time: UnitPair,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            mass: UnitPair::for_category(Category::Mass),
            length: UnitPair::for_category(Category::Length),
            temperature: UnitPair::for_category(Category::Temperature),
            volume: UnitPair::for_category(Category::Volume),
            time: UnitPair::for_category(Category::Time),
        }
    }
}

impl DefaultUnits {
    pub fn get(&self, category: Category) -> &UnitPair {
        match category {
            Category::Mass => &self.mass,
            Category::Length => &self.length,
            Category::Temperature => &self.temperature,
            Category::Volume => &self.volume,
            Category::Time => &self.time,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut UnitPair {
        match category {
            Category::Mass => &mut self.mass,
            Category::Length => &mut self.length,
            Category::Temperature => &mut self.temperature,
            Category::Volume => &mut self.volume,
            Category::Time => &mut self.time,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 대화형 메뉴/GUI에서 처음 보여줄 범주
    pub default_category: Category,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_category: Category::Mass,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정을 읽기 전용으로 로드한다. 파일이 없으면 만들지 않고 기본값을 쓰며,
/// 읽거나 해석하지 못하면 경고를 남기고 기본값으로 대신한다.
pub fn load_or_fallback(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        return Config::default();
    }
    load_from(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "config load failed, using defaults");
        Config::default()
    })
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장하고 돌려준다.
pub fn load_or_create(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

/// 설정 파일을 읽고 범주에 없는 기본 단위를 바로잡는다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut cfg: Config = toml::from_str(&content)?;
    cfg.sanitize();
    Ok(cfg)
}

impl Config {
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 범주의 단위표에 없는 기본 단위를 범주 기본값으로 되돌린다.
    pub fn sanitize(&mut self) {
        for category in Category::ALL {
            let pair = self.default_units.get_mut(category);
            if !category.has_unit(&pair.from) || !category.has_unit(&pair.to) {
                warn!(
                    %category,
                    from = %pair.from,
                    to = %pair.to,
                    "unknown default unit in config, using category defaults"
                );
                *pair = UnitPair::for_category(category);
            }
        }
    }
}
