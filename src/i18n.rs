use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::category::Category;
use crate::conversion::ConversionError;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CATEGORY_MASS: &str = "category.mass";
    pub const CATEGORY_LENGTH: &str = "category.length";
    pub const CATEGORY_TEMPERATURE: &str = "category.temperature";
    pub const CATEGORY_VOLUME: &str = "category.volume";
    pub const CATEGORY_TIME: &str = "category.time";

    pub const HINT_MASS: &str = "hint.mass";
    pub const HINT_LENGTH: &str = "hint.length";
    pub const HINT_TEMPERATURE: &str = "hint.temperature";
    pub const HINT_VOLUME: &str = "hint.volume";
    pub const HINT_TIME: &str = "hint.time";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_BUTTON: &str = "convert.button";
    pub const PROMPT_VALUE: &str = "convert.prompt_value";
    pub const PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const LABEL_VALUE: &str = "convert.label_value";
    pub const LABEL_FROM: &str = "convert.label_from";
    pub const LABEL_TO: &str = "convert.label_to";
    pub const LABEL_RESULT: &str = "convert.label_result";
    pub const RESULT_LINE: &str = "convert.result_line";
    pub const REFERENCE_UNIT: &str = "convert.reference_unit";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_CATEGORY: &str = "settings.current_category";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNSUPPORTED_TEMPERATURE: &str = "error.unsupported_temperature";
    pub const ERROR_UNKNOWN_UNIT: &str = "error.unknown_unit";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_pack(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 언어팩 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 모르는 키는 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(key).to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(&self.t(key), vars)
    }

    pub fn category_label(&self, category: Category) -> String {
        self.t(category_key(category))
    }

    /// 범주 탭의 안내 문구.
    pub fn category_hint(&self, category: Category) -> String {
        use keys::*;
        self.t(match category {
            Category::Mass => HINT_MASS,
            Category::Length => HINT_LENGTH,
            Category::Temperature => HINT_TEMPERATURE,
            Category::Volume => HINT_VOLUME,
            Category::Time => HINT_TIME,
        })
    }
}

fn category_key(category: Category) -> &'static str {
    use keys::*;
    match category {
        Category::Mass => CATEGORY_MASS,
        Category::Length => CATEGORY_LENGTH,
        Category::Temperature => CATEGORY_TEMPERATURE,
        Category::Volume => CATEGORY_VOLUME,
        Category::Time => CATEGORY_TIME,
    }
}

/// 변환 오류를 화면에 그대로 표시할 현지화 메시지로 바꾼다.
pub fn describe_error(err: &ConversionError, tr: &Translator) -> String {
    match err {
        ConversionError::Parse { .. } => tr.t(keys::ERROR_INVALID_NUMBER),
        ConversionError::UnsupportedTemperature { .. } => {
            tr.t(keys::ERROR_UNSUPPORTED_TEMPERATURE)
        }
        ConversionError::UnknownUnit { category, unit } => tr.tf(
            keys::ERROR_UNKNOWN_UNIT,
            &[("unit", unit.as_str()), ("category", *category)],
        ),
        ConversionError::OutOfRange => tr.t(keys::ERROR_OUT_OF_RANGE),
    }
}

pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

/// 로케일 문자열(`ko_KR.UTF-8`, `en-US` 등)에서 지원 언어 코드를 뽑는다.
fn normalize_lang(code: &str) -> Option<String> {
    let base = code
        .trim()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match base.as_str() {
        "ko" | "en" => Some(base),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .into_iter()
        .chain(["LC_ALL", "LANG"].into_iter().filter_map(|var| std::env::var(var).ok()))
        .find_map(|loc| normalize_lang(&loc))
}

/// `<dir>/<언어>.toml` 언어팩을 점 표기 키 → 문자열 맵으로 읽는다.
/// 중첩 테이블은 `section.key`로 펼치고 문자열이 아닌 값은 무시한다.
fn load_pack(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let code = normalize_lang(lang)?;
    let content = fs::read_to_string(Path::new(dir).join(format!("{code}.toml"))).ok()?;
    let table: toml::Table = toml::from_str(&content).ok()?;

    let mut map = HashMap::new();
    let mut pending: Vec<(String, toml::Value)> = table.into_iter().collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            toml::Value::String(text) => {
                map.insert(key, text);
            }
            toml::Value::Table(nested) => {
                pending.extend(nested.into_iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "단위 변환기",
        APP_SUBTITLE => "질량, 길이, 온도, 체적, 시간 단위를 변환합니다.",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환기 ===",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CATEGORY_MASS => "질량",
        CATEGORY_LENGTH => "길이",
        CATEGORY_TEMPERATURE => "온도",
        CATEGORY_VOLUME => "체적",
        CATEGORY_TIME => "시간",
        HINT_MASS => "질량 단위 변환 (kg, g, mg, 파운드)",
        HINT_LENGTH => "길이 단위 변환 (미터, cm, km, 인치, 피트)",
        HINT_TEMPERATURE => "온도 단위 변환 (섭씨, 화씨, 켈빈)",
        HINT_VOLUME => "체적 단위 변환 (리터, 밀리리터, 갤런)",
        HINT_TIME => "시간 단위 변환 (초, 분, 시간)",
        CONVERT_HEADING => "\n-- {category} 변환 --",
        CONVERT_BUTTON => "{category} 변환",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위 번호: ",
        PROMPT_TO_UNIT => "변환 단위 번호: ",
        LABEL_VALUE => "값",
        LABEL_FROM => "입력 단위",
        LABEL_TO => "변환 단위",
        LABEL_RESULT => "결과",
        RESULT_LINE => "변환 결과: {value} {unit}",
        REFERENCE_UNIT => "(기준)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_CATEGORY => "현재 기본 범주: {category}",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "기본 범주가 {category}(으)로 설정되었습니다.",
        ERROR_INVALID_NUMBER => "❌ 숫자 값을 입력하세요.",
        ERROR_UNSUPPORTED_TEMPERATURE => "❌ 지원하지 않는 온도 변환입니다.",
        ERROR_UNKNOWN_UNIT => "❌ {category}에 없는 단위입니다: '{unit}'",
        ERROR_OUT_OF_RANGE => "❌ 결과가 표현 범위를 벗어났습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Unit Converter",
        APP_SUBTITLE => "Convert units across Mass, Length, Temperature, Volume, Time.",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Unit Converter ===",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        CATEGORY_MASS => "Mass",
        CATEGORY_LENGTH => "Length",
        CATEGORY_TEMPERATURE => "Temperature",
        CATEGORY_VOLUME => "Volume",
        CATEGORY_TIME => "Time",
        HINT_MASS => "Convert mass units (kg, g, mg, pound)",
        HINT_LENGTH => "Convert length units (meter, cm, km, inch, foot)",
        HINT_TEMPERATURE => "Convert temperature units (Celsius, Fahrenheit, Kelvin)",
        HINT_VOLUME => "Convert volume units (liter, milliliter, gallon)",
        HINT_TIME => "Convert time units (second, minute, hour)",
        CONVERT_HEADING => "\n-- {category} conversion --",
        CONVERT_BUTTON => "Convert {category}",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit number: ",
        PROMPT_TO_UNIT => "To unit number: ",
        LABEL_VALUE => "Value",
        LABEL_FROM => "From",
        LABEL_TO => "To",
        LABEL_RESULT => "Result",
        RESULT_LINE => "Result: {value} {unit}",
        REFERENCE_UNIT => "(reference)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_CATEGORY => "Current default category: {category}",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Default category set to {category}.",
        ERROR_INVALID_NUMBER => "❌ Enter a numeric value.",
        ERROR_UNSUPPORTED_TEMPERATURE => "❌ Unsupported temperature conversion.",
        ERROR_UNKNOWN_UNIT => "❌ Unknown unit '{unit}' for {category}.",
        ERROR_OUT_OF_RANGE => "❌ Result is out of range.",
        _ => return None,
    })
}
