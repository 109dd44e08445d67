use std::io::{self, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::conversion::{self, ConversionResult};
use crate::i18n::{self, keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(Category),
    Settings,
    Exit,
}

/// 메뉴 번호를 선택지로 바꾼다. 1~5는 `Category::ALL` 순서의 범주이고
/// 빈 입력은 기본 범주다.
pub fn parse_menu_choice(input: &str, default: Category) -> Option<MenuChoice> {
    match input.trim() {
        "" => Some(MenuChoice::Convert(default)),
        "0" => Some(MenuChoice::Exit),
        "6" => Some(MenuChoice::Settings),
        other => select_numbered(other, &Category::ALL).map(MenuChoice::Convert),
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 기본 범주에는 `*`를 붙인다.
pub fn main_menu(tr: &Translator, default: Category) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for (i, category) in Category::ALL.iter().enumerate() {
        let mark = if *category == default { " *" } else { "" };
        println!("{}) {}{mark}", i + 1, tr.category_label(*category));
    }
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    let prompt = format!(
        "{} [{}] ",
        tr.t(keys::PROMPT_MENU_SELECT).trim_end(),
        tr.category_label(default)
    );
    loop {
        let sel = read_line(&prompt)?;
        match parse_menu_choice(&sel, default) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 범주 하나의 변환을 처리한다. 결과 또는 오류 메시지를 그대로 출력한다.
pub fn handle_conversion(tr: &Translator, cfg: &Config, category: Category) -> Result<(), AppError> {
    println!(
        "{}",
        tr.tf(
            keys::CONVERT_HEADING,
            &[("category", tr.category_label(category).as_str())]
        )
    );
    println!("{}", tr.category_hint(category));
    let value = read_line(&tr.t(keys::PROMPT_VALUE))?;

    let units = category.unit_names();
    let defaults = cfg.default_units.get(category);
    print_unit_menu(&units);
    let from = read_unit(tr, keys::PROMPT_FROM_UNIT, &units, &defaults.from)?;
    let to = read_unit(tr, keys::PROMPT_TO_UNIT, &units, &defaults.to)?;

    let result = conversion::convert(category, &value, from, to);
    println!("{}", format_outcome(&result, to, tr));
    Ok(())
}

/// 변환 결과를 한 줄로 만든다. 오류는 현지화된 메시지를 그대로 쓴다.
pub fn format_outcome(result: &ConversionResult, to_unit: &str, tr: &Translator) -> String {
    match result {
        Ok(v) => tr.tf(
            keys::RESULT_LINE,
            &[("value", v.to_string().as_str()), ("unit", to_unit)],
        ),
        Err(e) => i18n::describe_error(e, tr),
    }
}

/// `units` 하위 명령용 단위 목록. 기준 단위에는 표시를 붙인다.
pub fn unit_listing(category: Category, tr: &Translator) -> String {
    let reference = category.ratio_table().and_then(|t| t.reference_unit());
    let mut out = format!("{} ({category}):", tr.category_label(category));
    for unit in category.unit_names() {
        out.push_str("\n  ");
        out.push_str(unit);
        if Some(unit) == reference {
            out.push(' ');
            out.push_str(&tr.t(keys::REFERENCE_UNIT));
        }
    }
    out
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT_CATEGORY,
            &[("category", tr.category_label(cfg.default_category).as_str())]
        )
    );
    for (i, category) in Category::ALL.iter().enumerate() {
        print!("{}) {}  ", i + 1, tr.category_label(*category));
    }
    println!();
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match select_numbered(&sel, &Category::ALL) {
        Some(category) => {
            cfg.default_category = category;
            println!(
                "{}",
                tr.tf(
                    keys::SETTINGS_SAVED,
                    &[("category", tr.category_label(category).as_str())]
                )
            );
        }
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 1부터 시작하는 번호로 목록 항목을 고른다.
pub fn select_numbered<T: Copy>(input: &str, items: &[T]) -> Option<T> {
    let n = input.trim().parse::<usize>().ok()?;
    n.checked_sub(1).and_then(|i| items.get(i)).copied()
}

fn print_unit_menu(units: &[&str]) {
    let line = units
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}) {u}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{line}");
}

/// 단위 번호를 읽는다. 빈 입력이면 설정의 기본 단위를 쓴다.
fn read_unit<'a>(
    tr: &Translator,
    prompt_key: &str,
    units: &[&'a str],
    default: &str,
) -> Result<&'a str, AppError> {
    let prompt = format!("{} [{default}] ", tr.t(prompt_key).trim_end());
    loop {
        let sel = read_line(&prompt)?;
        if sel.trim().is_empty() {
            if let Some(unit) = units.iter().copied().find(|u| *u == default) {
                return Ok(unit);
            }
        }
        match select_numbered(&sel, units) {
            Some(unit) => return Ok(unit),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}
