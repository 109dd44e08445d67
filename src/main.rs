use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use unit_converter::{app, config, conversion, i18n, logging, ui_cli, Category};

/// 질량·길이·온도·체적·시간 단위 변환기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "unit_converter_cli", version, about)]
struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환해 결과나 오류 메시지를 출력한다.
    Convert {
        category: Category,
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
    /// 범주별 단위 키를 나열한다.
    Units { category: Option<Category> },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령이나 대화형 메뉴를 실행한다.
///
/// 일회성 하위 명령은 설정을 읽기만 한다. 설정 파일 생성/저장은 대화형 메뉴에서만 한다.
fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();
    let mut cfg = match cli.command {
        Some(_) => config::load_or_fallback(&cli.config),
        None => config::load_or_create(&cli.config)?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Convert {
            category,
            value,
            from,
            to,
        }) => {
            let result = conversion::convert(category, &value, &from, &to);
            println!("{}", ui_cli::format_outcome(&result, &to, &tr));
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::Units { category }) => {
            let categories = match category {
                Some(c) => vec![c],
                None => Category::ALL.to_vec(),
            };
            for c in categories {
                println!("{}", ui_cli::unit_listing(c, &tr));
            }
        }
        None => app::run(&mut cfg, &cli.config, &tr)?,
    }
    Ok(ExitCode::SUCCESS)
}
