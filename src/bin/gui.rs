#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 범주마다 탭 하나씩 입력 폼을 둔다.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use eframe::{egui, App, Frame};
use unit_converter::{
    config,
    conversion,
    i18n::{self, keys, Translator},
    logging, Category,
};

#[derive(Debug, Parser)]
#[command(name = "unit_converter", version)]
struct GuiArgs {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    logging::init();
    let args = GuiArgs::parse();
    let app_cfg = match config::load_or_create(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "config load failed, using defaults");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());
    let title = tr.t(keys::APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(&app_cfg, tr))),
    )
}

/// 탭 하나의 입력 폼 상태.
#[derive(Debug, Clone)]
struct TabState {
    value: String,
    from: String,
    to: String,
    result: Option<String>,
}

impl TabState {
    fn new(category: Category, cfg: &config::Config) -> Self {
        let pair = cfg.default_units.get(category);
        Self {
            value: String::new(),
            from: pair.from.clone(),
            to: pair.to.clone(),
            result: None,
        }
    }

    /// 변환을 실행하고 결과 칸에 값 또는 오류 메시지를 넣는다.
    fn run(&mut self, category: Category, tr: &Translator) {
        let shown = match conversion::convert(category, &self.value, &self.from, &self.to) {
            Ok(v) => v.to_string(),
            Err(e) => i18n::describe_error(&e, tr),
        };
        self.result = Some(shown);
    }
}

struct GuiApp {
    tab: Category,
    tabs: HashMap<Category, TabState>,
    tr: Translator,
}

impl GuiApp {
    fn new(cfg: &config::Config, tr: Translator) -> Self {
        let tabs = Category::ALL
            .into_iter()
            .map(|c| (c, TabState::new(c, cfg)))
            .collect();
        Self {
            tab: cfg.default_category,
            tabs,
            tr,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
            ui.add_space(8.0);
        });
        for category in Category::ALL {
            let selected = self.tab == category;
            let button = egui::Button::new(self.tr.category_label(category))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = category;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_category(&mut self, ui: &mut egui::Ui, category: Category) {
        let tr = &self.tr;
        let Some(state) = self.tabs.get_mut(&category) else {
            return;
        };
        ui.heading(tr.category_label(category));
        ui.label(tr.category_hint(category));
        ui.add_space(8.0);

        let units = category.unit_names();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new(("conv_grid", category))
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::LABEL_VALUE));
                    ui.text_edit_singleline(&mut state.value);
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_FROM));
                    unit_combo(ui, ("conv_from", category), &mut state.from, &units);
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_TO));
                    unit_combo(ui, ("conv_to", category), &mut state.to, &units);
                    ui.end_row();
                });
            ui.add_space(8.0);
            let label = tr.tf(
                keys::CONVERT_BUTTON,
                &[("category", tr.category_label(category).as_str())],
            );
            if ui.button(label).clicked() {
                state.run(category, tr);
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::LABEL_RESULT));
            let mut shown = state.result.clone().unwrap_or_default();
            ui.add(egui::TextEdit::singleline(&mut shown).interactive(false));
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                ui.label(self.tr.t(keys::APP_SUBTITLE));
            });
        });
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(140.0)
            .show(ctx, |ui| self.ui_nav(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            let tab = self.tab;
            self.ui_category(ui, tab);
        });
    }
}

fn unit_combo(ui: &mut egui::Ui, id: impl std::hash::Hash, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for unit in options {
                ui.selectable_value(value, unit.to_string(), *unit);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(&config::Config::default(), Translator::new("en"))
    }

    #[test]
    fn tabs_start_with_configured_units() {
        let mut cfg = config::Config::default();
        cfg.default_units.length.to = "inch".into();
        cfg.default_category = Category::Length;
        let app = GuiApp::new(&cfg, Translator::new("en"));
        assert_eq!(app.tab, Category::Length);
        assert_eq!(app.tabs[&Category::Length].to, "inch");
        assert_eq!(app.tabs.len(), Category::ALL.len());
    }

    #[test]
    fn convert_button_shows_number() {
        let mut app = app();
        let state = app.tabs.get_mut(&Category::Temperature).expect("tab");
        state.value = "100".into();
        state.from = "celsius".into();
        state.to = "kelvin".into();
        state.run(Category::Temperature, &Translator::new("en"));
        assert_eq!(state.result.as_deref(), Some("373.15"));
    }

    #[test]
    fn convert_button_shows_error_verbatim() {
        let mut app = app();
        let state = app.tabs.get_mut(&Category::Temperature).expect("tab");
        state.value = "25".into();
        state.from = "fahrenheit".into();
        state.to = "kelvin".into();
        state.run(Category::Temperature, &Translator::new("en"));
        assert_eq!(
            state.result.as_deref(),
            Some("❌ Unsupported temperature conversion.")
        );
    }
}
