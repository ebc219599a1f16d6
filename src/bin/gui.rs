#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};
use syringe_dose_calculator::{
    app, config, i18n,
    i18n::keys,
    logger,
    presets::{DOSE_MG_OPTIONS, VIAL_MG_OPTIONS, WATER_ML_OPTIONS},
    report,
    scale::build_ticks,
    session::DoseForm,
    syringe::SyringeProfile,
};

const SCALE_TOP: f32 = 14.0;
const LABEL_GAP: f32 = 4.0;
const FILL_COLOR: egui::Color32 = egui::Color32::from_rgb(124, 196, 244);
const OVER_COLOR: egui::Color32 = egui::Color32::from_rgb(242, 156, 156);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 40, 40);
const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 110, 0);

#[derive(Debug, Parser)]
#[command(name = "syringe_dose_calculator", version)]
struct GuiArgs {
    /// 언어 코드(auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 디버그 로그 출력
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logger::init_logger(args.verbose);

    let app_cfg = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("설정을 읽지 못해 기본값을 사용합니다: {err}");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.lang_pack_dir.as_deref());

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(720.0, 640.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let title = tr.t(keys::APP_TITLE).to_string();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font fallback: {e}");
            }
            Box::new(GuiApp::new(app_cfg, tr))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾는다. 없으면 egui 기본 글꼴을 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(name).to_string_lossy().into_owned());
        }
    }
    for cand in &candidates {
        if Path::new(cand).exists() {
            let bytes = fs::read(cand).map_err(|e| format!("Failed to read font ({cand}): {e}"))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; Korean labels may not render.".into())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    form: DoseForm,
    show_settings: bool,
    settings_lang: String,
    settings_decimals: u32,
    settings_syringe: SyringeProfile,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, tr: i18n::Translator) -> Self {
        let form = app::form_from_config(&config);
        Self {
            settings_lang: config.language.clone(),
            settings_decimals: config.decimal_places,
            settings_syringe: config.default_syringe,
            config,
            tr,
            form,
            show_settings: false,
            status: None,
        }
    }

    fn apply_settings(&mut self) -> Result<(), config::ConfigError> {
        self.config.language = self.settings_lang.trim().to_string();
        self.config.decimal_places = self.settings_decimals;
        self.config.default_syringe = self.settings_syringe;
        self.form.set_decimal_places(self.settings_decimals);
        self.config.save()
    }

    fn export_svg(&mut self) {
        let picked = FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name("syringe_scale.svg")
            .save_file();
        let Some(path) = picked else {
            return;
        };
        self.status = Some(match app::export_scale_svg(&self.form, path) {
            Ok(saved) => format!("{} {}", self.tr.t(keys::SVG_SAVED), saved.display()),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_INPUT_HEADING));
        egui::Grid::new("dose_inputs")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::FIELD_VIAL));
                ui.vertical(|ui| {
                    if let Some(raw) = text_field(ui, self.form.vial_text()) {
                        self.form.set_vial_text(raw);
                    }
                    ui.horizontal_wrapped(|ui| {
                        for mg in VIAL_MG_OPTIONS {
                            if ui.button(format!("{mg}")).clicked() {
                                self.form.select_vial_preset(mg);
                            }
                        }
                    });
                });
                ui.end_row();

                ui.label(tr.t(keys::FIELD_WATER));
                ui.vertical(|ui| {
                    if let Some(raw) = text_field(ui, self.form.water_text()) {
                        self.form.set_water_text(raw);
                    }
                    ui.horizontal_wrapped(|ui| {
                        for ml in WATER_ML_OPTIONS {
                            if ui.button(format!("{ml}")).clicked() {
                                self.form.select_water_preset(ml);
                            }
                        }
                    });
                });
                ui.end_row();

                ui.label(tr.t(keys::FIELD_DOSE));
                ui.vertical(|ui| {
                    if let Some(raw) = text_field(ui, self.form.dose_text()) {
                        self.form.set_dose_text(raw);
                    }
                    ui.horizontal_wrapped(|ui| {
                        for mg in DOSE_MG_OPTIONS {
                            if ui.button(format!("{mg}")).clicked() {
                                self.form.select_dose_preset(mg);
                            }
                        }
                    });
                });
                ui.end_row();

                ui.label(tr.t(keys::FIELD_SYRINGE));
                let mut selected = self.form.syringe();
                egui::ComboBox::from_id_source("syringe_combo")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for s in SyringeProfile::ALL {
                            ui.selectable_value(&mut selected, s, s.label());
                        }
                    });
                if selected != self.form.syringe() {
                    self.form.select_syringe(selected);
                }
                ui.end_row();
            });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let snapshot = self.form.snapshot().clone();
        ui.heading(tr.t(keys::GUI_RESULT_HEADING));
        egui::Grid::new("dose_results")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in report::result_rows(&tr, &snapshot) {
                    ui.label(label);
                    ui.strong(value);
                    ui.end_row();
                }
            });
        if let Some(line) = report::summary_line(&tr, &snapshot) {
            ui.label(line);
        }
        for advisory in &snapshot.advisories {
            ui.colored_label(
                WARN_COLOR,
                report::advisory_message(&tr, advisory, self.form.decimal_places()),
            );
        }
    }

    fn ui_scale(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_SCALE_HEADING));
        let geometry = *self.form.geometry();
        let max_units = self.form.syringe().max_units();
        let units = self.form.snapshot().result.units;
        let marker = self.form.snapshot().marker_offset;

        let total = geometry.total_width() as f32;
        if !total.is_finite() || total <= 0.0 {
            return;
        }
        let k = (ui.available_width() / total).min(1.0);
        let barrel_h = geometry.barrel_height as f32 * k;
        let font = geometry.label_font_size as f32;
        let height = SCALE_TOP * 2.0 + barrel_h.max(geometry.major_tick_height as f32 * k + LABEL_GAP + font);
        let (response, painter) = ui.allocate_painter(
            egui::vec2(geometry.total_width() as f32 * k, height),
            egui::Sense::hover(),
        );
        let origin = response.rect.left_top();
        let to_x = |x: f64| origin.x + x as f32 * k;
        let top = origin.y + SCALE_TOP;
        let ink = ui.visuals().text_color();

        let track = egui::Rect::from_min_max(
            egui::pos2(to_x(geometry.padding), top),
            egui::pos2(to_x(geometry.padding + geometry.track_width), top + barrel_h),
        );
        if let Some(x) = marker {
            let over = units.is_some_and(|u| u > f64::from(max_units));
            let fill = egui::Rect::from_min_max(track.min, egui::pos2(to_x(x), track.max.y));
            painter.rect_filled(fill, 0.0, if over { OVER_COLOR } else { FILL_COLOR });
        }
        painter.rect_stroke(track, 4.0, egui::Stroke::new(1.5, ink));

        for tick in build_ticks(max_units) {
            let Some(x) = geometry.position_of(f64::from(tick.unit_value), max_units) else {
                continue;
            };
            let x = to_x(x);
            let len = geometry.tick_height(tick.class) as f32 * k;
            painter.line_segment(
                [egui::pos2(x, top), egui::pos2(x, top + len)],
                egui::Stroke::new(geometry.tick_stroke(tick.class) as f32, ink),
            );
            if tick.labeled {
                painter.text(
                    egui::pos2(x, top + geometry.major_tick_height as f32 * k + LABEL_GAP),
                    egui::Align2::CENTER_TOP,
                    tick.unit_value.to_string(),
                    egui::FontId::proportional(font),
                    ink,
                );
            }
        }

        if let Some(x) = marker {
            let x = to_x(x);
            painter.line_segment(
                [egui::pos2(x, top - 4.0), egui::pos2(x, top + barrel_h + 4.0)],
                egui::Stroke::new(2.5, MARKER_COLOR),
            );
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut open = self.show_settings;
        let mut save_clicked = false;
        egui::Window::new(tr.t(keys::SETTINGS_HEADING).trim())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                        egui::ComboBox::from_id_source("lang_combo")
                            .selected_text(self.settings_lang.clone())
                            .show_ui(ui, |ui| {
                                for code in ["auto", "ko", "en"] {
                                    ui.selectable_value(
                                        &mut self.settings_lang,
                                        code.to_string(),
                                        code,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(tr.t(keys::SETTINGS_ACTIVE_LANGUAGE));
                        ui.label(tr.language_code());
                        ui.end_row();

                        ui.label(tr.t(keys::SETTINGS_DECIMALS));
                        ui.add(egui::DragValue::new(&mut self.settings_decimals).clamp_range(0..=6));
                        ui.end_row();

                        ui.label(tr.t(keys::SETTINGS_DEFAULT_SYRINGE));
                        egui::ComboBox::from_id_source("default_syringe_combo")
                            .selected_text(self.settings_syringe.label())
                            .show_ui(ui, |ui| {
                                for s in SyringeProfile::ALL {
                                    ui.selectable_value(&mut self.settings_syringe, s, s.label());
                                }
                            });
                        ui.end_row();
                    });
                ui.small(tr.t(keys::SETTINGS_RESTART_NOTE));
                if ui.button(tr.t(keys::SETTINGS_SAVE_BUTTON)).clicked() {
                    save_clicked = true;
                }
            });
        if save_clicked {
            self.status = Some(match self.apply_settings() {
                Ok(()) => tr.t(keys::SETTINGS_SAVED).to_string(),
                Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            });
            open = false;
        }
        self.show_settings = open;
    }
}

/// 편집 버퍼는 매 프레임 폼의 문자열에서 새로 만든다. 바뀐 경우에만 새 값을 돌려준다.
fn text_field(ui: &mut egui::Ui, current: &str) -> Option<String> {
    let mut buf = current.to_string();
    ui.text_edit_singleline(&mut buf).changed().then_some(buf)
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t(keys::SVG_EXPORT_BUTTON)).clicked() {
                    self.export_svg();
                }
                if ui.button(tr.t(keys::SETTINGS_HEADING).trim()).clicked() {
                    self.show_settings = true;
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(tr.t(keys::GUI_DISCLAIMER));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.small(status.as_str());
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_inputs(ui);
                ui.add_space(12.0);
                ui.separator();
                self.ui_results(ui);
                ui.add_space(12.0);
                ui.separator();
                self.ui_scale(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syringe_dose_calculator::dose::DoseAdvisory;
    use syringe_dose_calculator::format::PLACEHOLDER;

    fn gui() -> GuiApp {
        GuiApp::new(config::Config::default(), i18n::Translator::new("en"))
    }

    #[test]
    fn presets_fill_the_form_text() {
        let mut app = gui();
        app.form.select_vial_preset(15.0);
        app.form.select_water_preset(3.0);
        app.form.select_dose_preset(0.25);
        assert_eq!(app.form.vial_text(), "15");
        assert_eq!(app.form.water_text(), "3");
        assert_eq!(app.form.dose_text(), "0.25");
        assert_eq!(app.form.snapshot().display.units, "5");
    }

    #[test]
    fn typing_after_a_preset_edits_the_same_text() {
        let mut app = gui();
        app.form.select_vial_preset(10.0);
        app.form.select_water_preset(2.0);
        app.form.select_dose_preset(0.2);
        // 입력 칸은 폼 문자열을 그대로 이어서 편집한다.
        let edited = format!("{}5", app.form.dose_text());
        app.form.set_dose_text(edited);
        assert_eq!(app.form.dose_text(), "0.25");
        assert_eq!(app.form.snapshot().display.units, "5");
    }

    #[test]
    fn starts_empty_with_placeholders() {
        let app = gui();
        assert_eq!(app.form.syringe(), SyringeProfile::U100);
        assert_eq!(app.form.snapshot().display.volume, PLACEHOLDER);
    }

    #[test]
    fn default_syringe_from_config_drives_advisories() {
        let cfg = config::Config {
            default_syringe: SyringeProfile::U30,
            ..config::Config::default()
        };
        let mut app = GuiApp::new(cfg, i18n::Translator::new("en"));
        app.form.select_vial_preset(5.0);
        app.form.select_water_preset(1.0);
        app.form.select_dose_preset(2.0);
        assert_eq!(
            app.form.snapshot().advisories,
            vec![DoseAdvisory::ExceedsCapacity {
                units: 40.0,
                max_units: 30
            }]
        );
    }
}
