//! Side panel with parameter fields, the IF readout and display options.

use egui::{Color32, Ui};
use rust_i18n::t;

use super::plot::PlotView;
use super::state::{AppAction, ReceiverState, RecomputeOutcome};
use crate::analysis::WindowFunction;
use crate::i18n::{self, Language};
use crate::types::{FieldValue, ParameterKind};

/// Render the three parameter fields.
///
/// Emits [`AppAction::ParameterEdited`] for every field whose text changed.
pub fn parameter_fields(ui: &mut Ui, state: &mut ReceiverState) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading(t!("params.heading").to_string());
    ui.add_space(4.0);

    for &kind in ParameterKind::all() {
        ui.label(t!(kind.label_key()).to_string());

        let response = ui.add(
            egui::TextEdit::singleline(state.fields.field_mut(kind))
                .desired_width(f32::INFINITY)
                .hint_text(kind.allowed_description()),
        );
        if response.changed() {
            actions.push(AppAction::ParameterEdited(kind));
        }

        match state.fields.parse(kind) {
            FieldValue::Valid(_) => {
                ui.weak(t!("params.allowed", values = kind.allowed_description()).to_string());
            }
            FieldValue::Empty => {
                ui.colored_label(Color32::YELLOW, t!("params.empty").to_string());
            }
            FieldValue::Invalid => {
                ui.colored_label(Color32::RED, t!("params.invalid").to_string())
                    .on_hover_text(
                        t!("params.allowed", values = kind.allowed_description()).to_string(),
                    );
            }
        }
        ui.add_space(6.0);
    }

    actions
}

/// Render the intermediate frequency readout
pub fn intermediate_frequency(ui: &mut Ui, state: &ReceiverState) {
    ui.label(t!("if.label").to_string());
    let value = state
        .output()
        .map(|output| output.intermediate_frequency_label())
        .unwrap_or_else(|| "-".to_string());
    ui.strong(t!("if.value", value = value).to_string());

    if let Some(RecomputeOutcome::SkippedInvalid(reason)) = state.last_outcome() {
        ui.colored_label(
            Color32::from_rgb(255, 120, 120),
            t!("status.skipped", reason = reason).to_string(),
        );
    }
}

/// Render display options: spectrum scale and window, theme and language
pub fn display_options(
    ui: &mut Ui,
    plot_view: &PlotView,
    window: WindowFunction,
    dark_mode: bool,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    let mut db_scale = plot_view.db_scale;
    if ui.checkbox(&mut db_scale, t!("plot.db_scale").to_string()).changed() {
        actions.push(AppAction::SetDbScale(db_scale));
    }

    ui.horizontal(|ui| {
        ui.label(t!("plot.window").to_string());
        let mut selected = window;
        egui::ComboBox::from_id_salt("spectrum_window_selector")
            .selected_text(selected.display_name())
            .width(110.0)
            .show_ui(ui, |ui| {
                for w in WindowFunction::all() {
                    ui.selectable_value(&mut selected, *w, w.display_name());
                }
            });
        if selected != window {
            actions.push(AppAction::SetWindow(selected));
        }
    });

    let mut dark = dark_mode;
    if ui.checkbox(&mut dark, t!("app.dark_mode").to_string()).changed() {
        actions.push(AppAction::SetDarkMode(dark));
    }

    ui.horizontal(|ui| {
        ui.label(t!("app.language").to_string());
        let current = i18n::current_language();
        let mut selected = current;
        egui::ComboBox::from_id_salt("language_selector")
            .selected_text(selected.display_name())
            .width(110.0)
            .show_ui(ui, |ui| {
                for lang in Language::all() {
                    ui.selectable_value(&mut selected, *lang, lang.display_name());
                }
            });
        if selected != current {
            actions.push(AppAction::SetLanguage(selected));
        }
    });

    actions
}
