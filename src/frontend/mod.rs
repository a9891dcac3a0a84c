//! Frontend module for egui UI
//!
//! This module provides the single window of the demonstrator using
//! eframe/egui. Every edit of a parameter field recomputes the receiver
//! pipeline synchronously on the UI thread and the next frame renders the
//! new plots.
//!
//! # Layout
//!
//! - Left side panel: parameter fields, intermediate frequency, options
//! - Central panel: one row per stage, time plot left and spectrum right
//! - Optional window: receiver block diagram
//!
//! # Main Types
//!
//! - [`SuperhetApp`] - Main application state implementing [`eframe::App`]
//! - [`ReceiverState`] - Parameter fields and the latest pipeline results
//! - [`PlotView`] - Plot styling and rendering

pub mod diagram;
mod panels;
mod plot;
pub mod state;

pub use plot::PlotView;
pub use state::{AppAction, ParameterFields, ReceiverState, RecomputeOutcome};

use crate::config::AppConfig;
use crate::error::Result;
use crate::i18n;
use rust_i18n::t;

/// Main application state
#[derive(Debug)]
pub struct SuperhetApp {
    receiver: ReceiverState,
    plot_view: PlotView,
    dark_mode: bool,
    show_diagram: bool,
}

impl SuperhetApp {
    /// Create the application from configuration.
    ///
    /// Runs the pipeline once so the first frame already has plots.
    pub fn new(config: &AppConfig) -> Result<Self> {
        i18n::set_language(config.ui.language);

        let fields = ParameterFields::from_config(&config.parameters);
        let receiver = ReceiverState::new(fields, config.ui.spectrum_window)?;

        Ok(Self {
            receiver,
            plot_view: PlotView::from_config(&config.ui),
            dark_mode: config.ui.dark_mode,
            show_diagram: false,
        })
    }

    /// Receiver state (fields and latest results)
    pub fn receiver(&self) -> &ReceiverState {
        &self.receiver
    }

    /// Whether the block diagram window is open
    pub fn is_diagram_open(&self) -> bool {
        self.show_diagram
    }

    /// Whether dark visuals are selected
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Current plot styling
    pub fn plot_view(&self) -> &PlotView {
        &self.plot_view
    }

    /// Apply an action emitted by a panel
    pub fn handle_action(&mut self, action: AppAction) {
        tracing::trace!("Handling {:?}", action);
        match action {
            AppAction::ParameterEdited(kind) => {
                tracing::debug!("{} edited", kind.name());
                self.receiver.recompute();
            }
            AppAction::SetLanguage(lang) => {
                tracing::info!("Switching language to {}", lang.code());
                i18n::set_language(lang);
            }
            AppAction::SetDarkMode(dark) => self.dark_mode = dark,
            AppAction::SetDbScale(db) => self.plot_view.db_scale = db,
            AppAction::SetWindow(window) => self.receiver.set_window(window),
            AppAction::ToggleDiagram => self.show_diagram = !self.show_diagram,
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        if ctx.style().visuals.dark_mode != visuals.dark_mode {
            ctx.set_visuals(visuals);
        }
    }
}

impl eframe::App for SuperhetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);

        let mut actions = Vec::new();

        egui::SidePanel::left("parameters_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                actions.extend(panels::parameter_fields(ui, &mut self.receiver));
                ui.separator();
                panels::intermediate_frequency(ui, &self.receiver);
                ui.separator();
                if ui.button(t!("diagram.button").to_string()).clicked() {
                    actions.push(AppAction::ToggleDiagram);
                }
                ui.separator();
                actions.extend(panels::display_options(
                    ui,
                    &self.plot_view,
                    self.receiver.window(),
                    self.dark_mode,
                ));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match (self.receiver.output(), self.receiver.spectra()) {
                    (Some(output), Some(spectra)) => {
                        self.plot_view.render_stages(ui, output, spectra);
                    }
                    _ => {
                        ui.centered_and_justified(|ui| {
                            ui.label(t!("params.empty").to_string());
                        });
                    }
                }
            });
        });

        if self.show_diagram {
            diagram::show(ctx, &mut self.show_diagram);
        }

        for action in actions {
            self.handle_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::WindowFunction;
    use crate::types::ParameterKind;

    fn app() -> SuperhetApp {
        SuperhetApp::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_new_computes_initial_output() {
        let app = app();
        let output = app.receiver().output().expect("initial output");
        assert_eq!(output.intermediate_frequency_label(), "75.00");
        assert!(!app.is_diagram_open());
    }

    #[test]
    fn test_toggle_actions() {
        let mut app = app();
        app.handle_action(AppAction::ToggleDiagram);
        assert!(app.is_diagram_open());
        app.handle_action(AppAction::ToggleDiagram);
        assert!(!app.is_diagram_open());

        app.handle_action(AppAction::SetDarkMode(false));
        assert!(!app.dark_mode());
        app.handle_action(AppAction::SetDbScale(true));
        assert!(app.plot_view().db_scale);
        app.handle_action(AppAction::SetWindow(WindowFunction::Blackman));
        assert_eq!(app.receiver().window(), WindowFunction::Blackman);
    }

    #[test]
    fn test_parameter_edit_recomputes() {
        let mut app = app();
        app.receiver.fields.signal = "1".to_string();
        app.receiver.fields.heterodyne = "120".to_string();
        app.handle_action(AppAction::ParameterEdited(ParameterKind::SignalFrequency));
        let output = app.receiver().output().unwrap();
        assert_eq!(output.intermediate_frequency_label(), "119.00");
    }
}
