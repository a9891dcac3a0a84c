//! Plot rendering module using egui_plot
//!
//! Each receiver stage gets one row with two plots:
//! - **Time domain**: amplitude over the one second time axis
//! - **Frequency domain**: magnitude spectrum, linear or dB
//!
//! # Main Types
//!
//! - [`PlotView`] - Styling shared by every plot

use crate::analysis::MagnitudeSpectrum;
use crate::config::UiConfig;
use crate::pipeline::{PipelineOutput, SpectralViews, Stage};
use egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use rust_i18n::t;

/// Height of a single plot in logical pixels
const PLOT_HEIGHT: f32 = 160.0;

/// Plot view configuration
#[derive(Debug, Clone)]
pub struct PlotView {
    /// Whether to show grid lines
    pub show_grid: bool,
    /// Line width for all plots
    pub line_width: f32,
    /// Whether spectra are drawn in dB
    pub db_scale: bool,
}

impl Default for PlotView {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl PlotView {
    /// Create a plot view from UI configuration
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            show_grid: config.show_grid,
            line_width: config.line_width,
            db_scale: config.spectrum_db_scale,
        }
    }

    /// Line color of a stage
    pub fn stage_color(stage: Stage) -> Color32 {
        match stage {
            Stage::Original => Color32::from_rgb(100, 150, 255),
            Stage::MixedWithNoise => Color32::from_rgb(255, 140, 80),
            Stage::Filtered => Color32::from_rgb(110, 200, 120),
        }
    }

    /// Render the time-domain plot of a stage
    pub fn render_time(&self, ui: &mut Ui, output: &PipelineOutput, stage: Stage) {
        ui.label(RichText::new(t!(stage.title_key()).to_string()).strong());

        let plot = Plot::new(format!("{}_time_plot", stage.id()))
            .height(PLOT_HEIGHT)
            .show_axes(true)
            .show_grid(self.show_grid)
            .x_axis_label(t!("plot.time").to_string())
            .y_axis_label(t!("plot.amplitude").to_string())
            .allow_scroll(false);

        plot.show(ui, |plot_ui| {
            let line = Line::new(
                t!(stage.title_key()).to_string(),
                PlotPoints::from(output.time_points(stage)),
            )
            .color(Self::stage_color(stage))
            .width(self.line_width);
            plot_ui.line(line);
        });
    }

    /// Render the magnitude spectrum of a stage
    pub fn render_spectrum(&self, ui: &mut Ui, spectrum: &MagnitudeSpectrum, stage: Stage) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(t!(stage.spectrum_title_key()).to_string()).strong());
            if let Some((freq, _)) = spectrum.peak_above(spectrum.frequency_resolution) {
                ui.separator();
                ui.weak(t!("plot.peak", freq = format!("{:.1}", freq)).to_string());
            }
        });

        let points = if self.db_scale {
            spectrum.plot_points_db()
        } else {
            spectrum.plot_points()
        };

        let plot = Plot::new(format!("{}_spectrum_plot", stage.id()))
            .height(PLOT_HEIGHT)
            .show_axes(true)
            .show_grid(self.show_grid)
            .x_axis_label(t!("plot.frequency").to_string())
            .y_axis_label(t!("plot.amplitude").to_string())
            .allow_scroll(false);

        plot.show(ui, |plot_ui| {
            let line = Line::new(
                t!(stage.spectrum_title_key()).to_string(),
                PlotPoints::from(points),
            )
            .color(Self::stage_color(stage))
            .width(self.line_width);
            plot_ui.line(line);
        });
    }

    /// Render every stage, one row per stage
    pub fn render_stages(
        &self,
        ui: &mut Ui,
        output: &PipelineOutput,
        spectra: &SpectralViews,
    ) {
        for &stage in Stage::all() {
            ui.columns(2, |columns| {
                self.render_time(&mut columns[0], output, stage);
                self.render_spectrum(&mut columns[1], spectra.get(stage), stage);
            });
            ui.add_space(6.0);
        }
    }
}
