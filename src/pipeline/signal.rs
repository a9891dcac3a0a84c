//! SignalPipeline: parameters in, stage signals and intermediate frequency out.

use crate::analysis::SpectrumAnalyzer;
use crate::dsp::{filtfilt, linspace, mix, sine_wave, ButterworthDesign, Padding, TransferFunction};
use crate::error::{Result, ResultExt};
use crate::pipeline::stage::{SpectralViews, Stage};
use crate::types::PipelineInput;

/// Samples per run
pub const SAMPLE_COUNT: usize = 500;

/// Length of the time axis in seconds
pub const DURATION_S: f64 = 1.0;

/// Order of the low-pass stage
pub const FILTER_ORDER: usize = 2;

/// Nominal Nyquist frequency of the low-pass design
pub const NYQUIST_HZ: f64 = 0.5;

/// Nominal cutoff of the low-pass design; the filter cuts at `CUTOFF_HZ / NYQUIST_HZ`
pub const CUTOFF_HZ: f64 = 0.2;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// The parameters this output was computed from
    pub input: PipelineInput,
    /// `SAMPLE_COUNT` instants over `[0, DURATION_S]`, endpoints included
    pub time_axis: Vec<f64>,
    /// Sine at the signal frequency
    pub original_signal: Vec<f64>,
    /// Signal times heterodyne, plus the noise term
    pub mixed_signal_with_noise: Vec<f64>,
    /// Mixed signal after the zero-phase low-pass stage
    pub filtered_signal: Vec<f64>,
    /// `|signal - heterodyne|` in Hz
    pub intermediate_frequency_hz: f64,
}

impl PipelineOutput {
    /// Sample rate implied by the time axis
    pub fn sample_rate_hz(&self) -> f64 {
        (self.time_axis.len().saturating_sub(1)) as f64 / DURATION_S
    }

    /// Intermediate frequency with two decimals, as shown next to the plots
    pub fn intermediate_frequency_label(&self) -> String {
        format!("{:.2}", self.intermediate_frequency_hz)
    }

    /// Samples of one stage
    pub fn stage_signal(&self, stage: Stage) -> &[f64] {
        match stage {
            Stage::Original => &self.original_signal,
            Stage::MixedWithNoise => &self.mixed_signal_with_noise,
            Stage::Filtered => &self.filtered_signal,
        }
    }

    /// (time, amplitude) pairs of one stage for plotting
    pub fn time_points(&self, stage: Stage) -> Vec<[f64; 2]> {
        self.time_axis
            .iter()
            .zip(self.stage_signal(stage))
            .map(|(&t, &v)| [t, v])
            .collect()
    }

    /// Magnitude spectra of every stage.
    ///
    /// Each stage is passed through `sin()` before analysis, the way the
    /// spectrum plots of this demonstrator have always been drawn.
    /// Frequencies are in Hz at [`sample_rate_hz`](Self::sample_rate_hz), not on
    /// a 0..1 axis normalized to a sample rate of 2.
    pub fn spectra(&self, analyzer: &mut SpectrumAnalyzer) -> SpectralViews {
        let sample_rate = self.sample_rate_hz();
        let mut view = |stage: Stage| {
            let wrapped: Vec<f64> = self.stage_signal(stage).iter().map(|v| v.sin()).collect();
            analyzer.magnitude_spectrum(&wrapped, sample_rate)
        };

        SpectralViews {
            original: view(Stage::Original),
            mixed_with_noise: view(Stage::MixedWithNoise),
            filtered: view(Stage::Filtered),
        }
    }
}

/// The receiver chain with its low-pass stage already designed
#[derive(Debug, Clone)]
pub struct SignalPipeline {
    filter: TransferFunction,
}

impl SignalPipeline {
    /// Design the fixed low-pass stage
    pub fn new() -> Result<Self> {
        let filter = ButterworthDesign::lowpass(FILTER_ORDER, CUTOFF_HZ / NYQUIST_HZ)
            .context("Failed to design the IF low-pass filter")?;
        Ok(Self { filter })
    }

    /// Coefficients of the low-pass stage
    pub fn filter(&self) -> &TransferFunction {
        &self.filter
    }

    /// Run the receiver chain for one set of parameters
    pub fn compute(&self, input: &PipelineInput) -> Result<PipelineOutput> {
        input.validate()?;

        let signal_hz = f64::from(input.signal_frequency_hz);
        let heterodyne_hz = f64::from(input.heterodyne_frequency_hz);

        let time_axis = linspace(0.0, DURATION_S, SAMPLE_COUNT);
        let original_signal = sine_wave(&time_axis, signal_hz);
        let heterodyne_signal = sine_wave(&time_axis, heterodyne_hz);
        let mixed = mix(&original_signal, &heterodyne_signal);

        // One scalar for the whole run, not per-sample noise
        let noise = input.noise_amplitude() * (signal_hz * SAMPLE_COUNT as f64).sin();
        let mixed_signal_with_noise: Vec<f64> = mixed.iter().map(|v| v + noise).collect();

        let filtered_signal = filtfilt(&self.filter, &mixed_signal_with_noise, Padding::default())
            .context("Failed to filter the mixed signal")?;

        let intermediate_frequency_hz = f64::from(input.intermediate_frequency_hz());

        tracing::debug!(
            signal_hz = input.signal_frequency_hz,
            heterodyne_hz = input.heterodyne_frequency_hz,
            noise_percent = input.noise_amplitude_percent,
            noise,
            intermediate_frequency_hz,
            "Computed receiver pipeline"
        );

        Ok(PipelineOutput {
            input: *input,
            time_axis,
            original_signal,
            mixed_signal_with_noise,
            filtered_signal,
            intermediate_frequency_hz,
        })
    }
}

/// Run the receiver chain once with a freshly designed filter
pub fn compute(input: PipelineInput) -> Result<PipelineOutput> {
    SignalPipeline::new()?.compute(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(fs: u32, fh: u32, noise: u32) -> PipelineOutput {
        compute(PipelineInput {
            signal_frequency_hz: fs,
            heterodyne_frequency_hz: fh,
            noise_amplitude_percent: noise,
        })
        .expect("valid input")
    }

    #[test]
    fn test_intermediate_frequency_examples() {
        assert_eq!(run(15, 90, 20).intermediate_frequency_label(), "75.00");
        assert_eq!(run(30, 60, 60).intermediate_frequency_label(), "30.00");
        assert_eq!(run(1, 120, 20).intermediate_frequency_label(), "119.00");
    }

    #[test]
    fn test_lengths() {
        let out = run(15, 90, 20);
        assert_eq!(out.time_axis.len(), SAMPLE_COUNT);
        assert_eq!(out.original_signal.len(), SAMPLE_COUNT);
        assert_eq!(out.mixed_signal_with_noise.len(), SAMPLE_COUNT);
        assert_eq!(out.filtered_signal.len(), SAMPLE_COUNT);
        assert_eq!(out.time_axis[0], 0.0);
        assert_eq!(out.time_axis[SAMPLE_COUNT - 1], 1.0);
    }

    #[test]
    fn test_noise_is_constant_offset() {
        let out = run(15, 90, 20);
        let expected = 0.2 * (15.0f64 * 500.0).sin();
        for i in 0..SAMPLE_COUNT {
            let product = out.original_signal[i]
                * (2.0 * std::f64::consts::PI * 90.0 * out.time_axis[i]).sin();
            assert!((out.mixed_signal_with_noise[i] - product - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        let pipeline = SignalPipeline::new().unwrap();
        let bad = PipelineInput {
            signal_frequency_hz: 31,
            heterodyne_frequency_hz: 90,
            noise_amplitude_percent: 20,
        };
        assert!(pipeline.compute(&bad).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_filter_is_fixed_second_order() {
        let pipeline = SignalPipeline::new().unwrap();
        assert_eq!(pipeline.filter().order(), FILTER_ORDER);
        assert!((pipeline.filter().dc_gain() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_rate() {
        assert!((run(15, 90, 20).sample_rate_hz() - 499.0).abs() < 1e-12);
    }

    #[test]
    fn test_spectra_have_one_sided_bins() {
        let out = run(15, 90, 20);
        let views = out.spectra(&mut SpectrumAnalyzer::new());
        for stage in Stage::all() {
            assert_eq!(views.get(*stage).len(), SAMPLE_COUNT / 2 + 1);
        }
    }
}
