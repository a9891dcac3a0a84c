//! Magnitude spectrum analysis module
//!
//! Provides the frequency-domain view of each receiver stage:
//! - One-sided magnitude spectrum of real signals
//! - Window functions (Hann, Hamming, Blackman)
//! - Peak lookup for labelling plots
//!
//! Magnitudes are normalized by the window sum, so a full-scale sine of
//! amplitude `A` that falls exactly on a bin shows up as `A / 2`.

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function applied before the FFT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowFunction {
    /// Rectangular window (no windowing)
    Rectangular,
    /// Hann window
    #[default]
    Hann,
    /// Hamming window (reduced nearest side lobe)
    Hamming,
    /// Blackman window (very low side lobes)
    Blackman,
}

impl WindowFunction {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "Rectangular",
            WindowFunction::Hann => "Hann",
            WindowFunction::Hamming => "Hamming",
            WindowFunction::Blackman => "Blackman",
        }
    }

    /// Get all window functions
    pub fn all() -> &'static [WindowFunction] {
        &[
            WindowFunction::Rectangular,
            WindowFunction::Hann,
            WindowFunction::Hamming,
            WindowFunction::Blackman,
        ]
    }

    /// Symmetric window coefficient at position `i` out of `n` samples
    pub fn coefficient(&self, i: usize, n: usize) -> f64 {
        if n <= 1 {
            return 1.0;
        }
        let x = 2.0 * PI * i as f64 / (n - 1) as f64;

        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hann => 0.5 - 0.5 * x.cos(),
            WindowFunction::Hamming => 0.54 - 0.46 * x.cos(),
            // Exactly 0 at the ends, but rounding can leave -ε
            WindowFunction::Blackman => (0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos()).max(0.0),
        }
    }

    /// Generate window coefficients for n samples
    pub fn generate(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.coefficient(i, n)).collect()
    }
}

/// One-sided magnitude spectrum
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum {
    /// Frequency bins (Hz)
    pub frequencies: Vec<f64>,
    /// Magnitude values (linear)
    pub magnitudes: Vec<f64>,
    /// Sample rate used for computation
    pub sample_rate: f64,
    /// Number of input samples
    pub sample_count: usize,
    /// Frequency resolution (Hz per bin)
    pub frequency_resolution: f64,
}

impl MagnitudeSpectrum {
    fn empty(sample_rate: f64) -> Self {
        Self {
            frequencies: Vec::new(),
            magnitudes: Vec::new(),
            sample_rate,
            sample_count: 0,
            frequency_resolution: 0.0,
        }
    }

    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Whether the spectrum has no bins
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Find the peak frequency and its magnitude
    pub fn peak(&self) -> Option<(f64, f64)> {
        let (idx, &max_mag) = self
            .magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))?;

        Some((self.frequencies[idx], max_mag))
    }

    /// Peak frequency ignoring bins below `min_hz` (skips a DC offset)
    pub fn peak_above(&self, min_hz: f64) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .filter(|(f, _)| **f >= min_hz)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(&f, &m)| (f, m))
    }

    /// Magnitude at a specific bin index
    pub fn magnitude_at(&self, bin: usize) -> Option<f64> {
        self.magnitudes.get(bin).copied()
    }

    /// Magnitude of the bin closest to `frequency_hz`
    pub fn magnitude_near(&self, frequency_hz: f64) -> Option<f64> {
        if self.is_empty() || self.frequency_resolution <= 0.0 {
            return None;
        }
        let bin = (frequency_hz / self.frequency_resolution).round();
        if bin < 0.0 {
            return None;
        }
        self.magnitude_at(bin as usize)
    }

    /// Get data points for plotting (frequency, magnitude pairs)
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(self.magnitudes.iter())
            .map(|(&f, &m)| [f, m])
            .collect()
    }

    /// Get data points for plotting in dB scale
    pub fn plot_points_db(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(self.magnitudes.iter())
            .map(|(&f, &m)| [f, if m > 1e-10 { 20.0 * m.log10() } else { -200.0 }])
            .collect()
    }
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrumConfig {
    /// Window function to use
    pub window: WindowFunction,
    /// Zero-pad to this many points when longer than the input
    pub pad_to: Option<usize>,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            window: WindowFunction::Hann,
            pad_to: None,
        }
    }
}

impl SpectrumConfig {
    /// Set window function
    pub fn window(mut self, window: WindowFunction) -> Self {
        self.window = window;
        self
    }
}

/// Computes magnitude spectra, reusing FFT plans between calls
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
    config: SpectrumConfig,
}

impl std::fmt::Debug for SpectrumAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectrumAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SpectrumAnalyzer {
    /// Create a new analyzer with default config
    pub fn new() -> Self {
        Self::with_config(SpectrumConfig::default())
    }

    /// Create analyzer with specific config
    pub fn with_config(config: SpectrumConfig) -> Self {
        Self {
            planner: FftPlanner::new(),
            config,
        }
    }

    /// Get current config
    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    /// Set config
    pub fn set_config(&mut self, config: SpectrumConfig) {
        self.config = config;
    }

    /// Compute the one-sided magnitude spectrum of real samples
    ///
    /// # Arguments
    /// * `samples` - Time-domain samples
    /// * `sample_rate` - Sample rate in Hz
    pub fn magnitude_spectrum(&mut self, samples: &[f64], sample_rate: f64) -> MagnitudeSpectrum {
        let n = samples.len();
        if n == 0 {
            return MagnitudeSpectrum::empty(sample_rate);
        }

        let fft_size = self.config.pad_to.map_or(n, |p| p.max(n));

        let window = self.config.window.generate(n);
        let window_sum: f64 = window.iter().sum();

        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .zip(&window)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();
        buffer.resize(fft_size, Complex::new(0.0, 0.0));

        let fft = self.planner.plan_fft_forward(fft_size);
        fft.process(&mut buffer);

        let freq_resolution = sample_rate / fft_size as f64;
        let num_bins = fft_size / 2 + 1;

        let frequencies: Vec<f64> = (0..num_bins).map(|i| i as f64 * freq_resolution).collect();
        let magnitudes: Vec<f64> = buffer
            .iter()
            .take(num_bins)
            .map(|c| c.norm() / window_sum)
            .collect();

        MagnitudeSpectrum {
            frequencies,
            magnitudes,
            sample_rate,
            sample_count: n,
            frequency_resolution: freq_resolution,
        }
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
