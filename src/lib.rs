//! # Superhet-RS: Superheterodyne Receiver Demonstrator
//!
//! An interactive demonstrator of the superheterodyne principle. A sine
//! carrier is mixed with a local oscillator, offset by a noise term and
//! passed through a zero-phase Butterworth low-pass stage. Every stage is
//! shown in the time domain and as a magnitude spectrum.
//!
//! ## Architecture
//!
//! - **Pipeline**: Pure computation from [`PipelineInput`] to [`PipelineOutput`]
//! - **DSP**: Butterworth design, `lfilter` and zero-phase `filtfilt`
//! - **Analysis**: Windowed magnitude spectra via rustfft
//! - **Frontend**: Renders the UI using eframe/egui with egui_plot for graphs
//!
//! ## Configuration
//!
//! Start-up defaults are read from `config.toml` under the platform config
//! directory (`dev.superhet.superhet-rs`), or from the file named by the
//! `SUPERHET_CONFIG` environment variable.
//!
//! ## Example
//!
//! ```
//! use superhet_rs::{compute, PipelineInput};
//!
//! let input = PipelineInput::new(15, 90, 20).unwrap();
//! let output = compute(input).unwrap();
//! assert_eq!(output.intermediate_frequency_label(), "75.00");
//! assert_eq!(output.filtered_signal.len(), 500);
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod analysis;
pub mod app;
pub mod config;
pub mod dsp;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use app::SuperhetApp;
pub use config::AppConfig;
pub use error::{Result, SuperhetError};
pub use pipeline::{compute, PipelineOutput, SignalPipeline};
pub use types::PipelineInput;
