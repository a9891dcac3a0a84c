//! Digital signal processing primitives
//!
//! This module provides the building blocks of the receiver pipeline:
//! - Sample grids and sine synthesis
//! - Butterworth low-pass design in transfer-function form
//! - Direct-form filtering and zero-phase forward-backward filtering

pub mod butterworth;
pub mod filtfilt;
pub mod waveform;

pub use butterworth::{ButterworthDesign, TransferFunction};
pub use filtfilt::{filtfilt, lfilter, lfilter_zi, PadType, Padding};
pub use waveform::{linspace, mix, sine_wave};
