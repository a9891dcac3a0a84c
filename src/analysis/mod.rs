//! Analysis module for signal processing
//!
//! This module provides frequency-domain views of the receiver stages:
//! - Magnitude spectrum computation
//! - Window functions
//! - Peak lookup

pub mod spectrum;

pub use spectrum::{MagnitudeSpectrum, SpectrumAnalyzer, SpectrumConfig, WindowFunction};
