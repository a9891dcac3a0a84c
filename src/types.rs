//! Core data types for the superheterodyne demonstrator
//!
//! This module contains the pipeline's input parameters, the domain each of
//! them is restricted to, and the parsing used by the text fields that feed
//! them.
//!
//! # Main Types
//!
//! - [`ParameterKind`] - One of the three user-editable parameters
//! - [`FieldValue`] - Result of parsing a text field for a parameter
//! - [`PipelineInput`] - A validated parameter triple
//!
//! # Parameter Domains
//!
//! | Parameter             | Allowed values         |
//! |-----------------------|------------------------|
//! | Signal frequency      | 1-30 Hz                |
//! | Heterodyne frequency  | 60-90, 100, 110, 120 Hz|
//! | Noise amplitude       | 20-60 %                |

use crate::error::{Result, SuperhetError};
use serde::{Deserialize, Serialize};

/// Default signal frequency shown at startup (Hz)
pub const DEFAULT_SIGNAL_FREQUENCY_HZ: u32 = 15;

/// Default heterodyne frequency shown at startup (Hz)
pub const DEFAULT_HETERODYNE_FREQUENCY_HZ: u32 = 90;

/// Default noise amplitude shown at startup (percent)
pub const DEFAULT_NOISE_AMPLITUDE_PERCENT: u32 = 20;

/// The three parameters a user can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Frequency of the received signal
    SignalFrequency,
    /// Frequency of the local oscillator
    HeterodyneFrequency,
    /// Amplitude of the additive noise term, in percent
    NoiseAmplitude,
}

impl ParameterKind {
    /// Get all parameter kinds in display order
    pub fn all() -> &'static [ParameterKind] {
        &[
            ParameterKind::SignalFrequency,
            ParameterKind::HeterodyneFrequency,
            ParameterKind::NoiseAmplitude,
        ]
    }

    /// Name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::SignalFrequency => "signal frequency",
            ParameterKind::HeterodyneFrequency => "heterodyne frequency",
            ParameterKind::NoiseAmplitude => "noise amplitude",
        }
    }

    /// Translation key of the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            ParameterKind::SignalFrequency => "params.signal_frequency",
            ParameterKind::HeterodyneFrequency => "params.heterodyne_frequency",
            ParameterKind::NoiseAmplitude => "params.noise_amplitude",
        }
    }

    /// Human readable description of the allowed values
    pub fn allowed_description(&self) -> &'static str {
        match self {
            ParameterKind::SignalFrequency => "1-30",
            ParameterKind::HeterodyneFrequency => "60-90, 100, 110, 120",
            ParameterKind::NoiseAmplitude => "20-60",
        }
    }

    /// Default value used when nothing else is configured
    pub fn default_value(&self) -> u32 {
        match self {
            ParameterKind::SignalFrequency => DEFAULT_SIGNAL_FREQUENCY_HZ,
            ParameterKind::HeterodyneFrequency => DEFAULT_HETERODYNE_FREQUENCY_HZ,
            ParameterKind::NoiseAmplitude => DEFAULT_NOISE_AMPLITUDE_PERCENT,
        }
    }

    /// Check whether a value lies in this parameter's domain
    pub fn allows(&self, value: u32) -> bool {
        match self {
            ParameterKind::SignalFrequency => (1..=30).contains(&value),
            ParameterKind::HeterodyneFrequency => {
                (60..=90).contains(&value) || matches!(value, 100 | 110 | 120)
            }
            ParameterKind::NoiseAmplitude => (20..=60).contains(&value),
        }
    }

    /// Return the value unchanged if allowed, otherwise an `InvalidParameter` error
    pub fn validate(&self, value: u32) -> Result<u32> {
        if self.allows(value) {
            Ok(value)
        } else {
            Err(SuperhetError::InvalidParameter {
                parameter: self.name(),
                value,
                allowed: self.allowed_description(),
            })
        }
    }

    /// Parse the contents of a text field for this parameter.
    ///
    /// Only plain decimal digits without a leading zero are accepted,
    /// surrounding whitespace is ignored.
    pub fn parse_field(&self, text: &str) -> FieldValue {
        let text = text.trim();
        if text.is_empty() {
            return FieldValue::Empty;
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) || text.starts_with('0') {
            return FieldValue::Invalid;
        }
        match text.parse::<u32>() {
            Ok(value) if self.allows(value) => FieldValue::Valid(value),
            _ => FieldValue::Invalid,
        }
    }
}

/// Outcome of parsing a single text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// The field is empty; the caller should skip recomputation
    Empty,
    /// The field holds a value in the parameter's domain
    Valid(u32),
    /// The field holds text that is not an allowed value
    Invalid,
}

/// Parameters of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineInput {
    /// Signal frequency in Hz (1-30)
    pub signal_frequency_hz: u32,
    /// Local oscillator frequency in Hz (60-90, 100, 110, 120)
    pub heterodyne_frequency_hz: u32,
    /// Noise amplitude in percent (20-60)
    pub noise_amplitude_percent: u32,
}

impl Default for PipelineInput {
    fn default() -> Self {
        Self {
            signal_frequency_hz: DEFAULT_SIGNAL_FREQUENCY_HZ,
            heterodyne_frequency_hz: DEFAULT_HETERODYNE_FREQUENCY_HZ,
            noise_amplitude_percent: DEFAULT_NOISE_AMPLITUDE_PERCENT,
        }
    }
}

impl PipelineInput {
    /// Create a validated input
    pub fn new(
        signal_frequency_hz: u32,
        heterodyne_frequency_hz: u32,
        noise_amplitude_percent: u32,
    ) -> Result<Self> {
        let input = Self {
            signal_frequency_hz,
            heterodyne_frequency_hz,
            noise_amplitude_percent,
        };
        input.validate()?;
        Ok(input)
    }

    /// Build an input from raw text fields.
    ///
    /// Returns `None` when any field is empty, mirroring the UI rule that an
    /// empty field skips recomputation. Non-empty fields that do not parse to
    /// an allowed value produce an error for the first offending parameter.
    pub fn from_fields(signal: &str, heterodyne: &str, noise: &str) -> Option<Result<Self>> {
        let texts = [signal, heterodyne, noise];
        let mut values = [0u32; 3];

        for (slot, (kind, text)) in ParameterKind::all().iter().zip(texts).enumerate() {
            match kind.parse_field(text) {
                FieldValue::Empty => return None,
                FieldValue::Valid(v) => values[slot] = v,
                FieldValue::Invalid => {
                    // Non-numeric text is reported as 0
                    let value = text.trim().parse::<u32>().unwrap_or(0);
                    return Some(Err(SuperhetError::InvalidParameter {
                        parameter: kind.name(),
                        value,
                        allowed: kind.allowed_description(),
                    }));
                }
            }
        }

        Some(Self::new(values[0], values[1], values[2]))
    }

    /// Check every field against its domain
    pub fn validate(&self) -> Result<()> {
        ParameterKind::SignalFrequency.validate(self.signal_frequency_hz)?;
        ParameterKind::HeterodyneFrequency.validate(self.heterodyne_frequency_hz)?;
        ParameterKind::NoiseAmplitude.validate(self.noise_amplitude_percent)?;
        Ok(())
    }

    /// Noise amplitude as a fraction (percent / 100)
    pub fn noise_amplitude(&self) -> f64 {
        f64::from(self.noise_amplitude_percent) / 100.0
    }

    /// Absolute difference between signal and heterodyne frequencies
    pub fn intermediate_frequency_hz(&self) -> u32 {
        self.signal_frequency_hz.abs_diff(self.heterodyne_frequency_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_frequency_domain() {
        let kind = ParameterKind::SignalFrequency;
        assert!(!kind.allows(0));
        assert!(kind.allows(1));
        assert!(kind.allows(30));
        assert!(!kind.allows(31));
    }

    #[test]
    fn test_heterodyne_frequency_domain() {
        let kind = ParameterKind::HeterodyneFrequency;
        assert!(!kind.allows(59));
        assert!(kind.allows(60));
        assert!(kind.allows(90));
        assert!(!kind.allows(91));
        assert!(!kind.allows(95));
        assert!(kind.allows(100));
        assert!(!kind.allows(105));
        assert!(kind.allows(110));
        assert!(kind.allows(120));
        assert!(!kind.allows(130));
    }

    #[test]
    fn test_noise_amplitude_domain() {
        let kind = ParameterKind::NoiseAmplitude;
        assert!(!kind.allows(19));
        assert!(kind.allows(20));
        assert!(kind.allows(45));
        assert!(kind.allows(60));
        assert!(!kind.allows(61));
    }

    #[test]
    fn test_parse_field() {
        let kind = ParameterKind::SignalFrequency;
        assert_eq!(kind.parse_field(""), FieldValue::Empty);
        assert_eq!(kind.parse_field("   "), FieldValue::Empty);
        assert_eq!(kind.parse_field("15"), FieldValue::Valid(15));
        assert_eq!(kind.parse_field(" 7 "), FieldValue::Valid(7));
        assert_eq!(kind.parse_field("07"), FieldValue::Invalid);
        assert_eq!(kind.parse_field("0"), FieldValue::Invalid);
        assert_eq!(kind.parse_field("-3"), FieldValue::Invalid);
        assert_eq!(kind.parse_field("1.5"), FieldValue::Invalid);
        assert_eq!(kind.parse_field("abc"), FieldValue::Invalid);
        assert_eq!(kind.parse_field("99999999999999"), FieldValue::Invalid);
    }

    #[test]
    fn test_from_fields_empty_skips() {
        assert!(PipelineInput::from_fields("", "90", "20").is_none());
        assert!(PipelineInput::from_fields("15", "", "20").is_none());
        assert!(PipelineInput::from_fields("15", "90", "").is_none());
    }

    #[test]
    fn test_from_fields_valid() {
        let input = PipelineInput::from_fields("15", "90", "20")
            .expect("fields are non-empty")
            .expect("fields are valid");
        assert_eq!(input, PipelineInput::default());
    }

    #[test]
    fn test_from_fields_invalid_reports_parameter() {
        let err = PipelineInput::from_fields("15", "95", "20")
            .expect("fields are non-empty")
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("heterodyne frequency"));
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(PipelineInput::new(0, 90, 20).is_err());
        assert!(PipelineInput::new(15, 91, 20).is_err());
        assert!(PipelineInput::new(15, 90, 61).is_err());
        assert!(PipelineInput::new(30, 120, 60).is_ok());
    }

    #[test]
    fn test_intermediate_frequency() {
        let input = PipelineInput::new(1, 120, 20).unwrap();
        assert_eq!(input.intermediate_frequency_hz(), 119);
        assert!((input.noise_amplitude() - 0.2).abs() < 1e-12);
    }
}
