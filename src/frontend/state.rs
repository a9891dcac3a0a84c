//! Receiver state owned by the application
//!
//! This module holds everything the UI needs between frames: the raw text
//! of the parameter fields, the last successful pipeline output and its
//! spectra. Panels never mutate it directly; they return [`AppAction`]s.

use crate::analysis::{SpectrumAnalyzer, SpectrumConfig, WindowFunction};
use crate::config::ParametersConfig;
use crate::error::Result;
use crate::i18n::Language;
use crate::pipeline::{PipelineOutput, SignalPipeline, SpectralViews};
use crate::types::{FieldValue, ParameterKind, PipelineInput};

/// Raw contents of the three parameter text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFields {
    pub signal: String,
    pub heterodyne: String,
    pub noise: String,
}

impl ParameterFields {
    /// Fields pre-filled from configuration
    pub fn from_config(config: &ParametersConfig) -> Self {
        Self {
            signal: config.signal_frequency_hz.to_string(),
            heterodyne: config.heterodyne_frequency_hz.to_string(),
            noise: config.noise_amplitude_percent.to_string(),
        }
    }

    /// Text of one field
    pub fn field(&self, kind: ParameterKind) -> &str {
        match kind {
            ParameterKind::SignalFrequency => &self.signal,
            ParameterKind::HeterodyneFrequency => &self.heterodyne,
            ParameterKind::NoiseAmplitude => &self.noise,
        }
    }

    /// Mutable text of one field, for the text edit widget
    pub fn field_mut(&mut self, kind: ParameterKind) -> &mut String {
        match kind {
            ParameterKind::SignalFrequency => &mut self.signal,
            ParameterKind::HeterodyneFrequency => &mut self.heterodyne,
            ParameterKind::NoiseAmplitude => &mut self.noise,
        }
    }

    /// Parse one field
    pub fn parse(&self, kind: ParameterKind) -> FieldValue {
        kind.parse_field(self.field(kind))
    }

    /// Pipeline input, or `None` when a field is empty
    pub fn to_input(&self) -> Option<Result<PipelineInput>> {
        PipelineInput::from_fields(&self.signal, &self.heterodyne, &self.noise)
    }
}

impl Default for ParameterFields {
    fn default() -> Self {
        Self::from_config(&ParametersConfig::default())
    }
}

/// What happened on the last recomputation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecomputeOutcome {
    /// New output and spectra are available
    Updated,
    /// A field is empty; previous plots stay
    SkippedEmpty,
    /// A field holds a disallowed value; previous plots stay
    SkippedInvalid(String),
}

/// Actions emitted by panels and handled by the app
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// One of the parameter fields was edited
    ParameterEdited(ParameterKind),
    /// Switch the interface language
    SetLanguage(Language),
    /// Switch between dark and light visuals
    SetDarkMode(bool),
    /// Show spectra in dB or linear magnitude
    SetDbScale(bool),
    /// Change the analysis window of the spectra
    SetWindow(WindowFunction),
    /// Open or close the block diagram window
    ToggleDiagram,
}

/// Pipeline, analyzer and the latest results
#[derive(Debug)]
pub struct ReceiverState {
    pipeline: SignalPipeline,
    analyzer: SpectrumAnalyzer,
    /// Raw text of the parameter fields
    pub fields: ParameterFields,
    output: Option<PipelineOutput>,
    spectra: Option<SpectralViews>,
    last_outcome: Option<RecomputeOutcome>,
}

impl ReceiverState {
    /// Create the state and run the pipeline once for the initial fields
    pub fn new(fields: ParameterFields, window: WindowFunction) -> Result<Self> {
        let mut state = Self {
            pipeline: SignalPipeline::new()?,
            analyzer: SpectrumAnalyzer::with_config(SpectrumConfig::default().window(window)),
            fields,
            output: None,
            spectra: None,
            last_outcome: None,
        };
        state.recompute();
        Ok(state)
    }

    /// Recompute from the current field contents.
    ///
    /// Empty or invalid fields leave the previous output untouched.
    pub fn recompute(&mut self) -> RecomputeOutcome {
        let outcome = match self.fields.to_input() {
            None => RecomputeOutcome::SkippedEmpty,
            Some(Err(e)) => RecomputeOutcome::SkippedInvalid(e.to_string()),
            Some(Ok(input)) => match self.pipeline.compute(&input) {
                Ok(output) => {
                    self.spectra = Some(output.spectra(&mut self.analyzer));
                    self.output = Some(output);
                    RecomputeOutcome::Updated
                }
                Err(e) => {
                    tracing::error!("Pipeline failed for {:?}: {}", input, e);
                    RecomputeOutcome::SkippedInvalid(e.to_string())
                }
            },
        };

        if outcome != RecomputeOutcome::Updated {
            tracing::debug!("Recompute skipped: {:?}", outcome);
        }
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Change the spectral window and refresh the spectra of the current output
    pub fn set_window(&mut self, window: WindowFunction) {
        self.analyzer.set_config(SpectrumConfig::default().window(window));
        if let Some(output) = &self.output {
            self.spectra = Some(output.spectra(&mut self.analyzer));
        }
    }

    /// Window currently used for the spectra
    pub fn window(&self) -> WindowFunction {
        self.analyzer.config().window
    }

    /// Latest successful output
    pub fn output(&self) -> Option<&PipelineOutput> {
        self.output.as_ref()
    }

    /// Spectra of the latest successful output
    pub fn spectra(&self) -> Option<&SpectralViews> {
        self.spectra.as_ref()
    }

    /// Outcome of the last recomputation request
    pub fn last_outcome(&self) -> Option<&RecomputeOutcome> {
        self.last_outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ReceiverState {
        ReceiverState::new(ParameterFields::default(), WindowFunction::Hann).unwrap()
    }

    #[test]
    fn test_initial_compute() {
        let state = state();
        assert_eq!(state.last_outcome(), Some(&RecomputeOutcome::Updated));
        let output = state.output().unwrap();
        assert_eq!(output.intermediate_frequency_label(), "75.00");
        assert!(state.spectra().is_some());
    }

    #[test]
    fn test_field_access() {
        let mut fields = ParameterFields::default();
        assert_eq!(fields.field(ParameterKind::HeterodyneFrequency), "90");
        fields.field_mut(ParameterKind::NoiseAmplitude).push('5');
        assert_eq!(fields.noise, "205");
        assert_eq!(fields.parse(ParameterKind::NoiseAmplitude), FieldValue::Invalid);
    }

    #[test]
    fn test_empty_field_keeps_previous_output() {
        let mut state = state();
        let before = state.output().cloned();
        state.fields.signal.clear();
        assert_eq!(state.recompute(), RecomputeOutcome::SkippedEmpty);
        assert_eq!(state.output().cloned(), before);
    }

    #[test]
    fn test_invalid_field_keeps_previous_output() {
        let mut state = state();
        state.fields.heterodyne = "95".to_string();
        match state.recompute() {
            RecomputeOutcome::SkippedInvalid(msg) => assert!(msg.contains("heterodyne")),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(state.output().unwrap().intermediate_frequency_label(), "75.00");
    }

    #[test]
    fn test_edit_updates_output() {
        let mut state = state();
        state.fields.signal = "30".to_string();
        state.fields.heterodyne = "60".to_string();
        assert_eq!(state.recompute(), RecomputeOutcome::Updated);
        assert_eq!(state.output().unwrap().intermediate_frequency_label(), "30.00");
    }

    #[test]
    fn test_set_window_refreshes_spectra() {
        let mut state = state();
        let hann = state.spectra().cloned().unwrap();
        state.set_window(WindowFunction::Rectangular);
        assert_eq!(state.window(), WindowFunction::Rectangular);
        assert_ne!(state.spectra().cloned().unwrap(), hann);
    }
}
