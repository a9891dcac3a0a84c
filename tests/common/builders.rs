//! Test data builders for creating test objects

use superhet_rs::PipelineInput;

/// Builder for pipeline inputs, starting from the default parameters
pub struct InputBuilder {
    signal: u32,
    heterodyne: u32,
    noise: u32,
}

impl InputBuilder {
    pub fn new() -> Self {
        let defaults = PipelineInput::default();
        Self {
            signal: defaults.signal_frequency_hz,
            heterodyne: defaults.heterodyne_frequency_hz,
            noise: defaults.noise_amplitude_percent,
        }
    }

    pub fn signal(mut self, hz: u32) -> Self {
        self.signal = hz;
        self
    }

    pub fn heterodyne(mut self, hz: u32) -> Self {
        self.heterodyne = hz;
        self
    }

    pub fn noise(mut self, percent: u32) -> Self {
        self.noise = percent;
        self
    }

    /// Build without validation, for out-of-range cases
    pub fn build_unchecked(self) -> PipelineInput {
        PipelineInput {
            signal_frequency_hz: self.signal,
            heterodyne_frequency_hz: self.heterodyne,
            noise_amplitude_percent: self.noise,
        }
    }

    pub fn build(self) -> PipelineInput {
        PipelineInput::new(self.signal, self.heterodyne, self.noise).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let input = InputBuilder::new().build();
        assert_eq!(input, PipelineInput::default());
    }
}
