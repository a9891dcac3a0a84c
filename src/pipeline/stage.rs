//! Receiver stages shown side by side in the UI.

use crate::analysis::MagnitudeSpectrum;

/// A point in the receiver chain whose signal is plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Input signal before mixing
    Original,
    /// Mixer output with the noise term added
    MixedWithNoise,
    /// Mixer output after the low-pass stage
    Filtered,
}

impl Stage {
    /// All stages, top to bottom
    pub fn all() -> &'static [Stage] {
        &[Stage::Original, Stage::MixedWithNoise, Stage::Filtered]
    }

    /// Translation key of the time-domain plot title
    pub fn title_key(&self) -> &'static str {
        match self {
            Stage::Original => "stage.original",
            Stage::MixedWithNoise => "stage.mixed",
            Stage::Filtered => "stage.filtered",
        }
    }

    /// Translation key of the spectrum plot title
    pub fn spectrum_title_key(&self) -> &'static str {
        match self {
            Stage::Original => "stage.original_spectrum",
            Stage::MixedWithNoise => "stage.mixed_spectrum",
            Stage::Filtered => "stage.filtered_spectrum",
        }
    }

    /// Stable identifier for plot widgets
    pub fn id(&self) -> &'static str {
        match self {
            Stage::Original => "original",
            Stage::MixedWithNoise => "mixed",
            Stage::Filtered => "filtered",
        }
    }
}

/// Magnitude spectrum of every stage
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralViews {
    pub original: MagnitudeSpectrum,
    pub mixed_with_noise: MagnitudeSpectrum,
    pub filtered: MagnitudeSpectrum,
}

impl SpectralViews {
    /// Spectrum of one stage
    pub fn get(&self, stage: Stage) -> &MagnitudeSpectrum {
        match stage {
            Stage::Original => &self.original,
            Stage::MixedWithNoise => &self.mixed_with_noise,
            Stage::Filtered => &self.filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_stage_ids_are_unique() {
        let ids: HashSet<_> = Stage::all().iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), 3);
        let keys: HashSet<_> = Stage::all()
            .iter()
            .flat_map(|s| [s.title_key(), s.spectrum_title_key()])
            .collect();
        assert_eq!(keys.len(), 6);
    }
}
