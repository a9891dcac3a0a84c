//! Receiver signal pipeline.
//!
//! Every parameter change recomputes the whole chain from scratch:
//!
//! ```text
//! sin(2π·fs·t) ──► (×) ──► (+ noise) ──► [Butterworth LPF, 0 phase] ──► out
//!                   ▲
//! sin(2π·fh·t) ─────┘
//! ```
//!
//! # Design
//!
//! - **Pure**: [`SignalPipeline::compute`] has no side effects besides a trace
//!   event, and identical inputs give bit-identical outputs.
//! - **Fixed filter**: the low-pass stage is designed once from constants.
//! - **Owned output**: each run returns a fresh [`PipelineOutput`].

pub mod signal;
pub mod stage;

pub use signal::{
    compute, PipelineOutput, SignalPipeline, CUTOFF_HZ, DURATION_S, FILTER_ORDER, NYQUIST_HZ,
    SAMPLE_COUNT,
};
pub use stage::{SpectralViews, Stage};
