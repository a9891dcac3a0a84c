//! Sample grids and sine synthesis

use std::f64::consts::PI;

/// `n` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// The last sample is pinned to `stop` so the endpoint is exact regardless
/// of rounding in the step.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// `sin(2π·f·t)` evaluated at each time in `time`
pub fn sine_wave(time: &[f64], frequency_hz: f64) -> Vec<f64> {
    let omega = 2.0 * PI * frequency_hz;
    time.iter().map(|&t| (omega * t).sin()).collect()
}

/// Elementwise product of two equally long signals (ideal mixer)
pub fn mix(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x * y).collect()
}
