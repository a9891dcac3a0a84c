//! Butterworth filter design
//!
//! Designs digital Butterworth filters in transfer-function (b, a) form:
//!
//! 1. Analog low-pass prototype poles on the unit circle in the left half plane
//! 2. Frequency pre-warping so the digital -3 dB point lands on the requested cutoff
//! 3. Bilinear transform of the zeros, poles and gain
//! 4. Expansion of the zeros and poles into polynomial coefficients
//!
//! Cutoffs are normalized to the Nyquist frequency, so `0.4` means 40% of
//! `fs / 2`. The resulting coefficients match the conventional
//! `butter(order, Wn, btype='low')` design.
//!
//! ## Example
//!
//! ```
//! use superhet_rs::dsp::ButterworthDesign;
//!
//! let tf = ButterworthDesign::lowpass(2, 0.4).unwrap();
//! assert_eq!(tf.b.len(), 3);
//! assert!((tf.dc_gain() - 1.0).abs() < 1e-12);
//! ```

use crate::error::{Result, SuperhetError};
use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

/// Highest order accepted by the designer
pub const MAX_ORDER: usize = 16;

/// Sample rate used for the bilinear transform of normalized designs
const NORMALIZED_FS: f64 = 2.0;

/// Rational transfer function `H(z) = B(z) / A(z)` with `a[0] == 1`
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator coefficients, highest power of `z^-1` last
    pub b: Vec<f64>,
    /// Denominator coefficients, `a[0]` normalized to 1
    pub a: Vec<f64>,
}

impl TransferFunction {
    /// Create a transfer function, normalizing both polynomials by `a[0]`
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        let a0 = a.first().copied().unwrap_or(0.0);
        if b.is_empty() || a0 == 0.0 || !a0.is_finite() {
            return Err(SuperhetError::FilterDesign(
                "transfer function needs a non-empty numerator and a[0] != 0".to_string(),
            ));
        }
        Ok(Self {
            b: b.iter().map(|v| v / a0).collect(),
            a: a.iter().map(|v| v / a0).collect(),
        })
    }

    /// Number of taps, `max(len(a), len(b))`
    pub fn ntaps(&self) -> usize {
        self.a.len().max(self.b.len())
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.ntaps().saturating_sub(1)
    }

    /// Gain at 0 Hz, `ΣB / ΣA`
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// Complex response at normalized angular frequency `w` (radians/sample)
    pub fn frequency_response(&self, w: f64) -> Complex64 {
        let z_inv = Complex64::from_polar(1.0, -w);
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .rev()
                .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
        };
        eval(&self.b) / eval(&self.a)
    }

    /// Magnitude response in dB at normalized angular frequency `w`
    pub fn magnitude_db(&self, w: f64) -> f64 {
        20.0 * self.frequency_response(w).norm().log10()
    }
}

/// Digital Butterworth filter designer
#[derive(Debug, Clone, Copy)]
pub struct ButterworthDesign;

impl ButterworthDesign {
    /// Design a low-pass filter.
    ///
    /// # Arguments
    /// * `order` - Filter order (1..=[`MAX_ORDER`])
    /// * `normalized_cutoff` - Cutoff as a fraction of Nyquist, strictly inside (0, 1)
    pub fn lowpass(order: usize, normalized_cutoff: f64) -> Result<TransferFunction> {
        if order == 0 || order > MAX_ORDER {
            return Err(SuperhetError::FilterDesign(format!(
                "order must be in 1..={}, got {}",
                MAX_ORDER, order
            )));
        }
        if !(normalized_cutoff > 0.0 && normalized_cutoff < 1.0) {
            return Err(SuperhetError::FilterDesign(format!(
                "normalized cutoff must be in (0, 1), got {}",
                normalized_cutoff
            )));
        }

        let warped = 2.0 * NORMALIZED_FS * (PI * normalized_cutoff / NORMALIZED_FS).tan();

        // Analog prototype scaled to the warped cutoff; gain keeps H(0) = 1
        let poles: Vec<Complex64> = prototype_poles(order)
            .into_iter()
            .map(|p| p * warped)
            .collect();
        let gain = warped.powi(order as i32);

        let (zeros_d, poles_d, gain_d) = bilinear_zpk(&poles, gain, NORMALIZED_FS);

        let b: Vec<f64> = poly(&zeros_d).iter().map(|c| c.re * gain_d).collect();
        let a: Vec<f64> = poly(&poles_d).iter().map(|c| c.re).collect();

        tracing::trace!(order, normalized_cutoff, ?b, ?a, "Designed Butterworth low-pass");
        TransferFunction::new(b, a)
    }
}

/// Analog Butterworth prototype poles, `-exp(jπm / 2N)` for `m = -N+1, -N+3, ..., N-1`
fn prototype_poles(order: usize) -> Vec<Complex64> {
    let n = order as i64;
    (0..n)
        .map(|k| {
            let m = (-n + 1 + 2 * k) as f64;
            -Complex64::from_polar(1.0, PI * m / (2.0 * order as f64))
        })
        .collect()
}

/// Bilinear transform of an all-pole analog filter.
///
/// Every analog zero at infinity maps to `z = -1`.
fn bilinear_zpk(poles: &[Complex64], gain: f64, fs: f64) -> (Vec<Complex64>, Vec<Complex64>, f64) {
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let poles_d: Vec<Complex64> = poles.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();
    let zeros_d = vec![Complex64::new(-1.0, 0.0); poles.len()];

    let denom = poles
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, &p| acc * (fs2 - p));
    let gain_d = gain / denom.re;

    (zeros_d, poles_d, gain_d)
}

/// Monic polynomial with the given roots, highest degree first
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], eps: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < eps, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_second_order_reference_coefficients() {
        let tf = ButterworthDesign::lowpass(2, 0.4).unwrap();
        assert_close(&tf.b, &[0.206572, 0.413144, 0.206572], 1e-5);
        assert_close(&tf.a, &[1.0, -0.369527, 0.195816], 1e-5);
    }

    #[test]
    fn test_first_order_closed_form() {
        // H(z) = K(1 + z^-1) / ((1 + K) + (K - 1) z^-1), K = tan(π·Wn/2)
        let wn = 0.3;
        let k = (PI * wn / 2.0).tan();
        let tf = ButterworthDesign::lowpass(1, wn).unwrap();
        assert_close(&tf.b, &[k / (1.0 + k), k / (1.0 + k)], 1e-12);
        assert_close(&tf.a, &[1.0, (k - 1.0) / (1.0 + k)], 1e-12);
    }

    #[test]
    fn test_unity_dc_gain_and_half_power_at_cutoff() {
        for order in 1..=6 {
            let wn = 0.25;
            let tf = ButterworthDesign::lowpass(order, wn).unwrap();
            assert_eq!(tf.order(), order);
            assert!((tf.dc_gain() - 1.0).abs() < 1e-9, "order {}", order);
            let db = tf.magnitude_db(PI * wn);
            assert!((db + 3.0103).abs() < 1e-3, "order {} gives {} dB", order, db);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(ButterworthDesign::lowpass(0, 0.4).is_err());
        assert!(ButterworthDesign::lowpass(MAX_ORDER + 1, 0.4).is_err());
        assert!(ButterworthDesign::lowpass(2, 0.0).is_err());
        assert!(ButterworthDesign::lowpass(2, 1.0).is_err());
        assert!(ButterworthDesign::lowpass(2, f64::NAN).is_err());
    }

    #[test]
    fn test_transfer_function_normalizes() {
        let tf = TransferFunction::new(vec![2.0, 4.0], vec![2.0, 1.0]).unwrap();
        assert_eq!(tf.b, vec![1.0, 2.0]);
        assert_eq!(tf.a, vec![1.0, 0.5]);
        assert!(TransferFunction::new(vec![1.0], vec![0.0]).is_err());
        assert!(TransferFunction::new(vec![], vec![1.0]).is_err());
    }
}
