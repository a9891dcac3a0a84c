//! Linear filtering and zero-phase forward-backward filtering
//!
//! - [`lfilter`] runs a transfer function over a signal in direct form II transposed
//! - [`lfilter_zi`] gives the state that makes a unit step start in steady state
//! - [`filtfilt`] filters forward, then backward, cancelling the phase shift
//!
//! `filtfilt` extends the signal at both ends before filtering to reduce edge
//! transients, and strips the extension again, so the output is exactly as
//! long as the input.

use super::butterworth::TransferFunction;
use crate::error::{Result, SuperhetError};

/// Edge extension applied before forward-backward filtering
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PadType {
    /// Point-symmetric extension about the end samples
    #[default]
    Odd,
    /// Mirror extension about the end samples
    Even,
    /// Repeat the end samples
    Constant,
}

/// Padding used by [`filtfilt`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Padding {
    /// Extension type
    pub pad_type: PadType,
    /// Samples added at each end; `None` means `3 * ntaps`
    pub len: Option<usize>,
}

impl Padding {
    /// No extension at all
    pub fn none() -> Self {
        Self {
            pad_type: PadType::Odd,
            len: Some(0),
        }
    }

    fn resolve_len(&self, ntaps: usize) -> usize {
        self.len.unwrap_or(3 * ntaps)
    }
}

/// Coefficients padded to a common length `ntaps`
fn padded_coefficients(tf: &TransferFunction) -> (Vec<f64>, Vec<f64>) {
    let n = tf.ntaps();
    let mut b = tf.b.clone();
    let mut a = tf.a.clone();
    b.resize(n, 0.0);
    a.resize(n, 0.0);
    (b, a)
}

/// Filter `x` with `tf` starting from state `zi`.
///
/// `zi` must have `ntaps - 1` entries, or be `None` for initial rest.
/// Returns the output and the final filter state.
pub fn lfilter(
    tf: &TransferFunction,
    x: &[f64],
    zi: Option<&[f64]>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let (b, a) = padded_coefficients(tf);
    let n_state = b.len() - 1;

    let mut z = match zi {
        Some(zi) if zi.len() != n_state => {
            return Err(SuperhetError::Signal(format!(
                "initial state needs {} values, got {}",
                n_state,
                zi.len()
            )))
        }
        Some(zi) => zi.to_vec(),
        None => vec![0.0; n_state],
    };

    let mut y = Vec::with_capacity(x.len());
    for &xi in x {
        let yi = b[0] * xi + z.first().copied().unwrap_or(0.0);
        for k in 0..n_state {
            let next = if k + 1 < n_state { z[k + 1] } else { 0.0 };
            z[k] = b[k + 1] * xi + next - a[k + 1] * yi;
        }
        y.push(yi);
    }

    Ok((y, z))
}

/// Initial state for [`lfilter`] matching the steady state of a unit step.
///
/// Scale by the first input sample to start a signal without a transient.
pub fn lfilter_zi(tf: &TransferFunction) -> Vec<f64> {
    let (b, a) = padded_coefficients(tf);
    let n_state = b.len() - 1;
    if n_state == 0 {
        return Vec::new();
    }

    let y_ss = tf.dc_gain();
    let mut zi = vec![0.0; n_state];
    let mut acc = 0.0;
    for k in (0..n_state).rev() {
        acc += b[k + 1] - a[k + 1] * y_ss;
        zi[k] = acc;
    }
    zi
}

/// Extend `x` by `n` samples at each end
fn extend(x: &[f64], n: usize, pad_type: PadType) -> Vec<f64> {
    if n == 0 {
        return x.to_vec();
    }
    let first = x[0];
    let last = x[x.len() - 1];
    let len = x.len();

    let mut out = Vec::with_capacity(len + 2 * n);
    match pad_type {
        PadType::Odd => {
            out.extend((1..=n).rev().map(|i| 2.0 * first - x[i]));
            out.extend_from_slice(x);
            out.extend((1..=n).map(|i| 2.0 * last - x[len - 1 - i]));
        }
        PadType::Even => {
            out.extend((1..=n).rev().map(|i| x[i]));
            out.extend_from_slice(x);
            out.extend((1..=n).map(|i| x[len - 1 - i]));
        }
        PadType::Constant => {
            out.extend(std::iter::repeat(first).take(n));
            out.extend_from_slice(x);
            out.extend(std::iter::repeat(last).take(n));
        }
    }
    out
}

/// Apply `tf` forward and then backward over `x`.
///
/// The result has zero phase distortion and twice the order of `tf`.
/// Fails when the padding would be as long as the signal.
pub fn filtfilt(tf: &TransferFunction, x: &[f64], padding: Padding) -> Result<Vec<f64>> {
    let edge = padding.resolve_len(tf.ntaps());
    if x.is_empty() && edge == 0 {
        return Ok(Vec::new());
    }
    if x.len() <= edge {
        return Err(SuperhetError::Signal(format!(
            "signal length {} must be greater than the padding length {}",
            x.len(),
            edge
        )));
    }

    let ext = extend(x, edge, padding.pad_type);
    let zi = lfilter_zi(tf);

    let x0 = ext[0];
    let zi_fwd: Vec<f64> = zi.iter().map(|z| z * x0).collect();
    let (mut y, _) = lfilter(tf, &ext, Some(&zi_fwd))?;

    y.reverse();
    let y0 = y[0];
    let zi_bwd: Vec<f64> = zi.iter().map(|z| z * y0).collect();
    let (mut y, _) = lfilter(tf, &y, Some(&zi_bwd))?;
    y.reverse();

    Ok(y[edge..y.len() - edge].to_vec())
}
