//! Linear crossfade between consecutive segments.

use super::interpolate::linear_ramp;

/// Overlaps shorter than this are concatenated without blending.
pub const MIN_CROSSFADE_SAMPLES: usize = 10;

/// Joins two buffers, blending the tail of `a` into the head of `b`.
///
/// When either input is shorter than `overlap`, the overlap shrinks to
/// `min(len(a) / 4, len(b) / 4, overlap)`. If the final overlap is below
/// [`MIN_CROSSFADE_SAMPLES`] the inputs are simply concatenated.
///
/// # Arguments
/// * `a` - Leading segment
/// * `b` - Trailing segment
/// * `overlap` - Requested overlap in samples
///
/// # Returns
/// A buffer of `len(a) + len(b) - overlap` samples, where `overlap` is the
/// effective (possibly reduced or zero) overlap.
pub fn crossfade(a: &[f64], b: &[f64], overlap: usize) -> Vec<f64> {
    let mut overlap = overlap;
    if a.len() < overlap || b.len() < overlap {
        overlap = (a.len() / 4).min(b.len() / 4).min(overlap);
    }

    let mut out = Vec::with_capacity(a.len() + b.len());

    if overlap < MIN_CROSSFADE_SAMPLES {
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        return out;
    }

    let fade_out = linear_ramp(1.0, 0.0, overlap);
    let fade_in = linear_ramp(0.0, 1.0, overlap);

    let split = a.len() - overlap;
    out.extend_from_slice(&a[..split]);
    out.extend(
        a[split..]
            .iter()
            .zip(&b[..overlap])
            .zip(fade_out.iter().zip(&fade_in))
            .map(|((&tail, &head), (&out_gain, &in_gain))| tail * out_gain + head * in_gain),
    );
    out.extend_from_slice(&b[overlap..]);

    out
}
