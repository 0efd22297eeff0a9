//! Evenly spaced ramps and linear interpolation.

/// Returns `n` evenly spaced values from `start` to `stop`, both included.
///
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector. The last
/// value is exactly `stop`.
pub fn linear_ramp(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut ramp: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            ramp[n - 1] = stop;
            ramp
        }
    }
}

/// Linearly interpolates `samples` at a fractional index.
///
/// Positions outside `[0, len - 1]` clamp to the first or last sample.
/// Returns 0.0 for an empty slice.
pub fn interpolate_at(samples: &[f64], position: f64) -> f64 {
    let Some(&last) = samples.last() else {
        return 0.0;
    };
    if position <= 0.0 {
        return samples[0];
    }
    let last_index = samples.len() - 1;
    if position >= last_index as f64 {
        return last;
    }

    let index = position.floor() as usize;
    let frac = position - index as f64;
    samples[index] + (samples[index + 1] - samples[index]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        let ramp = linear_ramp(1.0, 0.0, 5);
        assert_eq!(ramp, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_ramp_degenerate_lengths() {
        assert!(linear_ramp(0.0, 1.0, 0).is_empty());
        assert_eq!(linear_ramp(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linear_ramp(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn test_interpolate_midpoints() {
        let samples = [0.0, 1.0, -1.0];
        assert_eq!(interpolate_at(&samples, 0.5), 0.5);
        assert_eq!(interpolate_at(&samples, 1.5), 0.0);
        assert_eq!(interpolate_at(&samples, 1.0), 1.0);
    }

    #[test]
    fn test_interpolate_clamps() {
        let samples = [0.2, 0.4];
        assert_eq!(interpolate_at(&samples, -3.0), 0.2);
        assert_eq!(interpolate_at(&samples, 7.0), 0.4);
        assert_eq!(interpolate_at(&[], 0.5), 0.0);
    }
}
