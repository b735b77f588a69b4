//! Scalar helpers shared by layout and simulation.

/// Linearly map `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// With `clamp` set, the result is limited to the output range (in either
/// orientation). Without it, values outside the input range extrapolate.
/// A degenerate input range maps everything to `out_min`.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32, clamp: bool) -> f32 {
    let span = in_max - in_min;
    if span.abs() < f32::EPSILON {
        return out_min;
    }

    let mapped = (value - in_min) / span * (out_max - out_min) + out_min;

    if clamp {
        let (lo, hi) = if out_min <= out_max {
            (out_min, out_max)
        } else {
            (out_max, out_min)
        };
        mapped.clamp(lo, hi)
    } else {
        mapped
    }
}

/// Quadratic ease-out: fast start, slow finish. `quad_out(0) == 0`, `quad_out(1) == 1`.
#[inline]
pub fn quad_out(t: f32) -> f32 {
    -t * (t - 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_unclamped_extrapolates() {
        assert!((map_range(100.0, 0.0, 200.0, 1.0, 5.0, false) - 3.0).abs() < 1e-6);
        assert!((map_range(400.0, 0.0, 200.0, 1.0, 5.0, false) - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_map_range_clamped() {
        assert_eq!(map_range(400.0, 0.0, 200.0, 0.0, 1.0, true), 1.0);
        assert_eq!(map_range(-3.0, 0.0, 200.0, 0.0, 1.0, true), 0.0);
        assert_eq!(map_range(300.0, 0.0, 270.0, 2.0, 12.0, true), 12.0);
    }

    #[test]
    fn test_map_range_reversed_output() {
        assert_eq!(map_range(10.0, 0.0, 1.0, 5.0, 2.0, true), 2.0);
    }

    #[test]
    fn test_quad_out_endpoints() {
        assert_eq!(quad_out(0.0), 0.0);
        assert_eq!(quad_out(1.0), 1.0);
        assert!((quad_out(0.5) - 0.75).abs() < 1e-6);
    }
}
