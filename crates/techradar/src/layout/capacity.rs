//! Row capacity estimation.

/// Estimates how many dots fit along an arc without touching.
///
/// The arc has length `angular_span * radius`; dots need `min_spacing` of arc
/// length between neighbouring centers. The result is floored to at least one
/// so every row can always hold a dot, however tight.
///
/// # Examples
///
/// ```
/// # use techradar::layout::capacity_at;
/// # use std::f32::consts::FRAC_PI_2;
/// assert_eq!(capacity_at(120.0, FRAC_PI_2, 33.0), 5);
/// assert_eq!(capacity_at(1.0, 0.1, 33.0), 1);
/// ```
pub fn capacity_at(radius: f32, angular_span: f32, min_spacing: f32) -> usize {
    let fit = (angular_span * radius / min_spacing).floor();
    if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use super::*;

    #[test]
    fn test_capacity_along_quarter_arc() {
        // 200 * π/2 / 33 ≈ 9.52
        assert_eq!(capacity_at(200.0, FRAC_PI_2, 33.0), 9);
        assert_eq!(capacity_at(40.0, FRAC_PI_2, 33.0), 1);
    }

    #[test]
    fn test_capacity_full_circle() {
        // 2π * 74.5 / 33 ≈ 14.18
        assert_eq!(capacity_at(74.5, TAU, 33.0), 14);
    }

    #[test]
    fn test_capacity_never_below_one() {
        assert_eq!(capacity_at(0.0, FRAC_PI_2, 33.0), 1);
        assert_eq!(capacity_at(10.0, 0.0, 33.0), 1);
        assert_eq!(capacity_at(10.0, 1.0, 0.0), 1);
    }
}
