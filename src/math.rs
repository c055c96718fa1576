//! Small numeric helpers shared by the color models.

pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Like `%`, but the result always has the sign of `y`.
pub fn mod_pos(x: f64, y: f64) -> f64 {
    ((x % y) + y) % y
}

/// Linear interpolation. `t` is not clamped, so values outside `[0, 1]` extrapolate.
pub fn interpolate(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Interpolates between two angles (in degrees) along the shorter arc of the circle.
///
/// The result is not normalized and may lie outside `[0, 360)`.
pub fn interpolate_angle(t: f64, a: f64, b: f64) -> f64 {
    let paths = [(a, b), (a, b + 360.0), (a + 360.0, b)];
    // `min_by` keeps the first of equally short paths.
    let (from, to) = paths
        .into_iter()
        .min_by(|x, y| (x.1 - x.0).abs().total_cmp(&(y.1 - y.0).abs()))
        .unwrap_or((a, b));
    interpolate(t, from, to)
}

/// Rounds to a fixed number of decimal places.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mod_pos_is_never_negative() {
        assert_eq!(mod_pos(-10.0, 360.0), 350.0);
        assert_eq!(mod_pos(370.0, 360.0), 10.0);
        assert_eq!(mod_pos(-1.5, 6.0), 4.5);
    }

    #[test]
    fn interpolate_extrapolates() {
        assert_eq!(interpolate(0.5, 2.0, 4.0), 3.0);
        assert_eq!(interpolate(2.0, 0.0, 1.0), 2.0);
        assert_eq!(interpolate(-1.0, 0.0, 1.0), -1.0);
    }

    #[test]
    fn interpolate_angle_takes_short_path() {
        assert_relative_eq!(interpolate_angle(0.5, 0.0, 240.0), 300.0);
        assert_relative_eq!(interpolate_angle(0.5, 350.0, 10.0), 360.0);
        assert_relative_eq!(interpolate_angle(0.5, 10.0, 350.0), 360.0);
        assert_relative_eq!(interpolate_angle(0.25, 0.0, 100.0), 25.0);
    }

    #[test]
    fn interpolate_angle_prefers_direct_path_on_ties() {
        // 240 -> 60 and 240 -> 420 are both 180 degrees long.
        assert_relative_eq!(interpolate_angle(0.5, 240.0, 60.0), 150.0);
    }

    #[test]
    fn round_to_decimals() {
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(0.125, 1), 0.1);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }
}
