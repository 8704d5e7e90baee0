//! Par computation and trail-time estimation for skill-based tokens
//!
//! A "par" is the baseline infraction count (drops, falls, throws) expected
//! over a trail's length; steeper trails raise the allowance.

pub const FEET_PER_METER: f64 = 3.28084;

pub fn meters_to_feet(m: f64) -> f64 {
    m * FEET_PER_METER
}

/// Baseline infraction count for a stunt over a trail.
///
/// One infraction allowed per `divisor_ft` feet, scaled up by average angle
/// (10 degrees doubles the allowance).
pub fn stunt_par(distance_m: f64, avg_angle: f64, divisor_ft: f64) -> f64 {
    let feet = meters_to_feet(distance_m);
    let angle_factor = 1.0 + avg_angle / 10.0;
    (feet * angle_factor / divisor_ft).ceil()
}

/// Slope weight on the same scale the difficulty scoring uses (0.5 - 25).
fn angle_weight(angle: f64) -> f64 {
    match angle {
        a if a < 1.0 => 0.5,
        a if a < 2.0 => 1.0,
        a if a < 4.0 => 1.5,
        a if a < 8.0 => 2.5,
        a if a < 12.0 => 4.0,
        a if a < 20.0 => 6.0,
        a if a < 28.0 => 8.0,
        a if a < 35.0 => 10.0,
        a if a < 40.0 => 12.0,
        a if a < 45.0 => 14.0,
        a if a < 50.0 => 16.0,
        a if a < 60.0 => 18.0,
        a if a < 70.0 => 20.0,
        a if a < 80.0 => 22.0,
        _ => 25.0,
    }
}

const BASE_SPEED_MPH: f64 = 2.0;
const MAX_ANGLE_WEIGHT: f64 = 25.0;
const METERS_PER_MILE: f64 = 1609.34;

/// Rough hiking-time estimate in minutes from distance and average angle.
///
/// Walking speed starts at 2 mph and degrades with slope, never below half.
/// Used as the speed-token baseline when the payload carries no estimate.
pub fn estimate_minutes(distance_m: f64, avg_angle: f64) -> f64 {
    let miles = distance_m / METERS_PER_MILE;
    if miles <= 0.0 {
        return 0.0;
    }
    let angle_factor = 1.0 - angle_weight(avg_angle) / MAX_ANGLE_WEIGHT / 2.0;
    let speed = (BASE_SPEED_MPH * angle_factor).max(0.1);
    miles / speed * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_scales_with_angle() {
        // 1000 m flat-ish: 3280.84 ft / 150 -> ceil(21.9 * 1.0) = 22
        assert_eq!(stunt_par(1000.0, 0.0, 150.0), 22.0);
        // 10 degrees average doubles the allowance
        assert_eq!(stunt_par(1000.0, 10.0, 150.0), 44.0);
    }

    #[test]
    fn par_rounds_up() {
        // 100 m = 328 ft -> 328/150 = 2.19 -> 3
        assert_eq!(stunt_par(100.0, 0.0, 150.0), 3.0);
    }

    #[test]
    fn estimate_slows_on_slope() {
        let flat = estimate_minutes(3218.68, 0.5); // 2 miles, < 1 degree
        let steep = estimate_minutes(3218.68, 30.0);
        assert!(flat < steep);
        // 2 miles at 2 mph with the minimal slope penalty (0.5/25/2 = 1%)
        assert!((flat - 60.0 / 0.99).abs() < 0.5);
    }

    #[test]
    fn estimate_handles_zero_distance() {
        assert_eq!(estimate_minutes(0.0, 5.0), 0.0);
    }
}
