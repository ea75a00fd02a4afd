use std::f64::consts::TAU;

use nalgebra::Point2;

use crate::error::{ConfigError, DomainError};

/// Position on a circular orbit of the given radius, centered at the origin.
///
/// The body starts on the +x axis at t = 0 and moves counterclockwise,
/// completing one revolution every `period` time units. Time may be negative.
pub fn position(radius: f64, period: f64, time: f64) -> Result<Point2<f64>, DomainError> {
    if period == 0.0 {
        return Err(DomainError::ZeroPeriod);
    }

    let theta = TAU * time / period;
    let pt = Point2::new(radius * theta.cos(), radius * theta.sin());

    // Catches NaN/inf coming in through any of the arguments
    if !(pt.x.is_finite() && pt.y.is_finite()) {
        return Err(DomainError::NonFinite {
            radius,
            period,
            time,
        });
    }
    Ok(pt)
}

/// A circular orbit, with its parameters already checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    radius: f64,
    period: f64,
}

impl CircularOrbit {
    /// `name` is only used to label the error.
    pub fn new(name: &str, radius: f64, period: f64) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius {
                name: name.to_owned(),
                radius,
            });
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(ConfigError::InvalidPeriod {
                name: name.to_owned(),
                period,
            });
        }
        Ok(Self { radius, period })
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(radius: f64, period: f64) -> Self {
        Self { radius, period }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Radians per unit time
    pub fn angular_velocity(&self) -> f64 {
        TAU / self.period
    }

    /// Angular position at the given time, normalized to [0, 2pi).
    pub fn angle_at(&self, time: f64) -> f64 {
        let theta = (TAU * time / self.period).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if theta >= TAU {
            0.0
        } else {
            theta
        }
    }

    pub fn position_at(&self, time: f64) -> Result<Point2<f64>, DomainError> {
        position(self.radius, self.period, time)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_cardinal_points() {
        let (r, p) = (2.5, 40.0);

        assert_abs_diff_eq!(position(r, p, 0.0).unwrap(), Point2::new(r, 0.0), epsilon = EPS);
        assert_abs_diff_eq!(
            position(r, p, p / 4.0).unwrap(),
            Point2::new(0.0, r),
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            position(r, p, p / 2.0).unwrap(),
            Point2::new(-r, 0.0),
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            position(r, p, 3.0 * p / 4.0).unwrap(),
            Point2::new(0.0, -r),
            epsilon = EPS
        );
    }

    #[test]
    fn test_stays_on_circle() {
        for &(r, p) in &[(0.387, 88.0), (1.0, 365.0), (30.047, 59800.0), (1e-3, 0.5)] {
            for i in -50..50 {
                let t = i as f64 * 7.3;
                let pt = position(r, p, t).unwrap();
                assert_relative_eq!(pt.coords.norm_squared(), r * r, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_periodicity() {
        let (r, p) = (5.204, 4331.0);
        for i in -20..20 {
            let t = i as f64 * 123.4;
            let a = position(r, p, t).unwrap();
            let b = position(r, p, t + p).unwrap();
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_negative_time_is_mirror_image() {
        let (r, p) = (1.524, 687.0);
        for i in 1..10 {
            let t = i as f64 * 31.0;
            let fwd = position(r, p, t).unwrap();
            let back = position(r, p, -t).unwrap();
            assert_abs_diff_eq!(fwd.x, back.x, epsilon = EPS);
            assert_abs_diff_eq!(fwd.y, -back.y, epsilon = EPS);
        }
    }

    #[test]
    fn test_earth() {
        let earth = CircularOrbit::new("Earth", 1.0, 365.0).unwrap();
        assert_abs_diff_eq!(earth.position_at(0.0).unwrap(), Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(
            earth.position_at(91.25).unwrap(),
            Point2::new(0.0, 1.0),
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            earth.position_at(365.0).unwrap(),
            Point2::new(1.0, 0.0),
            epsilon = EPS
        );
        assert_relative_eq!(earth.angular_velocity(), TAU / 365.0);
        assert_relative_eq!(earth.circumference(), TAU);
    }

    #[test]
    fn test_angle_normalization() {
        let orbit = CircularOrbit::new("x", 1.0, 100.0).unwrap();
        assert_relative_eq!(orbit.angle_at(25.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.angle_at(-25.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.angle_at(125.0), PI / 2.0, epsilon = 1e-12);
        assert_eq!(orbit.angle_at(0.0), 0.0);
        assert!(orbit.angle_at(-1e-300) < TAU);
    }

    #[test]
    fn test_zero_period_is_an_error() {
        assert_eq!(position(1.0, 0.0, 10.0), Err(DomainError::ZeroPeriod));
        assert_eq!(position(1.0, -0.0, 0.0), Err(DomainError::ZeroPeriod));
    }

    #[test]
    fn test_non_finite_is_an_error() {
        assert!(matches!(
            position(f64::NAN, 1.0, 0.0),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            position(1.0, 1.0, f64::INFINITY),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            position(1.0, f64::NAN, 3.0),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_invalid_orbits_rejected() {
        assert_eq!(
            CircularOrbit::new("Mars", 0.0, 687.0),
            Err(ConfigError::InvalidRadius {
                name: "Mars".to_owned(),
                radius: 0.0
            })
        );
        assert_eq!(
            CircularOrbit::new("Mars", 1.524, -1.0),
            Err(ConfigError::InvalidPeriod {
                name: "Mars".to_owned(),
                period: -1.0
            })
        );
        assert!(CircularOrbit::new("Mars", f64::INFINITY, 687.0).is_err());
        assert!(CircularOrbit::new("Mars", 1.524, f64::NAN).is_err());
    }
}
