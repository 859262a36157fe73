use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg};

/// An angle stored in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Angle {
        Angle { radians }
    }

    pub fn from_degrees(degrees: f64) -> Angle {
        Angle {
            radians: degrees.to_radians(),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Equivalent angle in `[0, 2π)`.
    pub fn normalized(&self) -> Angle {
        Angle {
            radians: self.radians.rem_euclid(2.0 * PI),
        }
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, other: Angle) -> Angle {
        Angle::from_radians(self.radians + other.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, factor: f64) -> Angle {
        Angle::from_radians(self.radians * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_conversion() {
        let angle = Angle::from_degrees(90.0);
        assert!((angle.radians() - PI / 2.0).abs() < 1e-12);
        let angle = Angle::from_radians(PI);
        assert!((angle.degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        assert!((Angle::from_degrees(-90.0).normalized().degrees() - 270.0).abs() < 1e-9);
        assert!((Angle::from_degrees(450.0).normalized().degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let sum = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
        assert!((sum.degrees() - 90.0).abs() < 1e-9);
        assert!(((-Angle::from_degrees(45.0)).degrees() + 45.0).abs() < 1e-9);
        assert!(((Angle::from_degrees(45.0) * 2.0).degrees() - 90.0).abs() < 1e-9);
    }
}
