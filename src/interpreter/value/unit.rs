use std::{f64::consts::PI, fmt};

use crate::interpreter::value::quantity::Quantity;

/// The dimension of a quantity as powers of length and angle.
///
/// A plain number has both powers at zero; `3 m` has a length power of one
/// and `2 m * 4 m` a length power of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MeasurementUnit {
    /// Power of the length dimension (meters).
    pub length_power: i32,
    /// Power of the angle dimension (radians).
    pub angle_power:  i32,
}

impl MeasurementUnit {
    /// Creates a unit from its dimension powers.
    #[must_use]
    pub const fn new(length_power: i32, angle_power: i32) -> Self {
        Self { length_power,
               angle_power }
    }

    #[must_use]
    pub const fn scalar() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub const fn length() -> Self {
        Self::new(1, 0)
    }

    #[must_use]
    pub const fn area() -> Self {
        Self::new(2, 0)
    }

    #[must_use]
    pub const fn volume() -> Self {
        Self::new(3, 0)
    }

    #[must_use]
    pub const fn angle() -> Self {
        Self::new(0, 1)
    }

    /// Dimensionless.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        self.length_power == 0 && self.angle_power == 0
    }

    #[must_use]
    pub const fn is_length(self) -> bool {
        self.length_power == 1 && self.angle_power == 0
    }

    #[must_use]
    pub const fn is_area(self) -> bool {
        self.length_power == 2 && self.angle_power == 0
    }

    #[must_use]
    pub const fn is_volume(self) -> bool {
        self.length_power == 3 && self.angle_power == 0
    }

    #[must_use]
    pub const fn is_angle(self) -> bool {
        self.length_power == 0 && self.angle_power == 1
    }

    /// Both a length and an angle component are present.
    #[must_use]
    pub const fn is_mixed(self) -> bool {
        self.length_power != 0 && self.angle_power != 0
    }
}

impl fmt::Display for MeasurementUnit {
    /// Writes ` m`, ` m^2`, ` rad`, ... for every non-zero power; nothing for
    /// a scalar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, power) in [("m", self.length_power), ("rad", self.angle_power)] {
            match power {
                0 => {},
                1 => write!(f, " {symbol}")?,
                _ => write!(f, " {symbol}^{power}")?,
            }
        }
        Ok(())
    }
}

/// The unit suffixes accepted after a primary expression.
pub const UNIT_SUFFIXES: &[&str] = &["mm", "cm", "m", "km", "rad", "deg"];

/// Returns `true` when `word` is one of [`UNIT_SUFFIXES`].
#[must_use]
pub fn is_unit_suffix(word: &str) -> bool {
    UNIT_SUFFIXES.contains(&word)
}

/// Returns the quantity a unit suffix multiplies its operand by.
///
/// Lengths are expressed in meters and angles in radians, so `5 km` is
/// `5 * 1000 m` and `90 deg` is `90 * π/180 rad`.
///
/// ## Example
/// ```
/// use symcalc::interpreter::value::unit::unit_conversion;
///
/// let km = unit_conversion("km").unwrap();
/// assert_eq!(km.value, 1000.0);
/// assert!(km.unit.is_length());
/// assert!(unit_conversion("ft").is_none());
/// ```
#[must_use]
pub fn unit_conversion(name: &str) -> Option<Quantity> {
    let quantity = match name {
        "mm" => Quantity::length(0.001),
        "cm" => Quantity::length(0.01),
        "m" => Quantity::length(1.0),
        "km" => Quantity::length(1000.0),
        "rad" => Quantity::angle(1.0),
        "deg" => Quantity::angle(PI / 180.0),
        _ => return None,
    };
    Some(quantity)
}
