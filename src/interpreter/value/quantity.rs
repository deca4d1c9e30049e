use std::fmt;

use crate::{
    error::{Error, ErrorCode, Result},
    interpreter::value::unit::MeasurementUnit,
    location::Location,
    util::num::{f64_to_i32_checked, is_integer, is_near},
};

/// A number together with its physical dimension.
///
/// Every evaluation yields a `Quantity`. Arithmetic between quantities checks
/// and combines dimensions; the errors it raises carry
/// [`Location::SYNTHETIC`] and are attributed to an operand by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    /// The dimension of the value.
    pub unit:  MeasurementUnit,
    /// The magnitude in base units (meters, radians).
    pub value: f64,
}

impl Quantity {
    #[must_use]
    pub const fn new(unit: MeasurementUnit, value: f64) -> Self {
        Self { unit, value }
    }

    /// A dimensionless number.
    ///
    /// ## Example
    /// ```
    /// use symcalc::interpreter::value::quantity::Quantity;
    ///
    /// assert!(Quantity::scalar(2.0).is_scalar());
    /// ```
    #[must_use]
    pub const fn scalar(value: f64) -> Self {
        Self::new(MeasurementUnit::scalar(), value)
    }

    /// A length in meters.
    #[must_use]
    pub const fn length(value: f64) -> Self {
        Self::new(MeasurementUnit::length(), value)
    }

    /// An angle in radians.
    #[must_use]
    pub const fn angle(value: f64) -> Self {
        Self::new(MeasurementUnit::angle(), value)
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.unit.is_scalar()
    }

    #[must_use]
    pub const fn is_length(&self) -> bool {
        self.unit.is_length()
    }

    #[must_use]
    pub const fn is_area(&self) -> bool {
        self.unit.is_area()
    }

    #[must_use]
    pub const fn is_volume(&self) -> bool {
        self.unit.is_volume()
    }

    #[must_use]
    pub const fn is_angle(&self) -> bool {
        self.unit.is_angle()
    }

    #[must_use]
    pub const fn is_mixed(&self) -> bool {
        self.unit.is_mixed()
    }

    /// Whether this is a dimensionless number within epsilon of `value`.
    #[must_use]
    pub fn is_scalar_near(&self, value: f64) -> bool {
        self.is_scalar() && is_near(self.value, value)
    }

    /// Unary `+`.
    #[must_use]
    pub const fn identity(self) -> Self {
        self
    }

    /// Unary `-`; the dimension is kept.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(self.unit, -self.value)
    }

    /// Adds two quantities of the same dimension.
    ///
    /// ## Example
    /// ```
    /// use symcalc::{error::ErrorCode, interpreter::value::quantity::Quantity};
    ///
    /// let sum = Quantity::length(3.0).add(Quantity::length(2.0)).unwrap();
    /// assert_eq!(sum, Quantity::length(5.0));
    ///
    /// let mismatch = Quantity::length(3.0).add(Quantity::scalar(2.0)).unwrap_err();
    /// assert_eq!(mismatch.code, ErrorCode::InvalidBinaryOperation);
    /// ```
    pub fn add(self, rhs: Self) -> Result<Self> {
        let unit = same_dimension(self.unit, rhs.unit)?;
        Ok(Self::new(unit, self.value + rhs.value))
    }

    /// Subtracts two quantities of the same dimension.
    pub fn subtract(self, rhs: Self) -> Result<Self> {
        let unit = same_dimension(self.unit, rhs.unit)?;
        Ok(Self::new(unit, self.value - rhs.value))
    }

    /// Multiplies values and adds dimension powers.
    ///
    /// ## Example
    /// ```
    /// use symcalc::{error::ErrorCode, interpreter::value::quantity::Quantity};
    ///
    /// let area = Quantity::length(2.0).multiply(Quantity::length(3.0)).unwrap();
    /// assert!(area.is_area());
    ///
    /// let huge = Quantity::length(1.0).power(Quantity::scalar(2e9)).unwrap();
    /// assert_eq!(huge.multiply(huge).unwrap_err().code, ErrorCode::DimensionOverflow);
    /// ```
    pub fn multiply(self, rhs: Self) -> Result<Self> {
        let unit = combine(self.unit, rhs.unit, i32::checked_add)?;
        Ok(Self::new(unit, self.value * rhs.value))
    }

    /// Divides values and subtracts dimension powers.
    ///
    /// A divisor within machine epsilon of zero is a `DivisionByZero` error,
    /// whatever its dimension.
    pub fn divide(self, rhs: Self) -> Result<Self> {
        if is_near(rhs.value, 0.0) {
            return Err(Error::new(ErrorCode::DivisionByZero, Location::SYNTHETIC, "Division by zero."));
        }
        let unit = combine(self.unit, rhs.unit, i32::checked_sub)?;
        Ok(Self::new(unit, self.value / rhs.value))
    }

    /// Floating-point remainder of two quantities of the same dimension.
    pub fn modulo(self, rhs: Self) -> Result<Self> {
        if self.unit != rhs.unit {
            return Err(Error::new(ErrorCode::ExpectedSameUnit,
                                  Location::SYNTHETIC,
                                  format!("Expected operands with identical units, found{} and{}.",
                                          describe(self.unit),
                                          describe(rhs.unit))));
        }
        Ok(Self::new(self.unit, self.value % rhs.value))
    }

    /// Raises to a dimensionless integer power, scaling the dimension powers.
    ///
    /// ## Example
    /// ```
    /// use symcalc::interpreter::value::quantity::Quantity;
    ///
    /// let area = Quantity::length(3.0).power(Quantity::scalar(2.0)).unwrap();
    /// assert!(area.is_area());
    /// assert_eq!(area.value, 9.0);
    ///
    /// assert!(Quantity::length(3.0).power(Quantity::scalar(0.5)).is_err());
    /// ```
    pub fn power(self, exponent: Self) -> Result<Self> {
        let scale = if exponent.is_scalar() && is_integer(exponent.value) {
            f64_to_i32_checked(exponent.value)
        } else {
            None
        };
        let Some(scale) = scale else {
            return Err(Error::new(ErrorCode::ScalarIntegerExpectedAsPower,
                                  Location::SYNTHETIC,
                                  "Scalar integer expected as power."));
        };

        let unit = combine(self.unit, MeasurementUnit::new(scale, scale), i32::checked_mul)?;
        Ok(Self::new(unit, self.value.powf(exponent.value)))
    }
}

fn combine(lhs: MeasurementUnit,
           rhs: MeasurementUnit,
           op: impl Fn(i32, i32) -> Option<i32>)
           -> Result<MeasurementUnit> {
    let (Some(length_power), Some(angle_power)) =
        (op(lhs.length_power, rhs.length_power), op(lhs.angle_power, rhs.angle_power))
    else {
        return Err(Error::new(ErrorCode::DimensionOverflow,
                              Location::SYNTHETIC,
                              "Dimension power out of range."));
    };
    Ok(MeasurementUnit::new(length_power, angle_power))
}

fn same_dimension(lhs: MeasurementUnit, rhs: MeasurementUnit) -> Result<MeasurementUnit> {
    if lhs != rhs {
        return Err(Error::new(ErrorCode::InvalidBinaryOperation,
                              Location::SYNTHETIC,
                              format!("Invalid binary operation: dimensions{} and{} differ.",
                                      describe(lhs),
                                      describe(rhs))));
    }
    Ok(lhs)
}

fn describe(unit: MeasurementUnit) -> String {
    if unit.is_scalar() { " scalar".to_string() } else { unit.to_string() }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
