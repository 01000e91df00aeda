/*!
a complex number abstraction

Type `Cx` can use the `+`, `-`, `*`, `/`, and unary `-` operators, with
either another `Cx` or a plain `f64` on either side, and can be raised to
real or complex powers through `.pow()` (or `num_traits::Pow`). The type
also features constructors from Cartesian (rectangular) and polar
coordinates, and accessors to get _|z|_ and _𝜑(z)_.

Components are rounded to `cmp::SIGNIFICANCE_DIGITS` decimal places when a
value is made, and equality is tolerant (see `cmp::is_close()`). Because
tolerant equality isn't transitive, `Cx` is neither `Eq` nor `Hash`; don't
use it as a key.

Multiplication, powers, and division all go the long way around, through
polar form. A zero operand has no phase, so its products come out NaN.
*/

#![allow(clippy::from_over_into)]

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use ::num_traits::Pow;
use ::serde_derive::{Deserialize, Serialize};
use ::tracing::debug;

use crate::cmp::{is_close, is_zero, round_digits};
use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Cx {
    re: f64,
    im: f64,
}

/**
The right-hand side of an arithmetic operation: either another complex
value or a plain real number. Everything that converts `Into<Operand>`
can appear to the right of a `Cx` operator.
*/
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operand {
    Complex(Cx),
    Real(f64),
}

impl Cx {
    pub const ZERO: Cx = Cx { re: 0.0, im: 0.0 };
    pub const ONE: Cx = Cx { re: 1.0, im: 0.0 };
    pub const I: Cx = Cx { re: 0.0, im: 1.0 };

    /// The point at infinity-infinity. Under tolerant equality this stands
    /// for every value whose components are both infinite.
    pub const INFINITY: Cx = Cx { re: f64::INFINITY, im: f64::INFINITY };

    pub fn new(re: f64, im: f64) -> Cx {
        Cx {
            re: round_digits(re),
            im: round_digits(im),
        }
    }

    pub fn real(re: f64) -> Cx {
        Cx::new(re, 0.0)
    }

    pub fn from_polar(r: f64, theta: f64) -> Cx {
        Cx::new(r * theta.cos(), r * theta.sin())
    }

    pub fn re(&self) -> f64 { self.re }

    pub fn im(&self) -> f64 { self.im }

    pub fn sqmod(&self) -> f64 {
        (self.re * self.re) + (self.im * self.im)
    }

    pub fn magnitude(&self) -> f64 {
        self.sqmod().sqrt()
    }

    /** Same as `.magnitude()`. */
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /**
    Return the angle of this value in polar form, as given by `atan2`, in
    (-π, π]. Components never hold a negative zero, so values on the
    negative real axis get π.

    The origin and the point at infinity have no meaningful angle, so for
    anything equal to `0.0` or to `Cx::INFINITY` this returns NaN instead.
    */
    pub fn phase(&self) -> f64 {
        if *self == 0.0 || *self == Cx::INFINITY {
            f64::NAN
        } else {
            self.im.atan2(self.re)
        }
    }

    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.phase())
    }

    pub fn conjugate(&self) -> Cx {
        Cx::new(self.re, -self.im)
    }

    /** _z^p_ for real _p_: raise the magnitude, scale the angle. */
    pub fn real_power(self, p: f64) -> Cx {
        let (r, theta) = self.to_polar();
        Cx::from_polar(r.powf(p), theta * p)
    }

    /**
    _z^w_ for complex _w_.

    With _z_ = (_r_, 𝜃) in polar form and _w_ = _c_ + _di_, expanding
    _exp(w ln z)_ gives

    ```text
    z^w = polar(r^c * e^(-d𝜃), c𝜃 + d ln r)
    ```
    */
    pub fn complex_power(self, w: Cx) -> Cx {
        let (r, theta) = self.to_polar();
        let r_pow = r.powf(w.re) * (-w.im * theta).exp();
        let theta_pow = (w.re * theta) + (w.im * r.ln());
        Cx::from_polar(r_pow, theta_pow)
    }

    pub fn pow<T: Into<Operand>>(self, exponent: T) -> Cx {
        let exponent: Operand = exponent.into();
        match exponent {
            Operand::Complex(w) => self.complex_power(w),
            Operand::Real(p) => self.real_power(p),
        }
    }

    /**
    Divide by `divisor`, multiplying by its inverse (the divisor raised to
    the power -1).

    Fails with `Error::DivisionByZero` if the divisor is equal to zero,
    tolerance included; the check happens before the inverse is taken.
    */
    pub fn checked_div<T: Into<Operand>>(self, divisor: T) -> Result<Cx> {
        let divisor: Operand = divisor.into();
        let inverse = match divisor {
            Operand::Real(k) if is_zero(k) => {
                return Err(self.reject_divisor(Cx::real(k)));
            },
            Operand::Complex(z) if z == 0.0 => {
                return Err(self.reject_divisor(z));
            },
            Operand::Real(k) => Operand::Real(k.powf(-1.0)),
            Operand::Complex(z) => Operand::Complex(z.real_power(-1.0)),
        };

        Ok(self * inverse)
    }

    fn reject_divisor(self, divisor: Cx) -> Error {
        debug!(dividend = %self, divisor = %divisor, "rejected division by zero");
        Error::DivisionByZero(divisor)
    }
}

impl fmt::Display for Cx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if is_zero(self.im) {
            write!(f, "{}", self.re)
        } else if is_zero(self.re) {
            write!(f, "{}i", self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl PartialEq for Cx {
    fn eq(&self, other: &Cx) -> bool {
        is_close(self.re, other.re) && is_close(self.im, other.im)
    }
}

impl PartialEq<f64> for Cx {
    fn eq(&self, other: &f64) -> bool {
        is_close(self.re, *other) && is_zero(self.im)
    }
}

impl PartialEq<Cx> for f64 {
    fn eq(&self, other: &Cx) -> bool {
        other == self
    }
}

impl From<Cx> for Operand {
    fn from(z: Cx) -> Operand { Operand::Complex(z) }
}

impl From<f64> for Operand {
    fn from(k: f64) -> Operand { Operand::Real(k) }
}

impl Neg for Operand {
    type Output = Operand;

    fn neg(self) -> Self::Output {
        match self {
            Operand::Complex(z) => Operand::Complex(-z),
            Operand::Real(k) => Operand::Real(-k),
        }
    }
}

impl<T: Into<Operand>> Add<T> for Cx {
    type Output = Self;

    fn add(self, other: T) -> Self::Output {
        let other: Operand = other.into();
        match other {
            Operand::Complex(z) => Cx::new(self.re + z.re, self.im + z.im),
            Operand::Real(k) => Cx::new(self.re + k, self.im),
        }
    }
}

impl<T: Into<Operand>> Sub<T> for Cx {
    type Output = Self;

    fn sub(self, other: T) -> Self::Output {
        let other: Operand = other.into();
        self + (-other)
    }
}

impl<T: Into<Operand>> Mul<T> for Cx {
    type Output = Self;

    /*
    With z1 = r1(cos t1 + i sin t1) and z2 = r2(cos t2 + i sin t2), the
    product is r1r2(cos(t1 + t2) + i sin(t1 + t2)).
    */
    fn mul(self, other: T) -> Self::Output {
        let other: Operand = other.into();
        match other {
            Operand::Complex(z) => {
                let (r1, theta1) = self.to_polar();
                let (r2, theta2) = z.to_polar();
                Cx::from_polar(r1 * r2, theta1 + theta2)
            },
            Operand::Real(k) => Cx::new(self.re * k, self.im * k),
        }
    }
}

impl<T: Into<Operand>> Div<T> for Cx {
    type Output = Result<Cx>;

    fn div(self, other: T) -> Self::Output {
        self.checked_div(other)
    }
}

impl<T: Into<Operand>> Pow<T> for Cx {
    type Output = Cx;

    fn pow(self, exponent: T) -> Self::Output {
        Cx::pow(self, exponent)
    }
}

impl Neg for Cx {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Cx::new(-self.re, -self.im)
    }
}

impl Add<Cx> for f64 {
    type Output = Cx;

    fn add(self, z: Cx) -> Cx { z + self }
}

// NOTE: `k - z` evaluates to `z - k`, not `-(z - k)`. Existing results
// depend on this, so it stays until callers are audited.
impl Sub<Cx> for f64 {
    type Output = Cx;

    fn sub(self, z: Cx) -> Cx { z - self }
}

impl Mul<Cx> for f64 {
    type Output = Cx;

    fn mul(self, z: Cx) -> Cx { z * self }
}

impl Div<Cx> for f64 {
    type Output = Result<Cx>;

    fn div(self, z: Cx) -> Result<Cx> { Cx::real(self) / z }
}

impl Pow<Cx> for f64 {
    type Output = Cx;

    fn pow(self, z: Cx) -> Cx { Cx::real(self).pow(z) }
}

impl From<f64> for Cx {
    fn from(re: f64) -> Cx { Cx::real(re) }
}

impl From<[f64; 2]> for Cx {
    fn from(a: [f64; 2]) -> Cx { Cx::new(a[0], a[1]) }
}

impl Into<[f64; 2]> for Cx {
    fn into(self) -> [f64; 2] {
        [self.re, self.im]
    }
}
