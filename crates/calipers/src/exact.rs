//! Exact rational scalar used by every geometric predicate.
//!
//! Purpose
//! - Wrap `num_rational::BigRational` behind a small value type so that no
//!   float ever reaches a turn test or an area comparison.
//! - Keep division fallible: there is no `/` operator, only `checked_div`.
//!
//! Invariants
//! - Always in lowest terms with a positive denominator (maintained by
//!   `Ratio::new`), so derived `Eq`/`Hash`/`Ord` agree with rational value.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{GeomError, Result};

/// Arbitrary-precision rational number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact(BigRational);

impl Exact {
    /// `numer / denom`, reduced. Fails on a zero denominator.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    #[inline]
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    #[inline]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.0.is_positive() {
            1
        } else if self.0.is_negative() {
            -1
        } else {
            0
        }
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Exact quotient; `DivisionByZero` when `rhs == 0`.
    pub fn checked_div(&self, rhs: &Exact) -> Result<Exact> {
        if rhs.is_zero() {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// `self / 2`.
    #[inline]
    pub fn halve(&self) -> Exact {
        Self(&self.0 / BigRational::from_integer(BigInt::from(2)))
    }

    /// Square root if it is itself rational, e.g. `9/4 -> 3/2`; `None` for
    /// negative values and non-squares.
    pub fn sqrt_exact(&self) -> Option<Exact> {
        if self.0.is_negative() {
            return None;
        }
        // Lowest terms: the ratio is a square iff numerator and denominator are.
        let n = self.0.numer().sqrt();
        let d = self.0.denom().sqrt();
        if &(&n * &n) == self.0.numer() && &(&d * &d) == self.0.denom() {
            Some(Self(BigRational::new(n, d)))
        } else {
            None
        }
    }

    /// Lossy conversion for display and plotting only.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl From<BigRational> for Exact {
    fn from(r: BigRational) -> Self {
        Self(r)
    }
}

impl From<BigInt> for Exact {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Exact {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Exact {
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts `n`, `n/d` and finite decimals such as `-12.375`.
impl FromStr for Exact {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        if t.is_empty() {
            return Err(GeomError::parse(s, "empty number"));
        }
        if let Some((n, d)) = t.split_once('/') {
            let n = parse_int(s, n)?;
            let d = parse_int(s, d)?;
            return Exact::new(n, d);
        }
        if let Some((int_part, frac_part)) = t.split_once('.') {
            return parse_decimal(s, int_part, frac_part);
        }
        Ok(Exact::from_integer(parse_int(s, t)?))
    }
}

fn parse_int(whole: &str, digits: &str) -> Result<BigInt> {
    let digits = digits.trim();
    let unsigned = digits.strip_prefix(['-', '+']).unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GeomError::parse(whole, format!("{digits:?} is not an integer")));
    }
    digits
        .parse::<BigInt>()
        .map_err(|e| GeomError::parse(whole, e.to_string()))
}

fn parse_decimal(whole: &str, int_part: &str, frac_part: &str) -> Result<Exact> {
    let negative = int_part.starts_with('-');
    let int_digits = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if frac_part.is_empty() || !all_digits(int_digits) || !all_digits(frac_part) {
        return Err(GeomError::parse(whole, "malformed decimal"));
    }
    let mut digits = String::with_capacity(int_digits.len() + frac_part.len() + 1);
    if negative {
        digits.push('-');
    }
    digits.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    digits.push_str(frac_part);
    let numer = parse_int(whole, &digits)?;
    let denom = num_traits::pow(BigInt::from(10), frac_part.len());
    Exact::new(numer, denom)
}

impl Neg for Exact {
    type Output = Exact;
    #[inline]
    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl Neg for &Exact {
    type Output = Exact;
    #[inline]
    fn neg(self) -> Exact {
        Exact(-&self.0)
    }
}

macro_rules! forward_binop {
    ($tr:ident, $method:ident) => {
        impl $tr<Exact> for Exact {
            type Output = Exact;
            #[inline]
            fn $method(self, rhs: Exact) -> Exact {
                Exact(self.0.$method(rhs.0))
            }
        }
        impl<'a> $tr<&'a Exact> for &'a Exact {
            type Output = Exact;
            #[inline]
            fn $method(self, rhs: &'a Exact) -> Exact {
                Exact((&self.0).$method(&rhs.0))
            }
        }
        impl<'a> $tr<&'a Exact> for Exact {
            type Output = Exact;
            #[inline]
            fn $method(self, rhs: &'a Exact) -> Exact {
                Exact(self.0.$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
