//! Price type for catalog and cart amounts.
//!
//! Prices are plain decimal dollar amounts (`165`, `72.5`), serialized as a
//! bare JSON number so persisted carts keep the storefront's storage layout.
//! Whole amounts are written as integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A non-negative unit price or total, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    /// Zero dollars.
    pub const ZERO: Price = Price(0.0);

    /// Create a price, clamping negative or non-finite input to zero.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount)
        } else {
            Self::ZERO
        }
    }

    /// The amount in dollars.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0 * f64::from(quantity))
    }

    /// Format as a display string: whole amounts without cents (`$165`),
    /// fractional amounts with two places (`$72.50`).
    pub fn display(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("${:.0}", self.0)
        } else {
            format!("${:.2}", self.0)
        }
    }
}

/// Largest amount written as an integer; beyond this `f64` loses whole units.
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_WHOLE {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "price must be a non-negative number, got {}",
                amount
            )));
        }
        Ok(Price(amount))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0 + other.0)
    }
}

impl Sub for Price {
    type Output = Price;

    /// Saturates at zero.
    fn sub(self, other: Price) -> Price {
        Price::new(self.0 - other.0)
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Price(f64::from(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
