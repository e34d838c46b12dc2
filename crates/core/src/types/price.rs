//! Per-unit price type using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is not a valid number.
    #[error("price is not a valid number: {input:?}")]
    Invalid {
        /// The raw input that failed to parse.
        input: String,
    },
    /// The amount is below zero.
    #[error("price cannot be negative: {amount}")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A per-unit, currency-agnostic price.
///
/// Prices are exact decimals, never floats, so totals do not accumulate
/// binary rounding error. A `Price` is always non-negative; construction
/// rejects negative amounts and unparseable input rather than clamping.
///
/// ## Examples
///
/// ```
/// use maison_core::Price;
///
/// let price = Price::parse("9.99").unwrap();
/// assert_eq!(price.to_string(), "9.99");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("not-a-number").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Parse a `Price` from a string, as read from a markup attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] if the input is not a number and
    /// [`PriceError::Negative`] if it parses below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s.trim().parse().map_err(|_| PriceError::Invalid {
            input: s.to_owned(),
        })?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    /// Renders with two decimal places, e.g. `9.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Persisted as a plain JSON number to keep the blob engine-agnostic.
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("9.99").unwrap().amount(), dec!(9.99));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
        assert_eq!(Price::parse(" 12.5 ").unwrap().amount(), dec!(12.5));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Price::parse("abc"),
            Err(PriceError::Invalid { .. })
        ));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid { .. })));
        assert!(matches!(
            Price::parse("NaN"),
            Err(PriceError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(
            Price::parse("-0.01"),
            Err(PriceError::Negative { .. })
        ));
        assert!(matches!(
            Price::new(dec!(-1)),
            Err(PriceError::Negative { .. })
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        // "-0" parses to a negatively-signed zero; treat it as zero.
        assert_eq!(Price::parse("-0").unwrap().amount(), Decimal::ZERO);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::parse("9.9").unwrap().to_string(), "9.90");
        assert_eq!(Price::parse("10").unwrap().to_string(), "10.00");
        assert_eq!(Price::parse("9.999").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_serde_json_number() {
        let price = Price::parse("9.99").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "9.99");

        let parsed: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-9.99").is_err());
    }
}
