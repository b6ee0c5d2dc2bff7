//! Type-safe price representation using decimal arithmetic.
//!
//! Every price on the site is in US dollars, so the type carries no
//! currency code.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative dollar amount.
///
/// ## Examples
///
/// ```
/// use mb_studio_core::Price;
///
/// assert_eq!(Price::parse_label("$24.99").to_string(), "$24.99");
/// assert_eq!(Price::parse_label("Call for pricing"), Price::ZERO);
/// assert_eq!(Price::from_cents(1000).times(2).to_string(), "$20.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal dollar amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Read the first `$<digits>[.<digits>]` amount out of display text.
    ///
    /// Text without such an amount reads as [`Price::ZERO`]. Grouping
    /// separators end the number, so `"$1,200"` reads as one dollar.
    #[must_use]
    pub fn parse_label(text: &str) -> Self {
        text.match_indices('$')
            .find_map(|(pos, _)| leading_amount(text.get(pos + 1..)?))
            .and_then(|digits| digits.parse::<Decimal>().ok())
            .map_or(Self::ZERO, Self)
    }

    /// The dollar amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This price multiplied by a quantity, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }
}

/// Returns the `\d+\.?\d*` prefix of `rest`, if it starts with a digit.
fn leading_amount(rest: &str) -> Option<&str> {
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    if rest.as_bytes().get(end) == Some(&b'.') {
        end += 1;
        end += rest
            .get(end..)
            .map_or(0, |frac| frac.bytes().take_while(u8::is_ascii_digit).count());
    }

    // "12." is a valid match for the pattern but not for the decimal parser
    rest.get(..end).map(|s| s.trim_end_matches('.'))
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${cents:.2}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_plain() {
        assert_eq!(Price::parse_label("$45"), Price::from_cents(4500));
        assert_eq!(Price::parse_label("$24.99"), Price::from_cents(2499));
    }

    #[test]
    fn test_parse_label_embedded() {
        assert_eq!(
            Price::parse_label("Lash Serum  $32.50 / bottle"),
            Price::from_cents(3250)
        );
    }

    #[test]
    fn test_parse_label_skips_bare_dollar_sign() {
        assert_eq!(Price::parse_label("$ sale $18"), Price::from_cents(1800));
    }

    #[test]
    fn test_parse_label_trailing_dot() {
        assert_eq!(Price::parse_label("$12."), Price::from_cents(1200));
    }

    #[test]
    fn test_parse_label_grouping_separator_stops_number() {
        assert_eq!(Price::parse_label("$1,200"), Price::from_cents(100));
    }

    #[test]
    fn test_parse_label_malformed_is_zero() {
        assert_eq!(Price::parse_label(""), Price::ZERO);
        assert_eq!(Price::parse_label("Free"), Price::ZERO);
        assert_eq!(Price::parse_label("45.00"), Price::ZERO);
        assert_eq!(Price::parse_label("$"), Price::ZERO);
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::from_cents(2500).to_string(), "$25.00");
        assert_eq!(Price::new(Decimal::new(19_999, 3)).unwrap().to_string(), "$20.00");
    }

    #[test]
    fn test_display_rounds_half_cents_up() {
        assert_eq!(Price::parse_label("$0.125").to_string(), "$0.13");
        assert_eq!(Price::parse_label("$2.675").to_string(), "$2.68");
        assert_eq!(Price::parse_label("$0.124").to_string(), "$0.12");
    }

    #[test]
    fn test_huge_label_saturates_instead_of_overflowing() {
        let huge = Price::parse_label("$79228162514264337593543950335");
        assert_eq!(huge.amount(), Decimal::MAX);
        assert_eq!(huge.times(2).amount(), Decimal::MAX);
        assert_eq!((huge + huge).amount(), Decimal::MAX);
        assert_eq!([huge, huge, Price::from_cents(1)].into_iter().sum::<Price>(), huge);
        assert!(huge.to_string().starts_with("$79228162514264337593543950335"));
    }

    #[test]
    fn test_sum_and_times() {
        let total: Price = [Price::from_cents(1000).times(2), Price::from_cents(500)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "$25.00");
    }
}
