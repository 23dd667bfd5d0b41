//! Candle consistency checks

use thiserror::Error;

use crate::data::Candle;

/// Errors reported by [`Candle::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum CandleError {
    /// A price field is NaN or infinite
    #[error("candle field `{0}` is not finite")]
    NonFinite(&'static str),

    /// The stated range is inverted
    #[error("high {high} is below low {low}")]
    HighBelowLow { high: f64, low: f64 },

    /// The body extends past the stated range
    #[error("body [{body_low}, {body_high}] extends outside range [{low}, {high}]")]
    BodyOutsideRange {
        body_low: f64,
        body_high: f64,
        low: f64,
        high: f64,
    },
}

impl Candle {
    /// Check the bar for internal consistency.
    ///
    /// Construction never validates; call this when the four prices come from
    /// an untrusted source. Negative and zero prices are allowed.
    pub fn validate(&self) -> Result<(), CandleError> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(CandleError::NonFinite(name));
            }
        }

        if self.high < self.low {
            return Err(CandleError::HighBelowLow {
                high: self.high,
                low: self.low,
            });
        }

        if self.body_low() < self.low || self.body_high() > self.high {
            return Err(CandleError::BodyOutsideRange {
                body_low: self.body_low(),
                body_high: self.body_high(),
                low: self.low,
                high: self.high,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid() {
        let candle = Candle::new(100.0, 105.0, 95.0, 102.0);
        assert!(candle.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_prices_allowed() {
        // Spreads and some futures trade below zero
        let candle = Candle::new(-2.0, 1.0, -3.0, -1.0);
        assert!(candle.validate().is_ok());
    }

    #[test]
    fn test_validate_nan() {
        let candle = Candle::new(100.0, f64::NAN, 95.0, 102.0);
        assert_eq!(candle.validate(), Err(CandleError::NonFinite("high")));
    }

    #[test]
    fn test_validate_high_below_low() {
        let candle = Candle::new(95.0, 90.0, 95.0, 95.0);
        assert_eq!(
            candle.validate(),
            Err(CandleError::HighBelowLow {
                high: 90.0,
                low: 95.0
            })
        );
    }

    #[test]
    fn test_validate_body_outside_range() {
        let candle = Candle::new(100.0, 105.0, 95.0, 110.0);
        assert_eq!(
            candle.validate(),
            Err(CandleError::BodyOutsideRange {
                body_low: 100.0,
                body_high: 110.0,
                low: 95.0,
                high: 105.0
            })
        );
    }
}
