//! Candlestick-RS: OHLC candlestick geometry primitives
//!
//! This crate models a single candlestick (one period's open/high/low/close
//! price bar) and answers the geometric questions commonly asked of one:
//!
//! - **Containment**: does a price fall inside the body, or anywhere in the bar?
//! - **Sizing**: body height, full height, upper and lower wick
//! - **Direction**: red (falling) vs green (rising) classification
//!
//! The bar is a plain `Copy` value type. Construction accepts any four finite
//! reals without validation; [`data::Candle::validate`] is available for bars
//! coming from untrusted sources.
//!
//! # Example
//!
//! ```
//! use candlestick_rs::prelude::*;
//!
//! let candle = Candle::new(0.0, 5.0, -1.0, 3.0);
//! assert!(candle.body_contains(1.2));
//! assert!(candle.contains(-0.5));
//! assert_eq!(candle.full_size(), 6.0);
//! assert!(!candle.is_red());
//! ```

pub mod data;

// Re-export commonly used types
pub mod prelude {
    pub use crate::data::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
