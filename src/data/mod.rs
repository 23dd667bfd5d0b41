//! Candle data module
//!
//! Holds the OHLC bar type, its geometry queries, and consistency checks.

pub mod candle;
pub mod validation;

pub use candle::*;
pub use validation::*;
