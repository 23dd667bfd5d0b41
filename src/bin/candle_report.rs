//! Console report of candle geometry for a fixed set of sample bars.

use candlestick_rs::prelude::*;
use tracing::info;

fn direction(candle: &Candle) -> &'static str {
    if candle.is_red() {
        "red"
    } else if candle.is_green() {
        "green"
    } else {
        "flat"
    }
}

fn report(label: &str, candle: &Candle) {
    info!(
        label,
        direction = direction(candle),
        body_size = candle.body_size(),
        full_size = candle.full_size(),
        upper_wick = candle.upper_wick(),
        lower_wick = candle.lower_wick(),
        "candle geometry"
    );
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Candle Geometry Report ===\n");

    let bars = [
        ("green with wicks", Candle::new(0.0, 5.0, -1.0, 3.0)),
        ("red with wicks", Candle::new(3.0, 5.0, -1.0, 0.0)),
        ("zero body", Candle::new(1.0, 5.0, -1.0, 1.0)),
        ("degenerate", Candle::new(1.0, 1.0, 1.0, 1.0)),
        ("no wicks", Candle::new(0.0, 3.0, 0.0, 3.0)),
    ];

    for (label, candle) in &bars {
        candle
            .validate()
            .with_context(|| format!("inconsistent bar: {}", label))?;
        report(label, candle);
    }

    println!("\nreported {} bars", bars.len());

    Ok(())
}
