//! Order demo binary
//!
//! Builds the sample order, renders its invoices and walks it through the
//! lifecycle, then does the same with the naive legacy order.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-demo
//! ORDER_DEMO_FORMAT=json ORDER_DEMO_DISCOUNT=seasonal cargo run --bin order-demo
//! RUST_LOG=order_patterns_core=debug cargo run --bin order-demo
//! ```

use anyhow::Context;
use order_demo::config::DemoConfig;
use order_demo::{legacy, run};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_demo=info,order_patterns_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    info!(?config, "Starting order demo");

    println!("=== Refactored Order ===\n");
    let mut stdout = std::io::stdout().lock();
    let reports = run(&config, &mut stdout)?;
    drop(stdout);

    for report in &reports {
        info!(
            processed = %report.processed,
            cancelled = %report.cancelled,
            status = %report.final_status,
            "Sample run finished"
        );
    }

    println!("=== Legacy Order ===\n");
    let legacy = legacy::sample_run();
    println!(
        "\nLegacy status: {} (cached total {}, {} products)",
        legacy.status,
        legacy.total_price,
        legacy.products.len()
    );

    Ok(())
}
