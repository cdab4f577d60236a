//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. The subscriber uses a compact format that hides module paths
//! (actors tag their lines with an `entity_type` field instead) and is
//! filtered through the `RUST_LOG` environment variable.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=loud_orders::framework=debug cargo run
//! ```
//!
//! At `info`, an order placement followed by an audit reads like:
//!
//! ```text
//! INFO Created product_id="product_1" size=1
//! INFO Sending create_order to actor
//! INFO Action ok product_id="product_1"
//! INFO Created order_id="order_1" size=1
//! INFO Auditing stored order totals count=2
//! WARN Stored totals drifted order_id="order_2" ...
//! INFO Audit finished consistent=1 inconsistent=1 failed=0
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - actors tag entity_type instead
        .compact()
        .init();
}
