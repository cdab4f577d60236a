//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle**: starting, wiring, and shutting down actors
//! - **Batch jobs**: the operator-invoked totals audit and bulk repair
//! - **Observability setup**: initializing tracing
//!
//! # Main Components
//!
//! - [`OrderSystem`] - spins up the actors and wires their dependencies
//! - [`run_audit`] / [`repair_orders`] - the reconciliation batch job
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod audit;
pub mod order_system;
pub mod tracing;

pub use self::audit::*;
pub use self::order_system::*;
pub use self::tracing::*;
