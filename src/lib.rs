//! # LOUD BRANDS Order Core
//!
//! > **Order management and financial reconciliation for a fashion
//! > storefront, built on resource-oriented actors.**
//!
//! This crate manages the storefront's catalog and orders with isolated
//! actor state, and carries the one piece of business logic that must
//! never drift: **order financial reconciliation**, computing an order's
//! canonical totals and auditing stored values against them.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Totals are a cache, never a source of truth
//! An order stores `subtotal` and `total`, but both are cached results of
//! a pure computation over the line items and delivery fee
//! ([`pricing::compute_totals`]). Every write path recomputes them in the
//! same message that mutates the order. Stored values can therefore only
//! drift on records imported from the legacy storefront, and those are
//! exactly what the audit ([`lifecycle::audit`]) exists to find.
//!
//! ### Detect, then fix. Never both at once
//! [`pricing::reconcile()`] is pure reporting: drift is a result to review,
//! not an error and not a trigger for silent correction. Overwriting a
//! stored total is a separate, explicit `Repair` action an operator
//! applies after reading the audit report.
//!
//! ### Why actors?
//! Each actor runs in its own Tokio task and processes messages
//! sequentially, so the store needs no locks and a totals repair can never
//! race an administrative correction to the same order. Multiple actors
//! still run in parallel.
//!
//! ### Exact money
//! All monetary arithmetic uses [`rust_decimal::Decimal`]; the legacy
//! store's binary floating point is where the drift came from. A small
//! absolute tolerance ([`pricing::TOLERANCE`]) absorbs the noise those
//! legacy records carry.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers both actors: message loop,
//! typed CRUD + actions, context injection. The [`framework::mock`]
//! module tests clients without spawning real actors.
//!
//! ### 2. The Money ([`pricing`])
//! [`pricing::compute_totals`] and [`pricing::reconcile()`]: pure, exact,
//! and the only place the totals formula lives.
//!
//! ### 3. The Implementation ([`order_actor`], [`product_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations:
//! checkout with stock reservation and rollback, the confirmation
//! workflow, stock actions, reconcile/repair.
//!
//! ### 4. The Interface ([`clients`])
//! Domain clients ([`clients::OrderClient`], [`clients::ProductClient`])
//! wrapping the generic `ResourceClient`.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`lifecycle::OrderSystem`] wires actors together; the audit batch job
//! and [`lifecycle::setup_tracing`] live here too.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod product_actor;
