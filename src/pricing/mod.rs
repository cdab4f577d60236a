//! Order financial arithmetic.
//!
//! The one piece of business logic in this system that must never drift:
//! computing an order's canonical totals and checking stored values
//! against them.
//!
//! - [`compute_totals`] - canonical subtotal/total from line items and
//!   delivery fee, in exact decimal arithmetic
//! - [`reconcile()`] - compare an order's stored totals against
//!   recomputation; pure reporting
//!
//! Repair, the act of overwriting stored totals with their canonical
//! recomputation, deliberately lives elsewhere, as an explicit order-actor action
//! ([`OrderAction::Repair`](crate::order_actor::OrderAction)). Detect and
//! fix stay separate so an operator can review drift before bulk
//! correction.

pub mod reconcile;
pub mod totals;

pub use reconcile::*;
pub use totals::*;
