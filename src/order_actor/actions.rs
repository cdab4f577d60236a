//! Custom actions for the Order actor.
//!
//! Status transitions and the totals reconcile/repair pair. Reconcile is
//! read-only; repair is the one write path allowed to overwrite stored
//! totals, and it only ever writes the canonical recomputation.

use crate::model::OrderStatus;
use crate::pricing::{Reconciliation, Totals};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// A confirmation agent accepts a pending order.
    Confirm,
    /// Calls the order off and releases its reserved stock.
    Cancel,
    /// Checks stored totals against recomputation. Read-only.
    Reconcile,
    /// Overwrites stored totals with their canonical recomputation.
    Repair,
}

/// Results from OrderActions - variants match 1:1 with OrderAction.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// Result from Confirm - the new status.
    Confirm(OrderStatus),
    /// Result from Cancel - the new status.
    Cancel(OrderStatus),
    /// Result from Reconcile - the reconciliation outcome.
    Reconcile(Reconciliation),
    /// Result from Repair - the totals that were applied.
    Repair(Totals),
}
