use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Order;

use super::totals::{compute_totals, PricingError};

/// Absolute drift, in currency units, still treated as consistent.
///
/// Legacy records were priced under binary floating point; this tolerance
/// absorbs their representation noise (a stored 100.00 against a canonical
/// 99.995 is not drift). Anything beyond it is a defect to report, and only
/// the explicit repair action may correct it. Orders written by this system
/// always match exactly, so the tolerance only ever works on imports.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Outcome of checking an order's stored totals against recomputation.
///
/// `Inconsistent` is a normal, expected result: drift to report, not an
/// error to throw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Reconciliation {
    /// Stored totals match the canonical computation within [`TOLERANCE`].
    Consistent,
    /// Stored totals drifted beyond [`TOLERANCE`].
    Inconsistent {
        stored_subtotal: Decimal,
        stored_total: Decimal,
        canonical_subtotal: Decimal,
        canonical_total: Decimal,
        /// Absolute difference between stored and canonical total (the
        /// amount the customer was actually over- or under-charged).
        delta: Decimal,
    },
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent)
    }
}

/// Checks an order's stored `subtotal`/`total` against the canonical
/// computation over its items and delivery fee.
///
/// Pure reporting: reads the order, writes nothing. Malformed line items
/// (the same rejections as [`compute_totals`]) are an error, not a
/// reconciliation outcome; they indicate corruption upstream of any
/// totals question.
pub fn reconcile(order: &Order) -> Result<Reconciliation, PricingError> {
    let canonical = compute_totals(&order.items, order.delivery_fee)?;

    let subtotal_drift = (order.subtotal - canonical.subtotal).abs();
    let total_drift = (order.total - canonical.total).abs();

    if subtotal_drift <= TOLERANCE && total_drift <= TOLERANCE {
        Ok(Reconciliation::Consistent)
    } else {
        Ok(Reconciliation::Inconsistent {
            stored_subtotal: order.subtotal,
            stored_total: order.total,
            canonical_subtotal: canonical.subtotal,
            canonical_total: canonical.total,
            delta: total_drift,
        })
    }
}
