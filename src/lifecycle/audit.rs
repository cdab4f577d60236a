//! The operator-invoked totals audit.
//!
//! [`run_audit`] reconciles every stored order and reports drift without
//! touching anything; [`repair_orders`] applies canonical totals to an
//! explicit selection. The two are deliberately separate calls: bulk
//! correction is a destructive, auditable action an operator triggers
//! after reviewing the report, never a side effect of reading.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::clients::{ActorClient, OrderClient};
use crate::order_actor::OrderError;
use crate::pricing::Reconciliation;

/// One order whose stored totals drifted beyond tolerance.
#[derive(Debug, Clone, Serialize)]
pub struct DriftEntry {
    pub order_id: String,
    pub reconciliation: Reconciliation,
}

/// One order the audit could not evaluate: unreachable storage or a
/// malformed record.
#[derive(Debug, Clone)]
pub struct AuditFailure {
    pub order_id: String,
    pub error: OrderError,
}

/// Outcome of a full audit pass.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub consistent: Vec<String>,
    pub inconsistent: Vec<DriftEntry>,
    pub failed: Vec<AuditFailure>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.inconsistent.is_empty() && self.failed.is_empty()
    }

    /// The ids an operator would typically pass to [`repair_orders`].
    pub fn inconsistent_ids(&self) -> Vec<String> {
        self.inconsistent
            .iter()
            .map(|entry| entry.order_id.clone())
            .collect()
    }
}

/// Reconciles every stored order and collects the outcomes.
///
/// Each order is evaluated independently; a storage failure or malformed
/// record is recorded under `failed` and the batch moves on. Only a
/// failure to enumerate the store at all aborts the audit.
#[instrument(skip(orders))]
pub async fn run_audit(orders: &OrderClient) -> Result<AuditReport, OrderError> {
    let ids = orders.list().await?;
    info!(count = ids.len(), "Auditing stored order totals");

    let mut report = AuditReport::default();
    for id in ids {
        match orders.reconcile_order(id.clone()).await {
            Ok(Reconciliation::Consistent) => report.consistent.push(id),
            Ok(outcome @ Reconciliation::Inconsistent { .. }) => {
                warn!(order_id = %id, ?outcome, "Stored totals drifted");
                report.inconsistent.push(DriftEntry {
                    order_id: id,
                    reconciliation: outcome,
                });
            }
            Err(error) => {
                // One bad record must not sink the batch.
                warn!(order_id = %id, %error, "Audit skipped order");
                report.failed.push(AuditFailure { order_id: id, error });
            }
        }
    }

    info!(
        consistent = report.consistent.len(),
        inconsistent = report.inconsistent.len(),
        failed = report.failed.len(),
        "Audit finished"
    );
    Ok(report)
}

/// Outcome of a bulk repair pass.
#[derive(Debug, Default)]
pub struct RepairOutcome {
    pub repaired: Vec<String>,
    pub failed: Vec<AuditFailure>,
}

/// Applies canonical totals to the selected orders.
///
/// Per-order failures are collected rather than propagated, matching the
/// audit's isolation policy. Each repair runs inside the order actor's
/// message loop, serialized against any concurrent write to the same
/// order.
#[instrument(skip(orders, ids))]
pub async fn repair_orders(orders: &OrderClient, ids: Vec<String>) -> RepairOutcome {
    let mut outcome = RepairOutcome::default();
    for id in ids {
        match orders.repair_order(id.clone()).await {
            Ok(totals) => {
                info!(
                    order_id = %id,
                    subtotal = %totals.subtotal,
                    total = %totals.total,
                    "Totals repaired"
                );
                outcome.repaired.push(id);
            }
            Err(error) => {
                warn!(order_id = %id, %error, "Repair failed");
                outcome.failed.push(AuditFailure { order_id: id, error });
            }
        }
    }
    outcome
}
