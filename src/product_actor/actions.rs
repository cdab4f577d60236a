//! Custom actions for the Product actor.
//!
//! Stock is only ever touched through these actions: checkout reserves it,
//! cancellation releases it, dashboards read it.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Reserves stock for an order line.
    ///
    /// Fails, leaving stock untouched, when the requested amount exceeds
    /// what is available.
    ReserveStock(u32),
    /// Returns previously reserved stock (order cancelled or rolled back).
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Result from CheckStock - the current stock level.
    CheckStock(u32),
    /// Result from ReserveStock - unit on success.
    ReserveStock(()),
    /// Result from ReleaseStock - unit on success.
    ReleaseStock(()),
}
