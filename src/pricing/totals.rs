use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use crate::model::OrderLineItem;

/// Minor-unit digits carried by every stored amount (centimes).
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Canonical monetary totals for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub total: Decimal,
}

/// Rejections and failures of the totals computation.
///
/// Malformed line items indicate upstream data corruption and fail fast,
/// identifying the offending line; they are never coerced to zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("line {index} ({product_id}): quantity must be at least 1")]
    InvalidQuantity { index: usize, product_id: String },

    #[error("line {index} ({product_id}): unit price {unit_price} is negative")]
    NegativePrice {
        index: usize,
        product_id: String,
        unit_price: Decimal,
    },

    #[error("delivery fee {0} is negative")]
    NegativeDeliveryFee(Decimal),

    #[error("amount overflow while pricing line {index}")]
    Overflow { index: usize },

    #[error("amount overflow while adding the delivery fee")]
    FeeOverflow,
}

/// Computes the canonical `{subtotal, total}` for a set of order lines and
/// a delivery fee.
///
/// `subtotal = Σ unit_price × quantity`, summed exactly and rounded ONCE at
/// the end to [`MINOR_UNIT_SCALE`] (midpoint away from zero), never per
/// line. The delivery fee is normalized to the same scale, so
/// `total == subtotal + delivery_fee` holds exactly on the output.
///
/// An empty item list is a valid delivery-only (or fully discounted)
/// order: subtotal is zero and the total equals the fee.
///
/// Pure: no side effects, no persisted state. Overflow fails the whole
/// computation rather than fabricating a number.
pub fn compute_totals(
    items: &[OrderLineItem],
    delivery_fee: Decimal,
) -> Result<Totals, PricingError> {
    if delivery_fee < Decimal::ZERO {
        return Err(PricingError::NegativeDeliveryFee(delivery_fee));
    }

    let mut raw = Decimal::ZERO;
    for (index, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(PricingError::InvalidQuantity {
                index,
                product_id: item.product_id.clone(),
            });
        }
        if item.unit_price < Decimal::ZERO {
            return Err(PricingError::NegativePrice {
                index,
                product_id: item.product_id.clone(),
                unit_price: item.unit_price,
            });
        }
        let line = item
            .unit_price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or(PricingError::Overflow { index })?;
        raw = raw
            .checked_add(line)
            .ok_or(PricingError::Overflow { index })?;
    }

    let subtotal = raw.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let fee = delivery_fee
        .round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal.checked_add(fee).ok_or(PricingError::FeeOverflow)?;

    Ok(Totals { subtotal, total })
}
