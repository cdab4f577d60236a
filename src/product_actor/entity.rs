//! Entity trait implementation for the Product domain type.
//!
//! Enables [`Product`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor), including the stock
//! actions orders use during checkout and cancellation.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::actions::{ProductAction, ProductActionResult};
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.is_empty() {
            return Err("product name must not be empty".to_string());
        }
        if params.price < Decimal::ZERO {
            return Err(format!("product price {} is negative", params.price));
        }
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    /// Applies a catalog correction. Existing orders are unaffected: their
    /// lines carry price snapshots.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(format!("product price {} is negative", price));
            }
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    /// Handles stock actions.
    ///
    /// `ReserveStock` must leave stock untouched when it fails; checkout
    /// relies on that to roll back multi-line orders cleanly.
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(quantity) => {
                if quantity == 0 {
                    return Err("cannot reserve zero units".to_string());
                }
                if self.stock >= quantity {
                    self.stock -= quantity;
                    Ok(ProductActionResult::ReserveStock(()))
                } else {
                    Err(format!(
                        "insufficient stock for {}: requested {}, available {}",
                        self.name, quantity, self.stock
                    ))
                }
            }
            ProductAction::ReleaseStock(quantity) => {
                self.stock = self.stock.saturating_add(quantity);
                Ok(ProductActionResult::ReleaseStock(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn reserve_decrements_and_failed_reserve_leaves_stock_alone() {
        let mut product = Product::new("product_1", "Boxy Hoodie", dec!(2500), 5);

        product
            .handle_action(ProductAction::ReserveStock(3), &())
            .await
            .unwrap();
        assert_eq!(product.stock, 2);

        let err = product
            .handle_action(ProductAction::ReserveStock(3), &())
            .await
            .unwrap_err();
        assert!(err.contains("insufficient stock"));
        assert_eq!(product.stock, 2);
    }

    #[tokio::test]
    async fn release_returns_stock() {
        let mut product = Product::new("product_1", "Boxy Hoodie", dec!(2500), 2);
        product
            .handle_action(ProductAction::ReleaseStock(3), &())
            .await
            .unwrap();
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn create_rejects_negative_price() {
        let params = ProductCreate {
            name: "Boxy Hoodie".to_string(),
            price: dec!(-1),
            stock: 5,
        };
        let err = Product::from_create_params("product_1".to_string(), params).unwrap_err();
        assert!(err.contains("negative"));
    }
}
