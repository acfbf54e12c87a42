use serde::{Deserialize, Serialize};

use crate::store::product::StockStatus;
use crate::store::{AppState, StoreError};

/// One line of the cart. Name and price are copied from the catalog at
/// add-time; later catalog edits do not reach into an open cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl AppState {
    /// Upsert-with-increment: the cart never holds two lines for the same
    /// product. Returns false when the product is out of stock, in which
    /// case nothing changes.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<bool, StoreError> {
        let product = self.product(product_id)?.clone();
        if product.status == StockStatus::OutOfStock {
            return Ok(false);
        }
        match self.cart.iter_mut().find(|item| item.product_id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.cart.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            }),
        }
        Ok(true)
    }

    /// Quantity 0 removes the line.
    pub fn set_cart_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), StoreError> {
        let Some(pos) = self.cart.iter().position(|i| i.product_id == product_id) else {
            return Err(StoreError::CartEntryNotFound(product_id.to_string()));
        };
        if quantity == 0 {
            self.cart.remove(pos);
        } else {
            self.cart[pos].quantity = quantity;
        }
        Ok(())
    }

    pub fn cart_total(&self) -> u64 {
        self.cart
            .iter()
            .map(|item| item.price * u64::from(item.quantity))
            .sum()
    }
}
