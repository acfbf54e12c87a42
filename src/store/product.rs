use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{AppState, StoreError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub image: String,
    pub status: StockStatus,
}

impl Product {
    pub(crate) fn seed(
        id: &str,
        name: &str,
        price: u64,
        category: Category,
        image: &str,
        status: StockStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            image: image.to_string(),
            status,
        }
    }
}

/// The menu is a fixed set of sections; products cannot invent new ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mains,
    Drinks,
    Desserts,
    Salads,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Mains,
        Category::Drinks,
        Category::Desserts,
        Category::Salads,
    ];

    /// Section heading as the storefront prints it.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mains => "Asosiy Taomlar",
            Category::Drinks => "Ichimliklar",
            Category::Desserts => "Shirinliklar",
            Category::Salads => "Salatlar",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mains" => Ok(Category::Mains),
            "drinks" => Ok(Category::Drinks),
            "desserts" => Ok(Category::Desserts),
            "salads" => Ok(Category::Salads),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Mains => "mains",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
            Category::Salads => "salads",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn toggled(self) -> Self {
        match self {
            StockStatus::InStock => StockStatus::OutOfStock,
            StockStatus::OutOfStock => StockStatus::InStock,
        }
    }

    /// Badge text on the product card.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "Bor",
            StockStatus::OutOfStock => "Tugagan",
        }
    }
}

impl AppState {
    pub fn product(&self, id: &str) -> Result<&Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    fn product_mut(&mut self, id: &str) -> Result<&mut Product, StoreError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    /// A product without a picture never reaches the menu.
    pub fn add_product(
        &mut self,
        name: String,
        price: u64,
        category: Category,
        image: String,
    ) -> Result<Product, StoreError> {
        if image.is_empty() {
            return Err(StoreError::ImageRequired);
        }
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            category,
            image,
            status: StockStatus::InStock,
        };
        self.products.insert(0, product.clone());
        Ok(product)
    }

    pub fn toggle_stock(&mut self, id: &str) -> Result<StockStatus, StoreError> {
        let product = self.product_mut(id)?;
        product.status = product.status.toggled();
        Ok(product.status)
    }

    /// Overwrite semantics, no idempotency check: re-setting the same price
    /// is a harmless write.
    pub fn update_product(
        &mut self,
        id: &str,
        price: Option<u64>,
        image: Option<String>,
    ) -> Result<Product, StoreError> {
        let product = self.product_mut(id)?;
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(image) = image {
            product.image = image;
        }
        Ok(product.clone())
    }

    /// Unconditional removal. Orders hold snapshots, so nothing here checks
    /// for in-flight references.
    pub fn delete_product(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::ProductNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_requires_image() {
        let mut state = AppState::seeded();
        let before = state.products.len();

        let result = state.add_product(
            "Lag'mon".to_string(),
            30000,
            Category::Mains,
            String::new(),
        );

        assert_eq!(result, Err(StoreError::ImageRequired));
        assert_eq!(state.products.len(), before);
    }

    #[test]
    fn new_product_lands_first_with_fresh_id() {
        let mut state = AppState::seeded();

        let product = state
            .add_product(
                "Lag'mon".to_string(),
                30000,
                Category::Mains,
                "/api/image/abc".to_string(),
            )
            .unwrap();

        assert_eq!(state.products[0], product);
        assert_eq!(product.status, StockStatus::InStock);
        assert!(state.products[1..].iter().all(|p| p.id != product.id));
    }

    #[test]
    fn double_toggle_is_a_noop() {
        let mut state = AppState::seeded();
        let initial = state.product("1").unwrap().status;

        assert_eq!(state.toggle_stock("1").unwrap(), initial.toggled());
        assert_eq!(state.toggle_stock("1").unwrap(), initial);
    }

    #[test]
    fn delete_is_unconditional() {
        let mut state = AppState::seeded();

        state.delete_product("1").unwrap();

        assert!(state.product("1").is_err());
        assert_eq!(
            state.delete_product("1"),
            Err(StoreError::ProductNotFound("1".to_string()))
        );
    }
}
