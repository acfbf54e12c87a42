use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::cart::CartItem;
use crate::store::gate::Role;
use crate::store::{AppState, CustomerTab, StoreError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub kind: OrderKind,
    pub items: Vec<CartItem>,
    pub total: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Fill fraction for the four-step progress rail.
    pub fn progress_fraction(&self) -> f64 {
        self.status.progress_index() as f64 / (STATUS_STEPS.len() - 1) as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Delivery,
    Reservation,
}

/// The lifecycle only ever walks forward along this sequence.
pub const STATUS_STEPS: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Accepted,
    OrderStatus::Delivering,
    OrderStatus::Completed,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Delivering,
    Completed,
}

impl OrderStatus {
    pub fn progress_index(self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Accepted => 1,
            OrderStatus::Delivering => 2,
            OrderStatus::Completed => 3,
        }
    }

    /// Banner text under the tracker.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Kutilmoqda",
            OrderStatus::Accepted => "Buyurtma qabul qilindi, tayyorlanmoqda",
            OrderStatus::Delivering => "Buyurtma yo'lda, yetkazib berilmoqda",
            OrderStatus::Completed => "Yakunlandi",
        }
    }

    /// Short caption on the progress rail.
    pub fn step_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Kutilmoqda",
            OrderStatus::Accepted => "Tayyor",
            OrderStatus::Delivering => "Yo'lda",
            OrderStatus::Completed => "Yakunlandi",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "delivering" => Ok(OrderStatus::Delivering),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Receipt-style token. Not collision-checked: order volume here is a
/// handful at a time. A production system would use a sequence.
fn short_token() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

impl AppState {
    pub fn order(&self, id: &str) -> Result<&Order, StoreError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
    }

    /// Snapshot the cart into a new PENDING order. On any validation
    /// failure nothing changes; on success the cart and the reservation
    /// selection are gone and the storefront lands on the status tab.
    pub fn place_order(
        &mut self,
        kind: OrderKind,
        customer_name: &str,
        phone: &str,
        address: Option<&str>,
    ) -> Result<Order, StoreError> {
        if customer_name.trim().is_empty() || phone.trim().is_empty() {
            return Err(StoreError::IncompleteDetails);
        }

        let address = match kind {
            OrderKind::Delivery => match address {
                Some(value) if !value.trim().is_empty() => Some(value.to_string()),
                _ => return Err(StoreError::IncompleteDetails),
            },
            OrderKind::Reservation => None,
        };

        if kind == OrderKind::Delivery && self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let (room_id, room_price) = match kind {
            OrderKind::Reservation => {
                let id = self
                    .session
                    .selected_room
                    .clone()
                    .ok_or(StoreError::NoRoomSelected)?;
                let price = self.room(&id)?.price;
                (Some(id), price)
            }
            OrderKind::Delivery => (None, 0),
        };

        let order = Order {
            id: short_token(),
            kind,
            items: self.cart.clone(),
            total: self.cart_total() + room_price,
            status: OrderStatus::Pending,
            customer_name: customer_name.to_string(),
            phone: phone.to_string(),
            address,
            room_id,
            created_at: Utc::now(),
        };

        self.orders.insert(0, order.clone());
        self.cart.clear();
        self.clear_reservation();
        self.session.active_tab = CustomerTab::Status;
        Ok(order)
    }

    /// The only status write in the system. Couriers push delivery orders
    /// forward to DELIVERING or COMPLETED; everything else is rejected
    /// instead of silently accepted.
    pub fn update_order_status(
        &mut self,
        actor: Role,
        id: &str,
        to: OrderStatus,
    ) -> Result<Order, StoreError> {
        if actor != Role::Courier {
            return Err(StoreError::NotPermitted);
        }
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))?;
        if order.kind != OrderKind::Delivery {
            return Err(StoreError::NotDeliverable(id.to_string()));
        }
        let reachable = matches!(to, OrderStatus::Delivering | OrderStatus::Completed);
        if !reachable || to.progress_index() <= order.status.progress_index() {
            return Err(StoreError::IllegalTransition {
                from: order.status,
                to,
            });
        }
        order.status = to;
        Ok(order.clone())
    }

    /// What the courier sees: deliveries that still need to move.
    pub fn delivery_queue(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.kind == OrderKind::Delivery && o.status != OrderStatus::Completed)
            .collect()
    }
}
