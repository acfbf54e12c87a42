pub mod cart;
pub mod device;
pub mod gate;
pub mod media;
pub mod order;
pub mod product;
pub mod room;
pub mod sales;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use cart::CartItem;
use device::{Device, DeviceKind};
use gate::GateState;
use media::StoredImage;
use order::{Order, OrderStatus};
use product::{Category, Product, StockStatus};
use room::Room;
use sales::{ReportState, SaleData};

pub type SharedState = Arc<RwLock<AppState>>;

/// Single owner of all mutable application state. Every mutation goes
/// through a command method on this struct; handlers take the write lock
/// for the duration of one command, so there is exactly one writer at a
/// time and no ambient globals.
#[derive(Debug, Default)]
pub struct AppState {
    pub products: Vec<Product>,
    pub rooms: Vec<Room>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub sales: Vec<SaleData>,
    pub devices: Vec<Device>,
    pub images: HashMap<String, StoredImage>,
    pub gate: GateState,
    pub session: CustomerSession,
    pub report: ReportState,
}

/// Customer-side session: which tab the storefront shows and the
/// reservation being configured. Placement clears the reservation part.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CustomerSession {
    pub active_tab: CustomerTab,
    pub selected_room: Option<String>,
    pub pre_order: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTab {
    #[default]
    Menu,
    Reservation,
    Status,
}

impl AppState {
    pub fn set_tab(&mut self, tab: CustomerTab) {
        self.session.active_tab = tab;
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Ma'lumotlarni to'liq to'ldiring")]
    IncompleteDetails,
    #[error("Savatcha bo'sh")]
    EmptyCart,
    #[error("Rasm yuklang")]
    ImageRequired,
    #[error("Xona tanlanmagan")]
    NoRoomSelected,
    #[error("Xona hozir band")]
    RoomUnavailable(String),
    #[error("No product with id {0} was found")]
    ProductNotFound(String),
    #[error("No room with id {0} was found")]
    RoomNotFound(String),
    #[error("No cart entry for product {0} was found")]
    CartEntryNotFound(String),
    #[error("No order with id {0} was found")]
    OrderNotFound(String),
    #[error("No image with id {0} was found")]
    ImageNotFound(String),
    #[error("No device with id {0} was found")]
    DeviceNotFound(String),
    #[error("Kiritilgan kod noto'g'ri")]
    WrongPanelCode,
    #[error("Ruxsat kodi noto'g'ri")]
    WrongRoleCode,
    #[error("Panel is locked")]
    PanelLocked,
    #[error("Only the courier updates delivery status")]
    NotPermitted,
    #[error("Order {0} is not a delivery order")]
    NotDeliverable(String),
    #[error("Cannot move order from {from} to {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl AppState {
    /// Demo catalog the storefront boots with. Matches the cards the
    /// customer sees on first load.
    pub fn seeded() -> Self {
        let mut state = Self::default();

        state.products = vec![
            Product::seed("1", "Palov (Osh)", 45000, Category::Mains, "https://picsum.photos/seed/osh/400/300", StockStatus::InStock),
            Product::seed("2", "Shashlik (Mol go'shti)", 15000, Category::Mains, "https://picsum.photos/seed/shashlik/400/300", StockStatus::InStock),
            Product::seed("3", "Somsa", 8000, Category::Mains, "https://picsum.photos/seed/somsa/400/300", StockStatus::OutOfStock),
            Product::seed("4", "Achchiq-chuchuq", 12000, Category::Salads, "https://picsum.photos/seed/salad/400/300", StockStatus::InStock),
            Product::seed("5", "Koka-Kola 1.5L", 14000, Category::Drinks, "https://picsum.photos/seed/cola/400/300", StockStatus::InStock),
            Product::seed("6", "Choy (Ko'k/Qora)", 5000, Category::Drinks, "https://picsum.photos/seed/tea/400/300", StockStatus::InStock),
        ];

        state.rooms = vec![
            Room::seed("t1", "VIP Xona 1", 8, 100000, "https://picsum.photos/seed/vip1/400/300"),
            Room::seed("t2", "VIP Xona 2", 12, 150000, "https://picsum.photos/seed/vip2/400/300"),
            Room::seed("t3", "Oila xonasi", 6, 50000, "https://picsum.photos/seed/family/400/300"),
            Room::seed("t4", "Ochiq stol #5", 4, 0, "https://picsum.photos/seed/table5/400/300"),
        ];

        state.sales = vec![
            SaleData::seed(day(2024, 5, 13), 2500000, 45),
            SaleData::seed(day(2024, 5, 14), 1800000, 32),
            SaleData::seed(day(2024, 5, 15), 3200000, 58),
            SaleData::seed(day(2024, 5, 16), 2100000, 38),
            SaleData::seed(day(2024, 5, 17), 4500000, 82),
            SaleData::seed(day(2024, 5, 18), 5200000, 95),
            SaleData::seed(day(2024, 5, 19), 4800000, 88),
        ];

        state.devices = vec![
            Device::seed("dev1", "iPhone 15 Pro (Boshliq)", "Toshkent", "Hozir faol", DeviceKind::Mobile, "192.168.1.15"),
            Device::seed("dev2", "MacBook Air (Admin)", "Samarqand", "2 daqiqa oldin", DeviceKind::Desktop, "192.168.1.2"),
        ];

        state
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
