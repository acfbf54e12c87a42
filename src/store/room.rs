use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{AppState, StoreError};

/// A private room (or open table) that can be reserved. `price` of 0 means
/// the spot itself is free and only pre-ordered food is billed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub price: u64,
    pub image: String,
    pub is_available: bool,
}

impl Room {
    pub(crate) fn seed(id: &str, name: &str, capacity: u32, price: u64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            capacity,
            price,
            image: image.to_string(),
            is_available: true,
        }
    }
}

impl AppState {
    pub fn room(&self, id: &str) -> Result<&Room, StoreError> {
        self.rooms
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RoomNotFound(id.to_string()))
    }

    fn room_mut(&mut self, id: &str) -> Result<&mut Room, StoreError> {
        self.rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RoomNotFound(id.to_string()))
    }

    pub fn add_room(
        &mut self,
        name: String,
        capacity: u32,
        price: u64,
        image: String,
    ) -> Result<Room, StoreError> {
        if image.is_empty() {
            return Err(StoreError::ImageRequired);
        }
        let room = Room {
            id: Uuid::new_v4().to_string(),
            name,
            capacity,
            price,
            image,
            is_available: true,
        };
        self.rooms.insert(0, room.clone());
        Ok(room)
    }

    pub fn update_room(
        &mut self,
        id: &str,
        price: Option<u64>,
        image: Option<String>,
    ) -> Result<Room, StoreError> {
        let room = self.room_mut(id)?;
        if let Some(price) = price {
            room.price = price;
        }
        if let Some(image) = image {
            room.image = image;
        }
        Ok(room.clone())
    }

    pub fn toggle_room_availability(&mut self, id: &str) -> Result<bool, StoreError> {
        let room = self.room_mut(id)?;
        room.is_available = !room.is_available;
        Ok(room.is_available)
    }

    pub fn delete_room(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        if self.rooms.len() == before {
            return Err(StoreError::RoomNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Start configuring a reservation. Taken rooms cannot be picked.
    pub fn select_room(&mut self, id: &str) -> Result<Room, StoreError> {
        let room = self.room(id)?.clone();
        if !room.is_available {
            return Err(StoreError::RoomUnavailable(id.to_string()));
        }
        self.session.selected_room = Some(room.id.clone());
        Ok(room)
    }

    pub fn set_pre_order(&mut self, enabled: bool) {
        self.session.pre_order = Some(enabled);
    }

    pub fn clear_reservation(&mut self) {
        self.session.selected_room = None;
        self.session.pre_order = None;
    }
}
