use serde::{Deserialize, Serialize};

use crate::store::{AppState, StoreError};

/// A signed-in staff device shown on the manager panel. Display data only;
/// removal is the single operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub location: String,
    pub last_active: String,
    pub kind: DeviceKind,
    pub ip: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Mobile,
    Desktop,
}

impl Device {
    pub(crate) fn seed(
        id: &str,
        name: &str,
        location: &str,
        last_active: &str,
        kind: DeviceKind,
        ip: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            last_active: last_active.to_string(),
            kind,
            ip: ip.to_string(),
        }
    }
}

impl AppState {
    pub fn remove_device(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != id);
        if self.devices.len() == before {
            return Err(StoreError::DeviceNotFound(id.to_string()));
        }
        Ok(())
    }
}
