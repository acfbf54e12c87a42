use uuid::Uuid;

use crate::store::{AppState, StoreError};

/// Raw bytes of an uploaded picture, kept in memory for the process
/// lifetime. Catalog entries only carry the serving path returned by
/// [`AppState::store_image`].
#[derive(Clone, Debug)]
pub struct StoredImage {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl AppState {
    /// Returns the reference a catalog entry should store.
    pub fn store_image(
        &mut self,
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.images.insert(
            id.clone(),
            StoredImage {
                file_name,
                content_type,
                data,
            },
        );
        format!("/api/image/{id}")
    }

    pub fn image(&self, id: &str) -> Result<&StoredImage, StoreError> {
        self.images
            .get(id)
            .ok_or_else(|| StoreError::ImageNotFound(id.to_string()))
    }
}
