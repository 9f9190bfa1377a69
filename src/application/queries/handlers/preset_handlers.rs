//! Preset Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{Preset, PresetStorePort};
use crate::application::queries::ListPresets;

/// ListPresets Handler
pub struct ListPresetsHandler {
    store: Arc<dyn PresetStorePort>,
}

impl ListPresetsHandler {
    pub fn new(store: Arc<dyn PresetStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListPresets) -> Result<Vec<Preset>, ApplicationError> {
        Ok(self.store.load().await?)
    }
}
