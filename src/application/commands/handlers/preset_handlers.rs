//! Preset Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddPreset, DeletePreset, UpdatePreset};
use crate::application::error::ApplicationError;
use crate::application::ports::{PresetError, PresetStorePort};

// ============================================================================
// AddPreset
// ============================================================================

/// AddPreset Handler
pub struct AddPresetHandler {
    store: Arc<dyn PresetStorePort>,
}

impl AddPresetHandler {
    pub fn new(store: Arc<dyn PresetStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddPreset) -> Result<i64, ApplicationError> {
        let mut presets = self.store.load().await?;
        if presets.iter().any(|p| p.id == command.preset.id) {
            return Err(PresetError::DuplicateId(command.preset.id).into());
        }
        let preset_id = command.preset.id;
        presets.push(command.preset);
        self.store.save(&presets).await?;

        tracing::info!(preset_id, "プリセットを追加");
        Ok(preset_id)
    }
}

// ============================================================================
// UpdatePreset
// ============================================================================

/// UpdatePreset Handler
pub struct UpdatePresetHandler {
    store: Arc<dyn PresetStorePort>,
}

impl UpdatePresetHandler {
    pub fn new(store: Arc<dyn PresetStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdatePreset) -> Result<i64, ApplicationError> {
        let mut presets = self.store.load().await?;
        let slot = presets
            .iter_mut()
            .find(|p| p.id == command.preset.id)
            .ok_or(PresetError::NotFound(command.preset.id))?;
        let preset_id = command.preset.id;
        *slot = command.preset;
        self.store.save(&presets).await?;

        tracing::info!(preset_id, "プリセットを更新");
        Ok(preset_id)
    }
}

// ============================================================================
// DeletePreset
// ============================================================================

/// DeletePreset Handler
pub struct DeletePresetHandler {
    store: Arc<dyn PresetStorePort>,
}

impl DeletePresetHandler {
    pub fn new(store: Arc<dyn PresetStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeletePreset) -> Result<(), ApplicationError> {
        let mut presets = self.store.load().await?;
        let before = presets.len();
        presets.retain(|p| p.id != command.preset_id);
        if presets.len() == before {
            return Err(PresetError::NotFound(command.preset_id).into());
        }
        self.store.save(&presets).await?;

        tracing::info!(preset_id = command.preset_id, "プリセットを削除");
        Ok(())
    }
}
