//! User Dict Query Handlers

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::UserDictStorePort;
use crate::application::queries::ListUserDictWords;
use crate::domain::dict::UserDictWord;

/// ListUserDictWords Handler
pub struct ListUserDictWordsHandler {
    store: Arc<dyn UserDictStorePort>,
}

impl ListUserDictWordsHandler {
    pub fn new(store: Arc<dyn UserDictStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: ListUserDictWords,
    ) -> Result<HashMap<Uuid, UserDictWord>, ApplicationError> {
        Ok(self.store.load().await?)
    }
}
