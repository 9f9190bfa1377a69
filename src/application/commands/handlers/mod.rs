//! Command Handlers

mod dict_handlers;
mod preset_handlers;
mod synthesis_handlers;

pub use dict_handlers::{
    ApplyWordHandler, DeleteWordHandler, DictUpdateLock, ImportUserDictHandler, RewriteWordHandler,
};
pub use preset_handlers::{AddPresetHandler, DeletePresetHandler, UpdatePresetHandler};
pub use synthesis_handlers::SynthesizeHandler;
