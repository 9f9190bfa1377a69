//! Query Handlers

mod dict_handlers;
mod preset_handlers;
mod tts_handlers;

pub use dict_handlers::ListUserDictWordsHandler;
pub use preset_handlers::ListPresetsHandler;
pub use tts_handlers::{
    AccentPhrasesHandler, AudioQueryFromPresetHandler, AudioQueryHandler, MoraDataHandler,
    MoraLengthHandler, MoraPitchHandler,
};
