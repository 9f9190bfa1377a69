//! HTTP Handlers

mod info;
mod preset;
mod tts;
mod user_dict;

pub use info::*;
pub use preset::*;
pub use tts::*;
pub use user_dict::*;
