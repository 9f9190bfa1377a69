//! Query Context - AudioQuery の組み立て・互換・パラメータ適用

pub mod apply;
pub mod compat;
pub mod errors;
pub mod model;

pub use apply::{apply_interrogative_upspeak, query_to_moras};
pub use compat::accept_legacy;
pub use errors::CompatError;
pub use model::{assemble, AudioQuery, QueryDefaults, CURRENT_SCHEMA_VERSION, DEFAULT_SAMPLING_RATE};
