//! Prosody Context - アクセント句構築と韻律編集

pub mod builder;
pub mod errors;
pub mod label;
pub mod model;
pub mod mora_table;
pub mod reconcile;

pub use builder::build_accent_phrases;
pub use errors::ProsodyError;
pub use label::FeatureLabel;
pub use model::{to_flatten_moras, validate_accent_phrases, AccentPhrase, Mora};
pub use reconcile::{overlay_user, reconcile, skeleton_eq};
