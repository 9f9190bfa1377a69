//! Dict Context - ユーザー辞書の語彙モデル

pub mod errors;
pub mod model;
pub mod part_of_speech;

pub use errors::DictError;
pub use model::{count_moras, create_word, UserDictWord, WordProperty};
pub use part_of_speech::{priority_to_cost, WordTypes};
