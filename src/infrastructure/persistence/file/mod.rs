//! File Persistence - ファイルベースの永続化

mod preset_store;
mod user_dict_store;

pub use preset_store::FilePresetStore;
pub use user_dict_store::FileUserDictStore;
