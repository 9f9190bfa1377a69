//! Application Ports - 外向きポート定義
//!
//! アプリケーション層と基盤層の抽象インターフェース

mod preset_store;
mod synthesis_core;
mod text_analyzer;
mod user_dict_store;

pub use preset_store::{Preset, PresetError, PresetStorePort};
pub use synthesis_core::{
    CoreError, RenderOptions, SpeakerMeta, StyleMeta, SynthesisCorePort,
};
pub use text_analyzer::{
    AnalyzerError, AnalyzerFactoryPort, AnalyzerSnapshotPort, TextAnalyzerPort,
};
pub use user_dict_store::{StoreError, UserDictStorePort};
