//! アプリケーション層 - ユースケースの編成
//!
//! 含むもの:
//! - ports: 六角形アーキテクチャのポート定義（TextAnalyzer、SynthesisCore、
//!   UserDictStore、PresetStore）
//! - commands: CQRS コマンドとハンドラ
//! - queries: CQRS クエリとハンドラ
//! - error: アプリケーション層のエラー定義

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Dict commands
    ApplyWord,
    DeleteWord,
    ImportUserDict,
    RewriteWord,
    // Preset commands
    AddPreset,
    DeletePreset,
    UpdatePreset,
    // Synthesis command
    Synthesize,
    // Handlers
    handlers::{
        AddPresetHandler, ApplyWordHandler, DeletePresetHandler, DeleteWordHandler,
        DictUpdateLock, ImportUserDictHandler, RewriteWordHandler, SynthesizeHandler,
        UpdatePresetHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Analyzer
    AnalyzerError,
    AnalyzerFactoryPort,
    AnalyzerSnapshotPort,
    TextAnalyzerPort,
    // Synthesis core
    CoreError,
    RenderOptions,
    SpeakerMeta,
    StyleMeta,
    SynthesisCorePort,
    // Stores
    Preset,
    PresetError,
    PresetStorePort,
    StoreError,
    UserDictStorePort,
};

pub use queries::{
    // TTS queries
    BuildAccentPhrases,
    BuildAudioQuery,
    BuildAudioQueryFromPreset,
    RefreshMoraData,
    RefreshMoraLength,
    RefreshMoraPitch,
    // Dict / preset queries
    ListPresets,
    ListUserDictWords,
    // Handlers
    handlers::{
        AccentPhrasesHandler, AudioQueryFromPresetHandler, AudioQueryHandler,
        ListPresetsHandler, ListUserDictWordsHandler, MoraDataHandler, MoraLengthHandler,
        MoraPitchHandler,
    },
};
