//! Application State
//!
//! 全 Command/Query Handler を束ねるアプリケーション状態。
//! 各ハンドラはポートの Arc を共有して構築される。

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddPresetHandler, ApplyWordHandler, DeletePresetHandler, DeleteWordHandler,
    ImportUserDictHandler, RewriteWordHandler, SynthesizeHandler, UpdatePresetHandler,
    // Query handlers
    AccentPhrasesHandler, AudioQueryFromPresetHandler, AudioQueryHandler, DictUpdateLock,
    ListPresetsHandler, ListUserDictWordsHandler, MoraDataHandler, MoraLengthHandler,
    MoraPitchHandler,
    // Ports
    AnalyzerFactoryPort, AnalyzerSnapshotPort, PresetStorePort, SynthesisCorePort,
    UserDictStorePort,
};
use crate::config::AppConfig;
use crate::domain::query::QueryDefaults;

/// アプリケーション状態
pub struct AppState {
    // ========== Ports ==========
    pub core: Arc<dyn SynthesisCorePort>,

    // ========== Command Handlers ==========
    pub apply_word_handler: ApplyWordHandler,
    pub rewrite_word_handler: RewriteWordHandler,
    pub delete_word_handler: DeleteWordHandler,
    pub import_user_dict_handler: ImportUserDictHandler,
    pub add_preset_handler: AddPresetHandler,
    pub update_preset_handler: UpdatePresetHandler,
    pub delete_preset_handler: DeletePresetHandler,
    pub synthesize_handler: SynthesizeHandler,

    // ========== Query Handlers ==========
    pub audio_query_handler: AudioQueryHandler,
    pub audio_query_from_preset_handler: AudioQueryFromPresetHandler,
    pub accent_phrases_handler: AccentPhrasesHandler,
    pub mora_data_handler: MoraDataHandler,
    pub mora_length_handler: MoraLengthHandler,
    pub mora_pitch_handler: MoraPitchHandler,
    pub list_user_dict_handler: ListUserDictWordsHandler,
    pub list_presets_handler: ListPresetsHandler,

    // ========== Config ==========
    pub config: AppConfig,
}

impl AppState {
    /// アプリケーション状態を構築する
    pub fn new(
        snapshot: Arc<dyn AnalyzerSnapshotPort>,
        factory: Arc<dyn AnalyzerFactoryPort>,
        core: Arc<dyn SynthesisCorePort>,
        dict_store: Arc<dyn UserDictStorePort>,
        preset_store: Arc<dyn PresetStorePort>,
        config: AppConfig,
    ) -> Self {
        let defaults = QueryDefaults {
            output_sampling_rate: config.synthesis.default_sampling_rate,
            output_stereo: config.synthesis.default_output_stereo,
        };
        // 辞書更新ハンドラは同じロックを共有し、更新を直列化する
        let dict_update_lock = DictUpdateLock::default();

        Self {
            core: core.clone(),

            // Command handlers
            apply_word_handler: ApplyWordHandler::new(
                dict_store.clone(),
                factory.clone(),
                snapshot.clone(),
                dict_update_lock.clone(),
            ),
            rewrite_word_handler: RewriteWordHandler::new(
                dict_store.clone(),
                factory.clone(),
                snapshot.clone(),
                dict_update_lock.clone(),
            ),
            delete_word_handler: DeleteWordHandler::new(
                dict_store.clone(),
                factory.clone(),
                snapshot.clone(),
                dict_update_lock.clone(),
            ),
            import_user_dict_handler: ImportUserDictHandler::new(
                dict_store.clone(),
                factory.clone(),
                snapshot.clone(),
                dict_update_lock,
            ),
            add_preset_handler: AddPresetHandler::new(preset_store.clone()),
            update_preset_handler: UpdatePresetHandler::new(preset_store.clone()),
            delete_preset_handler: DeletePresetHandler::new(preset_store.clone()),
            synthesize_handler: SynthesizeHandler::new(core.clone()),

            // Query handlers
            audio_query_handler: AudioQueryHandler::new(
                snapshot.clone(),
                core.clone(),
                defaults.clone(),
            ),
            audio_query_from_preset_handler: AudioQueryFromPresetHandler::new(
                snapshot.clone(),
                core.clone(),
                preset_store.clone(),
                defaults.clone(),
            ),
            accent_phrases_handler: AccentPhrasesHandler::new(snapshot.clone(), core.clone()),
            mora_data_handler: MoraDataHandler::new(core.clone()),
            mora_length_handler: MoraLengthHandler::new(core.clone()),
            mora_pitch_handler: MoraPitchHandler::new(core.clone()),
            list_user_dict_handler: ListUserDictWordsHandler::new(dict_store.clone()),
            list_presets_handler: ListPresetsHandler::new(preset_store.clone()),

            config,
        }
    }
}
