//! Configuration Loader
//!
//! 複数ソースの設定を優先度順に合成する
//!
//! 優先度（高い順）:
//! 1. 環境変数
//! 2. 設定ファイル（config.toml）
//! 3. 既定値

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定の読み込みに失敗しました: {0}")]
    LoadError(String),

    #[error("設定の解釈に失敗しました: {0}")]
    ParseError(String),

    #[error("設定の検証に失敗しました: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 設定ファイルの探索名
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// アプリケーション設定を読み込む
///
/// 優先度の高い順に合成する:
/// 1. 環境変数（前綴 `HIBIKI_`、階層区切り `__`）
/// 2. 設定ファイル（config.toml / config.local.toml）
/// 3. 既定値
///
/// # 環境変数の例
/// - `HIBIKI_SERVER__PORT=50022`
/// - `HIBIKI_DICT__SYSTEM_DICT_DIR=/opt/naist-jdic`
/// - `HIBIKI_SYNTHESIS__CANCELLABLE_SYNTHESIS=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 指定パスから設定を読み込む
///
/// `config_path` が None のときは既定の探索名を使う。
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 既定値（最低優先度）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 50021)?
        .set_default("dict.system_dict_dir", "data/naist-jdic")?
        .set_default("dict.user_dict_path", "data/user_dict.json")?
        .set_default("dict.user_dict_csv_path", "data/user_dict.csv")?
        .set_default("synthesis.default_sampling_rate", 24000)?
        .set_default("synthesis.default_output_stereo", false)?
        .set_default("synthesis.cancellable_synthesis", false)?
        .set_default("presets.path", "presets.toml")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 設定ファイル（あれば）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 環境変数（最高優先度）
    // 前綴: HIBIKI_、階層区切り: __（二重下線）
    builder = builder.add_source(
        Environment::with_prefix("HIBIKI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("設定を解釈できません: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 設定の妥当性検証
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port は 0 にできません".to_string(),
        ));
    }

    if config.synthesis.default_sampling_rate == 0 {
        return Err(ConfigError::ValidationError(
            "synthesis.default_sampling_rate は 0 にできません".to_string(),
        ));
    }

    if config.dict.system_dict_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "dict.system_dict_dir は空にできません".to_string(),
        ));
    }

    if config.presets.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "presets.path は空にできません".to_string(),
        ));
    }

    Ok(())
}

/// 起動時に設定内容をログへ出す
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("System Dict: {:?}", config.dict.system_dict_dir);
    tracing::info!("User Dict: {:?}", config.dict.user_dict_path);
    tracing::info!(
        "Default Sampling Rate: {}Hz",
        config.synthesis.default_sampling_rate
    );
    tracing::info!(
        "Cancellable Synthesis: {}",
        config.synthesis.cancellable_synthesis
    );
    tracing::info!("Presets: {:?}", config.presets.path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
