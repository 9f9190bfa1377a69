//! Configuration Module
//!
//! 多層の設定ソースを扱う:
//! - 環境変数（最高優先度）
//! - 設定ファイル（TOML 形式）
//! - 既定値（最低優先度）

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{
    AppConfig, DictConfig, LogConfig, PresetsConfig, ServerConfig, SynthesisConfig,
};
