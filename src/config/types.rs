//! Configuration Types
//!
//! すべての設定構造体の定義

use serde::Deserialize;
use std::path::PathBuf;

/// アプリケーション主設定
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// サーバー設定
    #[serde(default)]
    pub server: ServerConfig,

    /// 辞書設定
    #[serde(default)]
    pub dict: DictConfig,

    /// 合成設定
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// プリセット設定
    #[serde(default)]
    pub presets: PresetsConfig,

    /// ログ設定
    #[serde(default)]
    pub log: LogConfig,
}

/// サーバー設定
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 待ち受けアドレス
    #[serde(default = "default_host")]
    pub host: String,

    /// 待ち受けポート
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    50021
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// バインド先アドレスを得る
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 辞書設定
#[derive(Debug, Clone, Deserialize)]
pub struct DictConfig {
    /// システム辞書（NAIST-jdic）のディレクトリ
    #[serde(default = "default_system_dict_dir")]
    pub system_dict_dir: PathBuf,

    /// ユーザー辞書 JSON の保存先
    #[serde(default = "default_user_dict_path")]
    pub user_dict_path: PathBuf,

    /// ユーザー辞書 CSV（解析器コンパイル入力）の書き出し先
    #[serde(default = "default_user_dict_csv_path")]
    pub user_dict_csv_path: PathBuf,
}

fn default_system_dict_dir() -> PathBuf {
    PathBuf::from("data/naist-jdic")
}

fn default_user_dict_path() -> PathBuf {
    PathBuf::from("data/user_dict.json")
}

fn default_user_dict_csv_path() -> PathBuf {
    PathBuf::from("data/user_dict.csv")
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            system_dict_dir: default_system_dict_dir(),
            user_dict_path: default_user_dict_path(),
            user_dict_csv_path: default_user_dict_csv_path(),
        }
    }
}

/// 合成設定
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// AudioQuery 組み立て時の既定サンプリングレート
    #[serde(default = "default_sampling_rate")]
    pub default_sampling_rate: u32,

    /// AudioQuery 組み立て時の既定ステレオ出力
    #[serde(default)]
    pub default_output_stereo: bool,

    /// クライアント切断で合成を中断するか
    #[serde(default)]
    pub cancellable_synthesis: bool,
}

fn default_sampling_rate() -> u32 {
    24000
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_sampling_rate: default_sampling_rate(),
            default_output_stereo: false,
            cancellable_synthesis: false,
        }
    }
}

/// プリセット設定
#[derive(Debug, Clone, Deserialize)]
pub struct PresetsConfig {
    /// プリセット TOML ファイルのパス
    #[serde(default = "default_presets_path")]
    pub path: PathBuf,
}

fn default_presets_path() -> PathBuf {
    PathBuf::from("presets.toml")
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            path: default_presets_path(),
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// ログレベル
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON 形式で出力するか
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
