//! Hibiki - 日本語音声合成エンジン
//!
//! - Domain: prosody/, kana/, query/, dict/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence, adapters

use std::sync::Arc;

use hibiki::application::ports::{AnalyzerFactoryPort, UserDictStorePort};
use hibiki::config::{load_config, print_config};
use hibiki::infrastructure::http::{AppState, HttpServer};
use hibiki::infrastructure::memory::SharedAnalyzer;
use hibiki::infrastructure::persistence::{FilePresetStore, FileUserDictStore};
use hibiki::infrastructure::{JPreprocessAnalyzerFactory, MockSynthesisCore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 設定を読み込む（優先順位: 環境変数 > 設定ファイル > 既定値）
    let config = load_config().map_err(|e| anyhow::anyhow!("設定の読み込みに失敗: {}", e))?;

    // ログを初期化
    let log_filter = format!(
        "{},hibiki={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Hibiki - 日本語音声合成エンジン v{}", hibiki::VERSION);
    print_config(&config);

    // ユーザー辞書ストアを用意し、保存済み単語で解析器を構築する。
    // システム辞書が読めない場合は起動時に落とす
    let dict_store = Arc::new(FileUserDictStore::new(
        &config.dict.user_dict_path,
        &config.dict.user_dict_csv_path,
    ));
    let factory = Arc::new(JPreprocessAnalyzerFactory::new(&config.dict.system_dict_dir));

    let words = dict_store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("ユーザー辞書の読み込みに失敗: {}", e))?;
    let user_dict_csv = dict_store
        .write_csv(&words)
        .await
        .map_err(|e| anyhow::anyhow!("ユーザー辞書 CSV の書き出しに失敗: {}", e))?;
    let initial_analyzer = factory
        .build(user_dict_csv.as_deref())
        .map_err(|e| anyhow::anyhow!("解析器の構築に失敗: {}", e))?;
    let snapshot = Arc::new(SharedAnalyzer::new(initial_analyzer));

    tracing::info!(words = words.len(), "ユーザー辞書を読み込み");

    // 合成核とプリセットストア
    let core = Arc::new(MockSynthesisCore::new());
    let preset_store = Arc::new(FilePresetStore::new(&config.presets.path));

    // HTTP サーバーを起動（優雅な停止付き）
    let server_config = config.server.clone();
    let state = AppState::new(snapshot, factory, core, dict_store, preset_store, config);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("終了シグナルの待機に失敗: {}", e);
            }
            tracing::info!("終了シグナルを受信");
        })
        .await?;

    tracing::info!("サーバーを停止");

    Ok(())
}
