//! HTTP Routes
//!
//! 本家 ENGINE 互換のフラットなルート定義
//!
//! API Endpoints:
//! - /audio_query              POST   テキストから AudioQuery を構築
//! - /audio_query_from_preset  POST   プリセットを適用した AudioQuery を構築
//! - /accent_phrases           POST   テキスト／記法からアクセント句を構築
//! - /mora_data                POST   長さ・音高を再計算
//! - /mora_length              POST   長さのみ再計算
//! - /mora_pitch               POST   音高のみ再計算
//! - /synthesis                POST   AudioQuery から WAV を合成
//! - /user_dict                GET    ユーザー辞書の単語一覧
//! - /user_dict_word           POST   単語を追加
//! - /user_dict_word/{uuid}    PUT    単語を更新
//! - /user_dict_word/{uuid}    DELETE 単語を削除
//! - /import_user_dict         POST   単語表を一括インポート
//! - /presets                  GET    プリセット一覧
//! - /add_preset               POST   プリセットを追加
//! - /update_preset            POST   プリセットを更新
//! - /delete_preset            POST   プリセットを削除
//! - /version                  GET    エンジンのバージョン
//! - /core_versions            GET    合成核のバージョン一覧
//! - /speakers                 GET    話者・スタイル一覧

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 全ルートを構築する
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // クエリ構築・編集
        .route("/audio_query", post(handlers::audio_query))
        .route(
            "/audio_query_from_preset",
            post(handlers::audio_query_from_preset),
        )
        .route("/accent_phrases", post(handlers::accent_phrases))
        .route("/mora_data", post(handlers::mora_data))
        .route("/mora_length", post(handlers::mora_length))
        .route("/mora_pitch", post(handlers::mora_pitch))
        // 合成
        .route("/synthesis", post(handlers::synthesis))
        // ユーザー辞書
        .route("/user_dict", get(handlers::get_user_dict))
        .route("/user_dict_word", post(handlers::add_user_dict_word))
        .route(
            "/user_dict_word/:word_uuid",
            axum::routing::put(handlers::rewrite_user_dict_word)
                .delete(handlers::delete_user_dict_word),
        )
        .route("/import_user_dict", post(handlers::import_user_dict))
        // プリセット
        .route("/presets", get(handlers::get_presets))
        .route("/add_preset", post(handlers::add_preset))
        .route("/update_preset", post(handlers::update_preset))
        .route("/delete_preset", post(handlers::delete_preset))
        // エンジン情報
        .route("/version", get(handlers::version))
        .route("/core_versions", get(handlers::core_versions))
        .route("/speakers", get(handlers::speakers))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;
    use uuid::Uuid;

    use crate::application::ports::{
        AnalyzerError, AnalyzerFactoryPort, AnalyzerSnapshotPort, Preset, PresetError,
        PresetStorePort, StoreError, TextAnalyzerPort, UserDictStorePort,
    };
    use crate::config::AppConfig;
    use crate::domain::dict::UserDictWord;
    use crate::domain::prosody::label::test_support::{feature, pause_feature};
    use crate::infrastructure::adapters::MockSynthesisCore;
    use crate::infrastructure::memory::SharedAnalyzer;

    /// 「こんにちは」相当の固定ラベルを返す解析器
    struct FixedAnalyzer;

    impl TextAnalyzerPort for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<String>, AnalyzerError> {
            Ok(vec![
                pause_feature("sil"),
                feature("k", "1", "5", "5", "0", "1", "1"),
                feature("o", "1", "5", "5", "0", "1", "1"),
                feature("N", "2", "5", "5", "0", "1", "1"),
                feature("n", "3", "5", "5", "0", "1", "1"),
                feature("i", "3", "5", "5", "0", "1", "1"),
                feature("ch", "4", "5", "5", "0", "1", "1"),
                feature("i", "4", "5", "5", "0", "1", "1"),
                feature("w", "5", "5", "5", "0", "1", "1"),
                feature("a", "5", "5", "5", "0", "1", "1"),
                pause_feature("sil"),
            ])
        }
    }

    struct FixedFactory;

    impl AnalyzerFactoryPort for FixedFactory {
        fn build(
            &self,
            _user_dict_csv: Option<&Path>,
        ) -> Result<std::sync::Arc<dyn TextAnalyzerPort>, AnalyzerError> {
            Ok(Arc::new(FixedAnalyzer))
        }
    }

    #[derive(Default)]
    struct MemoryDictStore {
        words: Mutex<HashMap<Uuid, UserDictWord>>,
    }

    #[async_trait]
    impl UserDictStorePort for MemoryDictStore {
        async fn load(&self) -> Result<HashMap<Uuid, UserDictWord>, StoreError> {
            Ok(self.words.lock().unwrap().clone())
        }

        async fn save(&self, words: &HashMap<Uuid, UserDictWord>) -> Result<(), StoreError> {
            *self.words.lock().unwrap() = words.clone();
            Ok(())
        }

        async fn write_csv(
            &self,
            _words: &HashMap<Uuid, UserDictWord>,
        ) -> Result<Option<PathBuf>, StoreError> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct MemoryPresetStore {
        presets: Mutex<Vec<Preset>>,
    }

    #[async_trait]
    impl PresetStorePort for MemoryPresetStore {
        async fn load(&self) -> Result<Vec<Preset>, PresetError> {
            Ok(self.presets.lock().unwrap().clone())
        }

        async fn save(&self, presets: &[Preset]) -> Result<(), PresetError> {
            *self.presets.lock().unwrap() = presets.to_vec();
            Ok(())
        }
    }

    fn test_app() -> axum::Router {
        let state = AppState::new(
            Arc::new(SharedAnalyzer::new(Arc::new(FixedAnalyzer))),
            Arc::new(FixedFactory),
            Arc::new(MockSynthesisCore::new()),
            Arc::new(MemoryDictStore::default()),
            Arc::new(MemoryPresetStore::default()),
            AppConfig::default(),
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_version_endpoint() {
        let response = test_app()
            .oneshot(Request::get("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(crate::VERSION));
    }

    #[tokio::test]
    async fn test_speakers_endpoint() {
        let response = test_app()
            .oneshot(Request::get("/speakers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(!body.as_array().unwrap().is_empty());
        assert!(body[0]["speaker_uuid"].is_string());
    }

    #[tokio::test]
    async fn test_audio_query_builds_from_text() {
        let response = test_app()
            .oneshot(
                Request::post("/audio_query?text=%E3%81%93%E3%82%93%E3%81%AB%E3%81%A1%E3%81%AF&speaker=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["accent_phrases"].as_array().unwrap().len(), 1);
        assert_eq!(body["speedScale"], 1.0);
        assert_eq!(body["outputSamplingRate"], 24000);
        assert!(body["kana"].as_str().unwrap().contains('\''));
    }

    #[tokio::test]
    async fn test_audio_query_unknown_style_is_404() {
        let response = test_app()
            .oneshot(
                Request::post("/audio_query?text=a&speaker=99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_accent_phrases_from_kana() {
        let response = test_app()
            .oneshot(
                // コンニチワ'
                Request::post("/accent_phrases?text=%E3%82%B3%E3%83%B3%E3%83%8B%E3%83%81%E3%83%AF%27&speaker=0&is_kana=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["accent"], 5);
    }

    #[tokio::test]
    async fn test_malformed_kana_is_400() {
        let response = test_app()
            .oneshot(
                // アクセント記号なし
                Request::post("/accent_phrases?text=%E3%82%B3%E3%83%B3&speaker=0&is_kana=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_synthesis_round_trip() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/audio_query?text=%E3%81%93%E3%82%93%E3%81%AB%E3%81%A1%E3%81%AF&speaker=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let query = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::post("/synthesis?speaker=0")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(query))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "audio/wav"
        );
        let wav = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&wav[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_synthesis_rejects_non_query_body() {
        let response = test_app()
            .oneshot(
                Request::post("/synthesis?speaker=0")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"hello": "world"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_user_dict_add_then_list() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                // surface=test pronunciation=テスト accent_type=1
                Request::post("/user_dict_word?surface=test&pronunciation=%E3%83%86%E3%82%B9%E3%83%88&accent_type=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let uuid = body_json(response).await;
        assert!(Uuid::parse_str(uuid.as_str().unwrap()).is_ok());

        let response = app
            .oneshot(Request::get("/user_dict").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let words = body_json(response).await;
        let word = &words[uuid.as_str().unwrap()];
        assert_eq!(word["surface"], "ｔｅｓｔ");
        assert_eq!(word["pronunciation"], "テスト");
    }

    #[tokio::test]
    async fn test_invalid_pronunciation_is_400() {
        let response = test_app()
            .oneshot(
                // pronunciation=ひらがな（カタカナ以外は拒否）
                Request::post("/user_dict_word?surface=a&pronunciation=%E3%81%B2%E3%82%89%E3%81%8C%E3%81%AA&accent_type=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preset_crud_over_http() {
        let app = test_app();
        let preset = serde_json::json!({
            "id": 1,
            "name": "ゆっくり",
            "speaker_uuid": "35b2c544-660e-401e-b503-0e14c635303a",
            "style_id": 0,
            "speedScale": 0.8,
            "pitchScale": 0.0,
            "intonationScale": 1.0,
            "volumeScale": 1.0,
            "prePhonemeLength": 0.1,
            "postPhonemeLength": 0.1,
            "pauseLengthScale": 1.0
        });

        let response = app
            .clone()
            .oneshot(
                Request::post("/add_preset")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(preset.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(1));

        let response = app
            .clone()
            .oneshot(Request::get("/presets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let presets = body_json(response).await;
        assert_eq!(presets.as_array().unwrap().len(), 1);
        assert_eq!(presets[0]["speedScale"], 0.8);

        let response = app
            .clone()
            .oneshot(
                Request::post("/delete_preset?id=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::post("/delete_preset?id=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
