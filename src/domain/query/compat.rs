//! スキーマバージョン互換レイヤ
//!
//! 過去バージョンのサービスが返した AudioQuery JSON を現行スキーマへ
//! 引き上げる。移行はバージョンごとの関数の順序付きリストとして
//! 明示し、宣言バージョンより新しい移行だけを順に適用する。
//!
//! 移行履歴:
//! - 0.1.0: 基本形 (accent_phrases + 各スケール + 前後無音 + 出力設定 + kana)
//! - 0.2.0: pauseLength (null 既定) と pauseLengthScale (1.0 既定) を追加
//! - 0.3.0: coreVersion タグを追加。accent の整数値が浮動小数で
//!   シリアライズされていた旧クライアント出力を正規化

use serde_json::{Map, Value};

use super::errors::CompatError;
use super::model::AudioQuery;

type QueryObject = Map<String, Value>;

/// 1 バージョン分の移行
struct Migration {
    /// このバージョン以降のスキーマで保証されるフィールドを補う
    since: &'static str,
    apply: fn(&mut QueryObject),
}

/// 宣言バージョンが無い場合に仮定する最古バージョン
const OLDEST_VERSION: &str = "0.1.0";

const MIGRATIONS: &[Migration] = &[
    Migration {
        since: "0.2.0",
        apply: add_pause_fields,
    },
    Migration {
        since: "0.3.0",
        apply: add_core_version_and_normalize_accent,
    },
];

fn add_pause_fields(query: &mut QueryObject) {
    query
        .entry("pauseLength".to_string())
        .or_insert(Value::Null);
    query
        .entry("pauseLengthScale".to_string())
        .or_insert_with(|| Value::from(1.0));
}

fn add_core_version_and_normalize_accent(query: &mut QueryObject) {
    query
        .entry("coreVersion".to_string())
        .or_insert(Value::Null);
    let Some(phrases) = query.get_mut("accent_phrases").and_then(Value::as_array_mut) else {
        return;
    };
    for phrase in phrases.iter_mut().filter_map(Value::as_object_mut) {
        if let Some(accent) = phrase.get("accent").and_then(Value::as_f64) {
            if accent.fract() == 0.0 && accent >= 0.0 {
                phrase.insert("accent".to_string(), Value::from(accent as u64));
            }
        }
    }
}

/// "x.y.z" 形式の簡易バージョン比較キー
fn version_key(version: &str) -> (u32, u32, u32) {
    let mut parts = version.split('.').map(|p| p.parse().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// 任意の JSON を AudioQuery として受理する
///
/// - AudioQuery の形をしていない入力は `NotAnAudioQuery`（構造エラー）
/// - 既知の古い形は移行して受理
/// - 移行後もフィールド値が不正なら `InvalidQuery` / `Validation`
pub fn accept_legacy(raw: Value) -> Result<AudioQuery, CompatError> {
    let Value::Object(mut query) = raw else {
        return Err(CompatError::NotAnAudioQuery {
            reason: "JSON オブジェクトではありません".to_string(),
        });
    };
    if !query
        .get("accent_phrases")
        .map(Value::is_array)
        .unwrap_or(false)
    {
        return Err(CompatError::NotAnAudioQuery {
            reason: "accent_phrases 配列がありません".to_string(),
        });
    }

    let declared = query
        .get("coreVersion")
        .and_then(Value::as_str)
        .unwrap_or(OLDEST_VERSION)
        .to_string();
    let declared_key = version_key(&declared);

    for migration in MIGRATIONS {
        if version_key(migration.since) > declared_key {
            (migration.apply)(&mut query);
        }
    }

    let audio_query: AudioQuery = serde_json::from_value(Value::Object(query))
        .map_err(|e| CompatError::InvalidQuery(e.to_string()))?;
    audio_query.validate()?;
    Ok(audio_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// 0.1.0 時代のサービスが返していた形
    fn legacy_v1_query() -> Value {
        json!({
            "accent_phrases": [
                {
                    "moras": [
                        {
                            "text": "カ",
                            "consonant": "k",
                            "consonant_length": 0.05,
                            "vowel": "a",
                            "vowel_length": 0.1,
                            "pitch": 5.4
                        }
                    ],
                    "accent": 1,
                    "pause_mora": null,
                    "is_interrogative": false
                }
            ],
            "speedScale": 1.0,
            "pitchScale": 0.0,
            "intonationScale": 1.0,
            "volumeScale": 1.0,
            "prePhonemeLength": 0.1,
            "postPhonemeLength": 0.1,
            "outputSamplingRate": 24000,
            "outputStereo": false,
            "kana": "カ'"
        })
    }

    #[test]
    fn test_legacy_v1_accepted_with_defaults() {
        let query = accept_legacy(legacy_v1_query()).unwrap();
        assert_eq!(query.pause_length, None);
        assert_eq!(query.pause_length_scale, 1.0);
        assert_eq!(query.core_version, None);
        assert_eq!(query.accent_phrases.len(), 1);
    }

    #[test]
    fn test_legacy_float_accent_normalized() {
        let mut raw = legacy_v1_query();
        raw["accent_phrases"][0]["accent"] = json!(1.0);
        let query = accept_legacy(raw).unwrap();
        assert_eq!(query.accent_phrases[0].accent, 1);
    }

    #[test]
    fn test_current_query_round_trips() {
        let query = super::super::model::assemble(
            vec![crate::domain::prosody::AccentPhrase::new(
                vec![crate::domain::prosody::Mora::from_phonemes(None, "a")],
                1,
                None,
                false,
            )
            .unwrap()],
            &super::super::model::QueryDefaults::default(),
        );
        let raw = serde_json::to_value(&query).unwrap();
        let accepted = accept_legacy(raw).unwrap();
        assert_eq!(accepted, query);
    }

    #[test]
    fn test_garbage_is_structural_error() {
        for raw in [json!("text"), json!(42), json!({"foo": "bar"}), json!({"accent_phrases": "x"})]
        {
            let err = accept_legacy(raw).unwrap_err();
            assert!(matches!(err, CompatError::NotAnAudioQuery { .. }));
        }
    }

    #[test]
    fn test_invalid_field_value_is_validation_error() {
        let mut raw = legacy_v1_query();
        raw["speedScale"] = json!(-1.0);
        let err = accept_legacy(raw).unwrap_err();
        assert!(matches!(err, CompatError::InvalidQuery(_)));
    }

    #[test]
    fn test_accent_out_of_bounds_rejected() {
        let mut raw = legacy_v1_query();
        raw["accent_phrases"][0]["accent"] = json!(5);
        let err = accept_legacy(raw).unwrap_err();
        assert!(matches!(err, CompatError::Validation(_)));
    }

    #[test]
    fn test_declared_current_version_skips_migrations() {
        let mut raw = legacy_v1_query();
        raw["coreVersion"] = json!("0.3.0");
        // 0.3.0 宣言なのに pauseLengthScale が無い -> 移行は走らず欠落のまま失敗
        let err = accept_legacy(raw).unwrap_err();
        assert!(matches!(err, CompatError::InvalidQuery(_)));
    }
}
