//! Synthesis Command - 波形合成

use serde_json::Value;

/// 音声合成コマンド
///
/// クエリは後方互換レイヤを通すため生の JSON のまま受け取る。
#[derive(Debug, Clone)]
pub struct Synthesize {
    pub raw_query: Value,
    pub style_id: u32,
    pub enable_interrogative_upspeak: bool,
}
