//! 全上下文ラベルの特徴レコード
//!
//! 形態素解析器（OpenJTalk 系フロントエンド）が出力する HTS 形式の
//! 全上下文ラベル文字列を、下流が依存する明示的な構造体へ変換する。
//! 下流（アクセント句ビルダー以降）はこの構造体のみに依存し、
//! 解析器のネイティブな出力形式から絶縁される。

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ProsodyError;

/// 利用するコンテキスト: p3 音素 / a2 モーラ位置 / f1 モーラ数 /
/// f2 アクセント位置 / f3 疑問形 / f5 アクセント句位置 / i3 呼気段落位置
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ .+? \^ .+? - (?P<p3>.+?) \+ .+? = .+?
        /A: (?P<a1>.+?) \+ (?P<a2>.+?) \+ .+?
        /B: .+?
        /C: .+?
        /D: .+?
        /E: .+?
        /F: (?P<f1>.+?) _ (?P<f2>.+?) \# (?P<f3>.+?) _ .+? @ (?P<f5>.+?) _ .+? \| .+?
        /G: .+?
        /H: .+?
        /I: .+? - .+? @ (?P<i3>.+?) \+ .+?
        /J: .+?
        /K: .+? $",
    )
    .expect("label pattern is valid")
});

/// 1 音素分の特徴レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLabel {
    /// 音素（子音または母音。無音含む）
    pub phoneme: String,
    /// アクセント句内でのモーラ位置 (1~49)。無音ラベルでは None
    pub mora_index: Option<u32>,
    /// アクセント句内でのアクセント位置。0 は平板型
    pub accent_position: u32,
    /// 疑問形か否か
    pub is_interrogative: bool,
    /// 呼気段落内でのアクセント句位置（無音ラベルでは "xx"）
    pub accent_phrase_index: String,
    /// 呼気段落位置（無音ラベルでは "xx"）
    pub breath_group_index: String,
    /// 無音（sil/pau）ラベルか否か
    pub is_pause: bool,
}

impl FeatureLabel {
    /// 全上下文ラベル文字列を特徴レコードへ解析する
    pub fn parse(feature: &str) -> Result<Self, ProsodyError> {
        let caps = LABEL_PATTERN
            .captures(feature)
            .ok_or_else(|| ProsodyError::MalformedFeature {
                feature: feature.to_string(),
            })?;

        let ctx = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or("xx");

        // f1 (アクセント句のモーラ数) が xx のラベルは無音
        let is_pause = ctx("f1") == "xx";
        let mora_index = ctx("a2").parse::<u32>().ok();
        let accent_position = ctx("f2").parse::<u32>().unwrap_or(0);

        Ok(Self {
            phoneme: ctx("p3").to_string(),
            mora_index,
            accent_position,
            is_interrogative: ctx("f3") == "1",
            accent_phrase_index: ctx("f5").to_string(),
            breath_group_index: ctx("i3").to_string(),
            is_pause,
        })
    }

    /// ラベル系列をまとめて解析する
    pub fn parse_all(features: &[String]) -> Result<Vec<Self>, ProsodyError> {
        features.iter().map(|f| Self::parse(f)).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// テスト用の全上下文ラベル文字列を組み立てる。
    /// 利用しないコンテキストは xx で埋める。
    pub fn feature(
        phoneme: &str,
        mora_index: &str,
        n_mora: &str,
        accent_position: &str,
        interrogative: &str,
        accent_phrase_index: &str,
        breath_group_index: &str,
    ) -> String {
        format!(
            "xx^xx-{phoneme}+xx=xx\
             /A:xx+{mora_index}+xx\
             /B:xx-xx_xx\
             /C:xx_xx+xx\
             /D:xx+xx_xx\
             /E:xx_xx!xx_xx-xx\
             /F:{n_mora}_{accent_position}#{interrogative}_xx@{accent_phrase_index}_xx|xx_xx\
             /G:xx_xx%xx_xx_xx\
             /H:xx_xx\
             /I:xx-xx@{breath_group_index}+xx&xx-xx|xx+xx\
             /J:xx_xx\
             /K:xx+xx-xx"
        )
    }

    /// 無音（sil/pau）ラベル
    pub fn pause_feature(phoneme: &str) -> String {
        feature(phoneme, "xx", "xx", "xx", "xx", "xx", "xx")
    }
}
