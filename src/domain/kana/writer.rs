//! AquesTalk 風記法エンコーダ
//!
//! アクセント句系列から記法テキストを決定的に生成する。
//! `parse_kana(to_kana(p))` は p の骨格（モーラ表記・アクセント・
//! ポーズ・疑問形）を再現する。

use crate::domain::prosody::AccentPhrase;

use super::parser::{
    ACCENT_SYMBOL, NOPAUSE_DELIMITER, PAUSE_DELIMITER, UNVOICE_SYMBOL, WIDE_INTERROGATION_MARK,
};

/// アクセント句系列から AquesTalk 風記法テキストを生成する
pub fn to_kana(phrases: &[AccentPhrase]) -> String {
    let mut text = String::new();
    for (i, phrase) in phrases.iter().enumerate() {
        for (j, mora) in phrase.moras.iter().enumerate() {
            if mora.is_unvoiced() {
                text.push(UNVOICE_SYMBOL);
            }
            text.push_str(&mora.text);
            if j + 1 == phrase.accent {
                text.push(ACCENT_SYMBOL);
            }
        }
        if phrase.is_interrogative {
            text.push(WIDE_INTERROGATION_MARK);
        }
        if i < phrases.len() - 1 {
            text.push(if phrase.pause_mora.is_some() {
                PAUSE_DELIMITER
            } else {
                NOPAUSE_DELIMITER
            });
        }
    }
    text
}
