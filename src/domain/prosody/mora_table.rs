//! モーラ対応表
//!
//! カタカナ表記と音素（子音+母音）の一対一対応表。
//! OpenJTalk の音素体系に基づく。空文字の子音は「子音なし」を表す。

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 基本モーラ表 (カタカナ, 子音, 母音)
///
/// 音素 -> カタカナの逆引きはこの表のみから生成する
/// （追加表は音素列が重複するため逆引きに使えない）。
pub const MORA_LIST_MINIMUM: &[(&str, &str, &str)] = &[
    ("ヴォ", "v", "o"),
    ("ヴェ", "v", "e"),
    ("ヴィ", "v", "i"),
    ("ヴァ", "v", "a"),
    ("ヴ", "v", "u"),
    ("ン", "", "N"),
    ("ワ", "w", "a"),
    ("ロ", "r", "o"),
    ("レ", "r", "e"),
    ("ル", "r", "u"),
    ("リョ", "ry", "o"),
    ("リュ", "ry", "u"),
    ("リャ", "ry", "a"),
    ("リェ", "ry", "e"),
    ("リ", "r", "i"),
    ("ラ", "r", "a"),
    ("ヨ", "y", "o"),
    ("ユ", "y", "u"),
    ("ヤ", "y", "a"),
    ("モ", "m", "o"),
    ("メ", "m", "e"),
    ("ム", "m", "u"),
    ("ミョ", "my", "o"),
    ("ミュ", "my", "u"),
    ("ミャ", "my", "a"),
    ("ミェ", "my", "e"),
    ("ミ", "m", "i"),
    ("マ", "m", "a"),
    ("ポ", "p", "o"),
    ("ボ", "b", "o"),
    ("ホ", "h", "o"),
    ("ペ", "p", "e"),
    ("ベ", "b", "e"),
    ("ヘ", "h", "e"),
    ("プ", "p", "u"),
    ("ブ", "b", "u"),
    ("フォ", "f", "o"),
    ("フェ", "f", "e"),
    ("フィ", "f", "i"),
    ("ファ", "f", "a"),
    ("フ", "f", "u"),
    ("ピョ", "py", "o"),
    ("ピュ", "py", "u"),
    ("ピャ", "py", "a"),
    ("ピェ", "py", "e"),
    ("ピ", "p", "i"),
    ("ビョ", "by", "o"),
    ("ビュ", "by", "u"),
    ("ビャ", "by", "a"),
    ("ビェ", "by", "e"),
    ("ビ", "b", "i"),
    ("ヒョ", "hy", "o"),
    ("ヒュ", "hy", "u"),
    ("ヒャ", "hy", "a"),
    ("ヒェ", "hy", "e"),
    ("ヒ", "h", "i"),
    ("パ", "p", "a"),
    ("バ", "b", "a"),
    ("ハ", "h", "a"),
    ("ノ", "n", "o"),
    ("ネ", "n", "e"),
    ("ヌ", "n", "u"),
    ("ニョ", "ny", "o"),
    ("ニュ", "ny", "u"),
    ("ニャ", "ny", "a"),
    ("ニェ", "ny", "e"),
    ("ニ", "n", "i"),
    ("ナ", "n", "a"),
    ("ドゥ", "d", "u"),
    ("ド", "d", "o"),
    ("トゥ", "t", "u"),
    ("ト", "t", "o"),
    ("デョ", "dy", "o"),
    ("デュ", "dy", "u"),
    ("デャ", "dy", "a"),
    ("デェ", "dy", "e"),
    ("ディ", "d", "i"),
    ("デ", "d", "e"),
    ("テョ", "ty", "o"),
    ("テュ", "ty", "u"),
    ("テャ", "ty", "a"),
    ("ティ", "t", "i"),
    ("テ", "t", "e"),
    ("ツォ", "ts", "o"),
    ("ツェ", "ts", "e"),
    ("ツィ", "ts", "i"),
    ("ツァ", "ts", "a"),
    ("ツ", "ts", "u"),
    ("ッ", "", "cl"),
    ("チョ", "ch", "o"),
    ("チュ", "ch", "u"),
    ("チャ", "ch", "a"),
    ("チェ", "ch", "e"),
    ("チ", "ch", "i"),
    ("ダ", "d", "a"),
    ("タ", "t", "a"),
    ("ゾ", "z", "o"),
    ("ソ", "s", "o"),
    ("ゼ", "z", "e"),
    ("セ", "s", "e"),
    ("ズィ", "z", "i"),
    ("ズ", "z", "u"),
    ("スィ", "s", "i"),
    ("ス", "s", "u"),
    ("ジョ", "j", "o"),
    ("ジュ", "j", "u"),
    ("ジャ", "j", "a"),
    ("ジェ", "j", "e"),
    ("ジ", "j", "i"),
    ("ショ", "sh", "o"),
    ("シュ", "sh", "u"),
    ("シャ", "sh", "a"),
    ("シェ", "sh", "e"),
    ("シ", "sh", "i"),
    ("ザ", "z", "a"),
    ("サ", "s", "a"),
    ("ゴ", "g", "o"),
    ("コ", "k", "o"),
    ("ゲ", "g", "e"),
    ("ケ", "k", "e"),
    ("グヮ", "gw", "a"),
    ("グ", "g", "u"),
    ("クヮ", "kw", "a"),
    ("ク", "k", "u"),
    ("ギョ", "gy", "o"),
    ("ギュ", "gy", "u"),
    ("ギャ", "gy", "a"),
    ("ギェ", "gy", "e"),
    ("ギ", "g", "i"),
    ("キョ", "ky", "o"),
    ("キュ", "ky", "u"),
    ("キャ", "ky", "a"),
    ("キェ", "ky", "e"),
    ("キ", "k", "i"),
    ("ガ", "g", "a"),
    ("カ", "k", "a"),
    ("オ", "", "o"),
    ("エ", "", "e"),
    ("ウォ", "w", "o"),
    ("ウェ", "w", "e"),
    ("ウィ", "w", "i"),
    ("ウ", "", "u"),
    ("イェ", "y", "e"),
    ("イ", "", "i"),
    ("ア", "", "a"),
];

/// 追加モーラ表（旧仮名・捨て仮名など。読み仮名としてのみ受理する）
pub const MORA_LIST_ADDITIONAL: &[(&str, &str, &str)] = &[
    ("ヴョ", "by", "o"),
    ("ヴュ", "by", "u"),
    ("ヴャ", "by", "a"),
    ("ヲ", "", "o"),
    ("ヱ", "", "e"),
    ("ヰ", "", "i"),
    ("ヮ", "w", "a"),
    ("ョ", "y", "o"),
    ("ュ", "y", "u"),
    ("ヅ", "z", "u"),
    ("ヂ", "j", "i"),
    ("ヶ", "k", "e"),
    ("ャ", "y", "a"),
    ("ォ", "", "o"),
    ("ェ", "", "e"),
    ("ゥ", "", "u"),
    ("ィ", "", "i"),
    ("ァ", "", "a"),
];

/// カタカナ -> (子音, 母音)。基本表 + 追加表。
pub static MORA_KANA_TO_PHONEMES: Lazy<HashMap<&'static str, (Option<&'static str>, &'static str)>> =
    Lazy::new(|| {
        MORA_LIST_MINIMUM
            .iter()
            .chain(MORA_LIST_ADDITIONAL.iter())
            .map(|&(kana, consonant, vowel)| {
                let consonant = if consonant.is_empty() {
                    None
                } else {
                    Some(consonant)
                };
                (kana, (consonant, vowel))
            })
            .collect()
    });

/// 音素列（子音+母音の連結） -> カタカナ。基本表のみ。
pub static MORA_PHONEMES_TO_KANA: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    MORA_LIST_MINIMUM
        .iter()
        .map(|&(kana, consonant, vowel)| (format!("{consonant}{vowel}"), kana))
        .collect()
});

/// モーラを構成するカタカナの最大文字数（longest match の探索上限）
pub const MAX_MORA_KANA_CHARS: usize = 2;

/// 母音音素か否か（無声化母音を含む）
pub fn is_vowel_phoneme(phoneme: &str) -> bool {
    matches!(
        phoneme,
        "a" | "i" | "u" | "e" | "o" | "A" | "I" | "U" | "E" | "O" | "N" | "cl" | "pau" | "sil"
    )
}

/// モーラ相当の音素文字列をカタカナへ変換する（例: "hO" -> "ホ"）
///
/// 無声化母音は小文字へ戻してから引く。表に無ければ音素列をそのまま返す。
pub fn mora_phonemes_to_text(mora_phonemes: &str) -> String {
    let mut key = mora_phonemes.to_string();
    if let Some(last) = key.chars().last() {
        if matches!(last, 'A' | 'I' | 'U' | 'E' | 'O') {
            key.pop();
            key.push(last.to_ascii_lowercase());
        }
    }
    match MORA_PHONEMES_TO_KANA.get(&key) {
        Some(kana) => (*kana).to_string(),
        None => mora_phonemes.to_string(),
    }
}
