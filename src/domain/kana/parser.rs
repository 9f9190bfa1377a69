//! AquesTalk 風記法デコーダ
//!
//! 記法の規則:
//! - 読みはカタカナのみ
//! - `/` で区切り、`、` で無音付き区切り
//! - `_` で無声化、`'` でアクセント位置（各句にちょうど1つ）
//! - `？` で疑問形（句末のみ）
//!
//! 明示的な状態機械でパースし、違反箇所（句番号・該当文字列）を特定した
//! エラーを返す。曖昧な記法を黙って受理することはない。

use crate::domain::prosody::mora_table::{MAX_MORA_KANA_CHARS, MORA_KANA_TO_PHONEMES};
use crate::domain::prosody::{AccentPhrase, Mora};

use super::errors::KanaParseError;

pub(super) const UNVOICE_SYMBOL: char = '_';
pub(super) const ACCENT_SYMBOL: char = '\'';
pub(super) const NOPAUSE_DELIMITER: char = '/';
pub(super) const PAUSE_DELIMITER: char = '、';
pub(super) const WIDE_INTERROGATION_MARK: char = '？';

/// 句内パースの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhraseState {
    /// モーラ待ち（句頭。アクセント記号は置けない）
    SeekingFirstMora,
    /// モーラまたはアクセント記号待ち
    SeekingMoraOrAccent,
    /// 疑問符を読んだ。句の終端（区切りか入力末尾）のみ許す
    AfterInterrogative,
}

/// AquesTalk 風記法テキストからアクセント句系列を生成する
///
/// モーラの音長・音高は 0 初期化される（記法では表現されないため）。
pub fn parse_kana(text: &str) -> Result<Vec<AccentPhrase>, KanaParseError> {
    if text.is_empty() {
        return Err(KanaParseError::EmptyPhrase { position: 1 });
    }

    let chars: Vec<char> = text.chars().collect();
    let mut phrases: Vec<AccentPhrase> = Vec::new();
    let mut cursor = 0;

    loop {
        let phrase_number = phrases.len() + 1;
        let (phrase, consumed, delimiter) = parse_phrase(&chars[cursor..], phrase_number)?;
        phrases.push(phrase);
        cursor += consumed;

        match delimiter {
            Some(_) => {
                // 区切り文字の直後で入力が尽きたら次の句が空
                if cursor >= chars.len() {
                    return Err(KanaParseError::EmptyPhrase {
                        position: phrases.len() + 1,
                    });
                }
            }
            None => break,
        }
    }

    Ok(phrases)
}

/// 単一アクセント句をパースする。
/// 消費した文字数と、句を終えた区切り文字（入力末尾なら None）を返す。
fn parse_phrase(
    chars: &[char],
    phrase_number: usize,
) -> Result<(AccentPhrase, usize, Option<char>), KanaParseError> {
    let mut state = PhraseState::SeekingFirstMora;
    let mut moras: Vec<Mora> = Vec::new();
    let mut accent: Option<usize> = None;
    let mut is_interrogative = false;
    let mut pos = 0;

    let phrase_text = |chars: &[char], end: usize| -> String { chars[..end].iter().collect() };

    let delimiter = loop {
        let Some(&ch) = chars.get(pos) else {
            break None;
        };
        if ch == NOPAUSE_DELIMITER || ch == PAUSE_DELIMITER {
            break Some(ch);
        }

        if state == PhraseState::AfterInterrogative {
            // 「？」の後に区切り以外が続いた
            return Err(KanaParseError::InterrogativeNotAtEnd {
                phrase: phrase_number,
                text: phrase_text(chars, phrase_end(chars, pos)),
            });
        }

        match ch {
            ACCENT_SYMBOL => {
                if state == PhraseState::SeekingFirstMora {
                    return Err(KanaParseError::AccentOnPhraseTop {
                        phrase: phrase_number,
                        text: phrase_text(chars, phrase_end(chars, pos)),
                    });
                }
                if accent.is_some() {
                    return Err(KanaParseError::DuplicateAccent {
                        phrase: phrase_number,
                        text: phrase_text(chars, phrase_end(chars, pos)),
                    });
                }
                accent = Some(moras.len());
                pos += 1;
            }
            WIDE_INTERROGATION_MARK => {
                is_interrogative = true;
                state = PhraseState::AfterInterrogative;
                pos += 1;
            }
            _ => {
                let (mora, consumed) = scan_mora(&chars[pos..]).ok_or_else(|| {
                    KanaParseError::UnknownText {
                        phrase: phrase_number,
                        text: phrase_text(&chars[pos..], phrase_end(&chars[pos..], 0)),
                    }
                })?;
                moras.push(mora);
                state = PhraseState::SeekingMoraOrAccent;
                pos += consumed;
            }
        }
    };

    if moras.is_empty() {
        return Err(KanaParseError::EmptyPhrase {
            position: phrase_number,
        });
    }
    let Some(accent) = accent else {
        return Err(KanaParseError::MissingAccent {
            phrase: phrase_number,
            text: phrase_text(chars, phrase_end(chars, 0)),
        });
    };

    let pause_mora = (delimiter == Some(PAUSE_DELIMITER)).then(Mora::pause);
    let phrase = AccentPhrase {
        moras,
        accent,
        pause_mora,
        is_interrogative,
    };
    let consumed = pos + usize::from(delimiter.is_some());
    Ok((phrase, consumed, delimiter))
}

/// 現在位置が属する句の終端（次の区切りか入力末尾）を探す。エラー文言用。
fn phrase_end(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|&c| c == NOPAUSE_DELIMITER || c == PAUSE_DELIMITER)
        .map(|p| from + p)
        .unwrap_or(chars.len())
}

/// longest match で先頭のモーラを切り出す。
/// `_` 前置は無声化（母音 aiueo のみ有効）。
fn scan_mora(chars: &[char]) -> Option<(Mora, usize)> {
    let unvoiced = chars.first() == Some(&UNVOICE_SYMBOL);
    let body = if unvoiced { &chars[1..] } else { chars };

    let mut matched: Option<(usize, (Option<&str>, &str))> = None;
    let mut stack = String::new();
    for (i, &ch) in body.iter().take(MAX_MORA_KANA_CHARS).enumerate() {
        if ch == ACCENT_SYMBOL || ch == WIDE_INTERROGATION_MARK {
            break;
        }
        stack.push(ch);
        if let Some(&phonemes) = MORA_KANA_TO_PHONEMES.get(stack.as_str()) {
            matched = Some((i + 1, phonemes));
        }
    }

    let (len, (consonant, vowel)) = matched?;
    let vowel = if unvoiced {
        // 無声化は母音 aiueo に限る
        match vowel {
            "a" => "A",
            "i" => "I",
            "u" => "U",
            "e" => "E",
            "o" => "O",
            _ => return None,
        }
    } else {
        vowel
    };

    let text: String = body[..len].iter().collect();
    let mora = Mora {
        text,
        consonant: consonant.map(str::to_string),
        consonant_length: consonant.map(|_| 0.0),
        vowel: vowel.to_string(),
        vowel_length: 0.0,
        pitch: 0.0,
    };
    Some((mora, len + usize::from(unvoiced)))
}
