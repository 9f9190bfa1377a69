//! アクセント句ビルダー
//!
//! 特徴レコード系列を呼気段落・アクセント句・モーラへ区切り、
//! アクセント核位置とポーズモーラを決定する。

use super::errors::ProsodyError;
use super::label::FeatureLabel;
use super::model::{AccentPhrase, Mora};
use super::mora_table::is_vowel_phoneme;

/// モーラ位置コンテキストの上限。49 以降はラベルのモーラ番号が
/// 区切りとして使えないため、そこでモーラ抽出を打ち切る。
const MORA_INDEX_LIMIT: u32 = 49;

/// 特徴レコード系列からアクセント句系列を構築する
///
/// 空の系列・無音のみの系列は空のアクセント句リストを返す（エラーにしない）。
pub fn build_accent_phrases(labels: &[FeatureLabel]) -> Result<Vec<AccentPhrase>, ProsodyError> {
    let breath_groups = split_breath_groups(labels);
    if breath_groups.is_empty() {
        return Ok(Vec::new());
    }

    let mut phrases = Vec::new();
    let group_count = breath_groups.len();
    for (group_index, group) in breath_groups.iter().enumerate() {
        let phrase_groups = split_accent_phrases(group);
        let phrase_count = phrase_groups.len();
        for (phrase_index, phrase_labels) in phrase_groups.iter().enumerate() {
            let mut phrase = build_single_phrase(phrase_labels)?;
            // 呼気段落の切れ目（最終アクセント句かつ非最終段落）にポーズを挿入する
            if phrase_index == phrase_count - 1 && group_index != group_count - 1 {
                phrase.pause_mora = Some(Mora::pause());
            }
            phrases.push(phrase);
        }
    }
    Ok(phrases)
}

/// 無音ラベルを区切りとして呼気段落ごとのラベル系列へ分割する
fn split_breath_groups(labels: &[FeatureLabel]) -> Vec<Vec<FeatureLabel>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for label in labels {
        if label.is_pause {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(label.clone());
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// (呼気段落位置, アクセント句位置) の変化を区切りとして分割する
fn split_accent_phrases(labels: &[FeatureLabel]) -> Vec<Vec<FeatureLabel>> {
    let mut groups: Vec<Vec<FeatureLabel>> = Vec::new();
    let mut current: Vec<FeatureLabel> = Vec::new();
    for label in labels {
        if let Some(prev) = current.last() {
            if prev.breath_group_index != label.breath_group_index
                || prev.accent_phrase_index != label.accent_phrase_index
            {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.push(label.clone());
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// 単一アクセント句のラベル系列からアクセント句を構築する
fn build_single_phrase(labels: &[FeatureLabel]) -> Result<AccentPhrase, ProsodyError> {
    let mut moras: Vec<Mora> = Vec::new();
    let mut mora_labels: Vec<&FeatureLabel> = Vec::new();
    let mut accent_position = 0u32;
    let mut is_interrogative = false;

    for (i, label) in labels.iter().enumerate() {
        // モーラ番号の上限に達したら以降は抽出しない
        if label.mora_index == Some(MORA_INDEX_LIMIT) {
            break;
        }
        mora_labels.push(label);

        let next = labels.get(i + 1);
        let boundary = match next {
            Some(next) => next.mora_index != label.mora_index,
            None => true,
        };
        if !boundary {
            continue;
        }

        // モーラ区切りは必ず母音（撥音・促音を含む）で終わる
        let mora = match mora_labels.as_slice() {
            [vowel] if is_vowel_phoneme(&vowel.phoneme) => {
                Mora::from_phonemes(None, &vowel.phoneme)
            }
            [consonant, vowel] if is_vowel_phoneme(&vowel.phoneme) => {
                Mora::from_phonemes(Some(&consonant.phoneme), &vowel.phoneme)
            }
            _ => {
                return Err(ProsodyError::InvalidMoraPhonemes {
                    phonemes: mora_labels.iter().map(|l| l.phoneme.clone()).collect(),
                })
            }
        };
        // アクセント位置は先頭モーラの母音ラベル、疑問形は末尾モーラの
        // 母音ラベルのコンテキストから決まる
        let vowel_label = mora_labels[mora_labels.len() - 1];
        if moras.is_empty() {
            accent_position = vowel_label.accent_position;
        }
        is_interrogative = vowel_label.is_interrogative;
        moras.push(mora);
        mora_labels.clear();
    }

    if moras.is_empty() {
        return Err(ProsodyError::EmptyAccentPhrase);
    }

    // 平板型 (0) は句末扱い。モーラ数を超える値はクリップする。
    let accent = match accent_position as usize {
        0 => moras.len(),
        n if n > moras.len() => moras.len(),
        n => n,
    };

    AccentPhrase::new(moras, accent, None, is_interrogative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prosody::label::test_support::{feature, pause_feature};

    fn parse(features: &[String]) -> Vec<FeatureLabel> {
        FeatureLabel::parse_all(features).unwrap()
    }

    /// 「こんにちは」相当: 1呼気段落・1アクセント句・5モーラ・平板型
    fn konnichiwa_features() -> Vec<String> {
        let mut f = vec![pause_feature("sil")];
        for (phonemes, mora_index) in [
            (vec!["k", "o"], "1"),
            (vec!["N"], "2"),
            (vec!["n", "i"], "3"),
            (vec!["ch", "i"], "4"),
            (vec!["w", "a"], "5"),
        ] {
            for p in phonemes {
                f.push(feature(p, mora_index, "5", "0", "0", "1", "1"));
            }
        }
        f.push(pause_feature("sil"));
        f
    }

    #[test]
    fn test_single_flat_phrase() {
        let phrases = build_accent_phrases(&parse(&konnichiwa_features())).unwrap();
        assert_eq!(phrases.len(), 1);
        let phrase = &phrases[0];
        let texts: Vec<&str> = phrase.moras.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["コ", "ン", "ニ", "チ", "ワ"]);
        // 平板型はアクセント核が句末へ割り当てられる
        assert_eq!(phrase.accent, 5);
        assert!(phrase.pause_mora.is_none());
        assert!(!phrase.is_interrogative);
    }

    #[test]
    fn test_empty_input_yields_no_phrases() {
        assert!(build_accent_phrases(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_pause_only_input_yields_no_phrases() {
        let features = vec![pause_feature("sil"), pause_feature("pau"), pause_feature("sil")];
        assert!(build_accent_phrases(&parse(&features)).unwrap().is_empty());
    }

    #[test]
    fn test_pause_mora_between_breath_groups() {
        // 2呼気段落: 「ア」 pau 「カ」
        let features = vec![
            pause_feature("sil"),
            feature("a", "1", "1", "1", "0", "1", "1"),
            pause_feature("pau"),
            feature("k", "1", "1", "1", "0", "1", "2"),
            feature("a", "1", "1", "1", "0", "1", "2"),
            pause_feature("sil"),
        ];
        let phrases = build_accent_phrases(&parse(&features)).unwrap();
        assert_eq!(phrases.len(), 2);
        assert!(phrases[0].pause_mora.is_some());
        assert_eq!(phrases[0].pause_mora.as_ref().unwrap().vowel, "pau");
        // 最終呼気段落にはポーズを付けない
        assert!(phrases[1].pause_mora.is_none());
    }

    #[test]
    fn test_accent_phrase_boundary_within_breath_group() {
        // 同一呼気段落内で f5 が変化 -> アクセント句の境界
        let features = vec![
            pause_feature("sil"),
            feature("a", "1", "1", "1", "0", "1", "1"),
            feature("i", "1", "1", "2", "0", "2", "1"),
            feature("e", "2", "2", "2", "0", "2", "1"),
            pause_feature("sil"),
        ];
        let phrases = build_accent_phrases(&parse(&features)).unwrap();
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].moras.len(), 1);
        assert_eq!(phrases[1].moras.len(), 2);
        // 句の途中にはポーズモーラが入らない
        assert!(phrases[0].pause_mora.is_none());
    }

    #[test]
    fn test_accent_clipped_to_mora_count() {
        // アクセント位置がモーラ数を超える場合はクリップ
        let features = vec![
            feature("a", "1", "1", "7", "0", "1", "1"),
            feature("i", "2", "2", "7", "0", "1", "1"),
        ];
        let phrases = build_accent_phrases(&parse(&features)).unwrap();
        assert_eq!(phrases[0].accent, 2);
    }

    #[test]
    fn test_interrogative_flag_from_final_mora() {
        let features = vec![
            feature("k", "1", "1", "1", "1", "1", "1"),
            feature("a", "1", "1", "1", "1", "1", "1"),
        ];
        let phrases = build_accent_phrases(&parse(&features)).unwrap();
        assert!(phrases[0].is_interrogative);
    }

    #[test]
    fn test_devoiced_vowel_kept() {
        // 無声化母音 (U) はそのまま保持され、カタカナ表記は通常形になる
        let features = vec![
            feature("s", "1", "2", "1", "0", "1", "1"),
            feature("U", "1", "2", "1", "0", "1", "1"),
            feature("k", "2", "2", "1", "0", "1", "1"),
            feature("i", "2", "2", "1", "0", "1", "1"),
        ];
        let phrases = build_accent_phrases(&parse(&features)).unwrap();
        let m = &phrases[0].moras[0];
        assert_eq!(m.vowel, "U");
        assert_eq!(m.text, "ス");
        assert!(m.is_unvoiced());
    }

    #[test]
    fn test_mora_without_vowel_is_rejected() {
        // 子音だけで終わるモーラ区切りは不正なラベル系列
        let features = vec![
            feature("k", "1", "1", "1", "0", "1", "1"),
            feature("s", "2", "1", "1", "0", "1", "1"),
        ];
        let err = build_accent_phrases(&parse(&features)).unwrap_err();
        assert!(matches!(err, ProsodyError::InvalidMoraPhonemes { .. }));
    }

    #[test]
    fn test_accent_bounds_invariant() {
        let phrases = build_accent_phrases(&parse(&konnichiwa_features())).unwrap();
        for p in &phrases {
            assert!(p.accent >= 1 && p.accent <= p.moras.len());
        }
    }
}
