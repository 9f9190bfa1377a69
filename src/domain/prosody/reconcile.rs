//! 韻律編集の伝播
//!
//! アクセント句系列が差し替えられたとき、変更されていない句の音長・音高を
//! 以前の値から引き継ぎ、ユーザーが明示的に設定した値を再導出で
//! 上書きしないための純粋なデータ変換。I/O は行わない。

use super::model::{AccentPhrase, Mora};

/// 音長・音高を除いた骨格（モーラ表記・音素・アクセント・ポーズ有無・疑問形）
/// が一致するか
pub fn skeleton_eq(a: &AccentPhrase, b: &AccentPhrase) -> bool {
    if a.accent != b.accent
        || a.is_interrogative != b.is_interrogative
        || a.pause_mora.is_some() != b.pause_mora.is_some()
        || a.moras.len() != b.moras.len()
    {
        return false;
    }
    a.moras
        .iter()
        .zip(b.moras.iter())
        .all(|(x, y)| x.text == y.text && x.consonant == y.consonant && x.vowel == y.vowel)
}

/// 未設定 (0) の派生フィールドへ以前の値を引き継ぐ
fn carry_over_mora(current: &mut Mora, previous: &Mora) {
    if current.vowel_length == 0.0 {
        current.vowel_length = previous.vowel_length;
    }
    if let (Some(length), Some(prev_length)) =
        (current.consonant_length.as_mut(), previous.consonant_length)
    {
        if *length == 0.0 {
            *length = prev_length;
        }
    }
    if current.pitch == 0.0 && !current.is_unvoiced() {
        current.pitch = previous.pitch;
    }
}

/// アクセント句系列の差し替えに伴う派生フィールドの照合
///
/// 同じ位置の句が骨格一致する場合のみ、以前の音長・音高を未設定フィールドへ
/// 引き継ぐ。骨格が変わった句は 0 のまま残し、下流の再導出対象とする。
pub fn reconcile(
    mut phrases: Vec<AccentPhrase>,
    previous: Option<&[AccentPhrase]>,
) -> Vec<AccentPhrase> {
    let Some(previous) = previous else {
        return phrases;
    };
    for (phrase, prev) in phrases.iter_mut().zip(previous.iter()) {
        if !skeleton_eq(phrase, prev) {
            continue;
        }
        for (mora, prev_mora) in phrase.moras.iter_mut().zip(prev.moras.iter()) {
            carry_over_mora(mora, prev_mora);
        }
        if let (Some(pause), Some(prev_pause)) = (phrase.pause_mora.as_mut(), &prev.pause_mora) {
            carry_over_mora(pause, prev_pause);
        }
    }
    phrases
}

/// 再導出結果の上へユーザー設定値を重ねる
///
/// `user` の非ゼロな音長・音高は、`filled`（合成核が埋めた値）より優先して
/// そのまま残す。両系列は同一骨格であることを前提とする。
pub fn overlay_user(mut filled: Vec<AccentPhrase>, user: &[AccentPhrase]) -> Vec<AccentPhrase> {
    for (phrase, user_phrase) in filled.iter_mut().zip(user.iter()) {
        if !skeleton_eq(phrase, user_phrase) {
            continue;
        }
        let pairs = phrase
            .moras
            .iter_mut()
            .zip(user_phrase.moras.iter())
            .chain(
                phrase
                    .pause_mora
                    .iter_mut()
                    .zip(user_phrase.pause_mora.iter()),
            );
        for (mora, user_mora) in pairs {
            if user_mora.vowel_length != 0.0 {
                mora.vowel_length = user_mora.vowel_length;
            }
            if let Some(user_length) = user_mora.consonant_length.filter(|&l| l != 0.0) {
                mora.consonant_length = Some(user_length);
            }
            if user_mora.pitch != 0.0 {
                mora.pitch = user_mora.pitch;
            }
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(texts: &[(&str, Option<&str>, &str)], accent: usize) -> AccentPhrase {
        let moras = texts
            .iter()
            .map(|&(text, consonant, vowel)| Mora {
                text: text.to_string(),
                consonant: consonant.map(str::to_string),
                consonant_length: consonant.map(|_| 0.0),
                vowel: vowel.to_string(),
                vowel_length: 0.0,
                pitch: 0.0,
            })
            .collect();
        AccentPhrase::new(moras, accent, None, false).unwrap()
    }

    fn filled_phrase(texts: &[(&str, Option<&str>, &str)], accent: usize) -> AccentPhrase {
        let mut p = phrase(texts, accent);
        for m in &mut p.moras {
            m.vowel_length = 0.1;
            if m.consonant_length.is_some() {
                m.consonant_length = Some(0.05);
            }
            m.pitch = 5.5;
        }
        p
    }

    #[test]
    fn test_unchanged_phrase_keeps_previous_values() {
        let previous = vec![filled_phrase(&[("カ", Some("k"), "a")], 1)];
        let edited = vec![phrase(&[("カ", Some("k"), "a")], 1)];
        let result = reconcile(edited, Some(&previous));
        assert_eq!(result[0].moras[0].vowel_length, 0.1);
        assert_eq!(result[0].moras[0].consonant_length, Some(0.05));
        assert_eq!(result[0].moras[0].pitch, 5.5);
    }

    #[test]
    fn test_changed_phrase_left_for_rederivation() {
        let previous = vec![filled_phrase(&[("カ", Some("k"), "a")], 1)];
        // アクセント移動 -> 骨格不一致 -> 引き継がない
        let edited = vec![phrase(
            &[("カ", Some("k"), "a"), ("キ", Some("k"), "i")],
            2,
        )];
        let result = reconcile(edited, Some(&previous));
        assert_eq!(result[0].moras[0].vowel_length, 0.0);
        assert_eq!(result[0].moras[0].pitch, 0.0);
    }

    #[test]
    fn test_only_changed_phrase_invalidated() {
        let previous = vec![
            filled_phrase(&[("ア", None, "a")], 1),
            filled_phrase(&[("イ", None, "i")], 1),
        ];
        let edited = vec![
            phrase(&[("ア", None, "a")], 1),
            phrase(&[("エ", None, "e")], 1),
        ];
        let result = reconcile(edited, Some(&previous));
        assert_eq!(result[0].moras[0].pitch, 5.5);
        assert_eq!(result[1].moras[0].pitch, 0.0);
    }

    #[test]
    fn test_user_set_value_not_overwritten() {
        let previous = vec![filled_phrase(&[("ア", None, "a")], 1)];
        let mut edited = vec![phrase(&[("ア", None, "a")], 1)];
        edited[0].moras[0].pitch = 6.2;
        let result = reconcile(edited, Some(&previous));
        // ユーザーが設定した音高はそのまま
        assert_eq!(result[0].moras[0].pitch, 6.2);
        // 未設定の音長だけ引き継がれる
        assert_eq!(result[0].moras[0].vowel_length, 0.1);
    }

    #[test]
    fn test_no_previous_is_identity() {
        let edited = vec![phrase(&[("ア", None, "a")], 1)];
        let result = reconcile(edited.clone(), None);
        assert_eq!(result, edited);
    }

    #[test]
    fn test_overlay_user_wins_over_filled() {
        let filled = vec![filled_phrase(&[("ア", None, "a"), ("イ", None, "i")], 1)];
        let mut user = vec![phrase(&[("ア", None, "a"), ("イ", None, "i")], 1)];
        user[0].moras[1].vowel_length = 0.42;
        let result = overlay_user(filled, &user);
        assert_eq!(result[0].moras[0].vowel_length, 0.1);
        assert_eq!(result[0].moras[1].vowel_length, 0.42);
    }
}
