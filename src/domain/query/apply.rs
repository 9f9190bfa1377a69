//! クエリパラメータの適用
//!
//! AudioQuery が持つ大域パラメータ（話速・音高・抑揚・無音）を
//! モーラ系列へ反映する純粋な変換群。合成核へ渡す直前に使う。

use crate::domain::prosody::mora_table::mora_phonemes_to_text;
use crate::domain::prosody::{to_flatten_moras, AccentPhrase, Mora};

use super::model::AudioQuery;

/// 疑問形語尾モーラの音長（秒）
const UPSPEAK_LENGTH: f32 = 0.15;
/// 疑問形語尾モーラの音高加算量
const UPSPEAK_PITCH_ADD: f32 = 0.3;
/// 疑問形語尾モーラの音高上限
const UPSPEAK_PITCH_MAX: f32 = 6.5;

/// 疑問形アクセント句の句末へ上昇調モーラを付与する
///
/// 条件: 疑問形フラグが立ち、かつ句末モーラが有声 (pitch > 0)。
pub fn apply_interrogative_upspeak(phrases: &mut [AccentPhrase], enable: bool) {
    if !enable {
        return;
    }
    for phrase in phrases.iter_mut() {
        let Some(last) = phrase.moras.last() else {
            continue;
        };
        if !phrase.is_interrogative || last.pitch <= 0.0 {
            continue;
        }
        let upspeak = Mora {
            text: mora_phonemes_to_text(&last.vowel),
            consonant: None,
            consonant_length: None,
            vowel: last.vowel.clone(),
            vowel_length: UPSPEAK_LENGTH,
            pitch: (last.pitch + UPSPEAK_PITCH_ADD).min(UPSPEAK_PITCH_MAX),
        };
        phrase.moras.push(upspeak);
    }
}

/// 前後無音モーラを付加する
fn apply_prepost_silence(moras: &mut Vec<Mora>, query: &AudioQuery) {
    moras.insert(0, Mora::silence(query.pre_phoneme_length));
    moras.push(Mora::silence(query.post_phoneme_length));
}

/// pauseLength 指定でポーズモーラの音長を上書きする
fn apply_pause_length(moras: &mut [Mora], query: &AudioQuery) {
    if let Some(pause_length) = query.pause_length {
        for mora in moras.iter_mut().filter(|m| m.vowel == "pau") {
            mora.vowel_length = pause_length;
        }
    }
}

/// pauseLengthScale をポーズモーラへ適用する
fn apply_pause_length_scale(moras: &mut [Mora], query: &AudioQuery) {
    for mora in moras.iter_mut().filter(|m| m.vowel == "pau") {
        mora.vowel_length *= query.pause_length_scale;
    }
}

/// speedScale を音長へ適用する（速いほど短く）
fn apply_speed_scale(moras: &mut [Mora], query: &AudioQuery) {
    for mora in moras.iter_mut() {
        mora.vowel_length /= query.speed_scale;
        if let Some(length) = mora.consonant_length.as_mut() {
            *length /= query.speed_scale;
        }
    }
}

/// pitchScale を音高へ適用する（2^scale 倍）
fn apply_pitch_scale(moras: &mut [Mora], query: &AudioQuery) {
    let factor = 2f32.powf(query.pitch_scale);
    for mora in moras.iter_mut() {
        mora.pitch *= factor;
    }
}

/// intonationScale を適用する（有声モーラの平均音高からの乖離を伸縮）
fn apply_intonation_scale(moras: &mut [Mora], query: &AudioQuery) {
    let voiced: Vec<usize> = moras
        .iter()
        .enumerate()
        .filter(|(_, m)| m.pitch > 0.0)
        .map(|(i, _)| i)
        .collect();
    if voiced.is_empty() {
        return;
    }
    let mean: f32 = voiced.iter().map(|&i| moras[i].pitch).sum::<f32>() / voiced.len() as f32;
    for &i in &voiced {
        moras[i].pitch = (moras[i].pitch - mean) * query.intonation_scale + mean;
    }
}

/// AudioQuery の大域パラメータを反映したモーラ系列を得る
///
/// 合成核へ渡す最終形。volumeScale は波形側の後処理なのでここでは扱わない。
pub fn query_to_moras(query: &AudioQuery, enable_interrogative_upspeak: bool) -> Vec<Mora> {
    let mut phrases = query.accent_phrases.clone();
    apply_interrogative_upspeak(&mut phrases, enable_interrogative_upspeak);
    let mut moras = to_flatten_moras(&phrases);
    apply_pause_length(&mut moras, query);
    apply_pause_length_scale(&mut moras, query);
    apply_prepost_silence(&mut moras, query);
    apply_speed_scale(&mut moras, query);
    apply_pitch_scale(&mut moras, query);
    apply_intonation_scale(&mut moras, query);
    moras
}
