//! 유니코드 한글 음절 조합/분해

use super::jamo::{Cho, Jong, Jung};

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// 마지막 음절 (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 하나가 차지하는 코드포인트 폭 (21 * 28)
const CHO_STRIDE: u32 = 588;
/// 중성 하나가 차지하는 코드포인트 폭 (받침 없음 포함 28)
const JUNG_STRIDE: u32 = 28;

/// 초성+중성+(종성)으로 완성형 음절 생성
///
/// 종성 오프셋은 받침 없음이 0이므로 `jong.index() + 1`을 사용합니다.
pub fn compose(cho: Cho, jung: Jung, jong: Option<Jong>) -> char {
    let jong_offset = jong.map_or(0, |j| u32::from(j.index()) + 1);
    let code = SYLLABLE_BASE
        + u32::from(cho.index()) * CHO_STRIDE
        + u32::from(jung.index()) * JUNG_STRIDE
        + jong_offset;
    // 인덱스 타입이 범위를 보장하므로 항상 가~힣 사이
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// 완성형 음절을 초성/중성/종성으로 분해
pub fn decompose(c: char) -> Option<(Cho, Jung, Option<Jong>)> {
    let code = c as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    let cho = Cho((offset / CHO_STRIDE) as u8);
    let jung = Jung(((offset % CHO_STRIDE) / JUNG_STRIDE) as u8);
    let jong = match offset % JUNG_STRIDE {
        0 => None,
        n => Some(Jong((n - 1) as u8)),
    };
    Some((cho, jung, jong))
}
