//! 변환 결과 분석
//!
//! 출력 문자를 완성형 음절 / 낱자모 / 통과 문자로 분류하고,
//! 낱자모가 남았는지(조합이 덜 된 입력인지) 판단합니다.

use std::fmt;

use serde::Serialize;

use crate::core::jamo::{Cho, Jung};
use crate::core::syllable::{decompose, SYLLABLE_BASE, SYLLABLE_LAST};
use crate::core::tables::{final_strokes, vowel_strokes};

/// 호환용 자모 중 두벌식으로 나올 수 있는 범위 (ㄱ ~ ㅣ)
const COMPAT_JAMO_FIRST: u32 = 0x3131;
const COMPAT_JAMO_LAST: u32 = 0x3163;

/// 출력 단위 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputUnit {
    /// 완성형 음절 (가-힣)
    Syllable,
    /// 초성이나 중성이 빠져 단독으로 출력된 자모
    Jamo,
    /// 변환 대상이 아닌 문자
    Passthrough,
}

impl OutputUnit {
    pub fn classify(c: char) -> Self {
        if is_complete_hangul(c) {
            Self::Syllable
        } else if is_compat_jamo(c) {
            Self::Jamo
        } else {
            Self::Passthrough
        }
    }
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모(ㄱ-ㅣ)인지 확인
pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&(c as u32))
}

/// 출력 문자 하나가 나타내는 두벌식 키 입력 수
///
/// 이중모음과 겹받침은 두 번 입력해야 하므로 2로 셉니다.
/// 통과 문자는 0입니다.
pub fn keystroke_weight(c: char) -> usize {
    if let Some((_, jung, jong)) = decompose(c) {
        return 1 + vowel_strokes(jung) + jong.map_or(0, final_strokes);
    }
    if is_compat_jamo(c) {
        return jamo_weight(c);
    }
    0
}

fn jamo_weight(c: char) -> usize {
    if (0..Cho::COUNT as u8).filter_map(Cho::new).any(|cho| cho.as_char() == c) {
        return 1;
    }
    (0..Jung::COUNT as u8)
        .filter_map(Jung::new)
        .find(|jung| jung.as_char() == c)
        // 겹받침 낱자(ㄳ 등)는 조합기가 단독으로 내보내지 않음
        .map_or(1, vowel_strokes)
}

/// 변환 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// 완성형 음절 수
    pub syllables: usize,
    /// 낱자모 수
    pub jamo: usize,
    /// 통과 문자 수
    pub passthrough: usize,
    /// 한글 부분이 나타내는 키 입력 수
    pub keystrokes: usize,
}

impl Report {
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut report, c| {
            match OutputUnit::classify(c) {
                OutputUnit::Syllable => report.syllables += 1,
                OutputUnit::Jamo => report.jamo += 1,
                OutputUnit::Passthrough => report.passthrough += 1,
            }
            report.keystrokes += keystroke_weight(c);
            report
        })
    }

    /// 출력 단위 수
    pub fn units(&self) -> usize {
        self.syllables + self.jamo + self.passthrough
    }

    /// 낱자모 없이 모두 조합되었는지 (빈 결과는 false)
    pub fn is_fully_composed(&self) -> bool {
        self.units() > 0 && self.jamo == 0
    }

    /// 한글 문자(완성형 + 낱자모) 중 낱자모 비율 (0.0 ~ 1.0)
    pub fn jamo_ratio(&self) -> f32 {
        let hangul = self.syllables + self.jamo;
        if hangul == 0 {
            return 0.0;
        }
        self.jamo as f32 / hangul as f32
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "음절 {}, 낱자모 {}, 기타 {}, 키 입력 {}",
            self.syllables, self.jamo, self.passthrough, self.keystrokes
        )
    }
}
