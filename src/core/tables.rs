//! 이중모음/겹받침 조합 테이블
//!
//! 세 테이블 모두 불변 정적 데이터입니다. 겹받침 분해는 겹받침 조합의
//! 역함수이므로 같은 표를 반대 방향으로 조회합니다.

use super::jamo::{Cho, Jong, Jung};

/// (기존 중성, 입력 모음) -> 이중모음
static COMPLEX_VOWELS: [(Jung, Jung, Jung); 7] = [
    (Jung(8), Jung(0), Jung(9)),    // ㅗ + ㅏ = ㅘ
    (Jung(8), Jung(1), Jung(10)),   // ㅗ + ㅐ = ㅙ
    (Jung(8), Jung(20), Jung(11)),  // ㅗ + ㅣ = ㅚ
    (Jung(13), Jung(4), Jung(14)),  // ㅜ + ㅓ = ㅝ
    (Jung(13), Jung(5), Jung(15)),  // ㅜ + ㅔ = ㅞ
    (Jung(13), Jung(20), Jung(16)), // ㅜ + ㅣ = ㅟ
    (Jung(18), Jung(20), Jung(19)), // ㅡ + ㅣ = ㅢ
];

/// (남는 받침, 넘어가는 자음) <-> 겹받침
static COMPOUND_FINALS: [(Jong, Cho, Jong); 11] = [
    (Jong(0), Cho(9), Jong(2)),    // ㄱ + ㅅ = ㄳ
    (Jong(3), Cho(12), Jong(4)),   // ㄴ + ㅈ = ㄵ
    (Jong(3), Cho(18), Jong(5)),   // ㄴ + ㅎ = ㄶ
    (Jong(7), Cho(0), Jong(8)),    // ㄹ + ㄱ = ㄺ
    (Jong(7), Cho(6), Jong(9)),    // ㄹ + ㅁ = ㄻ
    (Jong(7), Cho(7), Jong(10)),   // ㄹ + ㅂ = ㄼ
    (Jong(7), Cho(9), Jong(11)),   // ㄹ + ㅅ = ㄽ
    (Jong(7), Cho(16), Jong(12)),  // ㄹ + ㅌ = ㄾ
    (Jong(7), Cho(17), Jong(13)),  // ㄹ + ㅍ = ㄿ
    (Jong(7), Cho(18), Jong(14)),  // ㄹ + ㅎ = ㅀ
    (Jong(16), Cho(9), Jong(17)),  // ㅂ + ㅅ = ㅄ
];

/// 두 모음을 이중모음으로 조합
pub fn merge_vowel(current: Jung, incoming: Jung) -> Option<Jung> {
    COMPLEX_VOWELS
        .iter()
        .find(|(base, add, _)| *base == current && *add == incoming)
        .map(|&(_, _, merged)| merged)
}

/// 받침 뒤에 자음을 붙여 겹받침으로 조합
pub fn merge_final(current: Jong, incoming: Cho) -> Option<Jong> {
    COMPOUND_FINALS
        .iter()
        .find(|(base, add, _)| *base == current && *add == incoming)
        .map(|&(_, _, merged)| merged)
}

/// 겹받침 분해: (남는 받침, 다음 글자 초성)
/// 홑받침은 표에 없으므로 `None` (받침 전체가 넘어감)
pub fn split_final(jong: Jong) -> Option<(Jong, Cho)> {
    COMPOUND_FINALS
        .iter()
        .find(|(_, _, merged)| *merged == jong)
        .map(|&(kept, moved, _)| (kept, moved))
}

/// 이중모음을 구성하는 모음 수 (단모음 1, 이중모음 2)
pub fn vowel_strokes(jung: Jung) -> usize {
    if COMPLEX_VOWELS.iter().any(|&(_, _, merged)| merged == jung) {
        2
    } else {
        1
    }
}

/// 받침을 구성하는 자음 수 (홑받침 1, 겹받침 2)
pub fn final_strokes(jong: Jong) -> usize {
    if split_final(jong).is_some() {
        2
    } else {
        1
    }
}
