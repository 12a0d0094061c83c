//! 조합 중인 한 글자의 상태와 상태 전이
//!
//! 상태는 값 타입이며 전이 함수는 `self`를 소비하고 새 상태를 돌려줍니다.
//! 전이 중 확정된 글자는 [`Transition::committed`]로 함께 반환됩니다.

use super::jamo::{Cho, Jong, Jung};
use super::syllable::compose;
use super::tables::{merge_final, merge_vowel, split_final};

/// 조합 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionState {
    /// 아무것도 없음
    #[default]
    Empty,
    /// 초성만 입력됨
    Cho(Cho),
    /// 초성+중성
    ChoJung(Cho, Jung),
    /// 초성+중성+종성
    ChoJungJong(Cho, Jung, Jong),
    /// 초성 없이 모음만 입력됨
    JungOnly(Jung),
}

/// 전이 결과: 확정된 글자(있으면)와 다음 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub committed: Option<char>,
    pub next: CompositionState,
}

impl Transition {
    fn stay(next: CompositionState) -> Self {
        Self {
            committed: None,
            next,
        }
    }

    fn commit(prev: CompositionState, next: CompositionState) -> Self {
        Self {
            committed: prev.commit(),
            next,
        }
    }
}

impl CompositionState {
    /// (초성, 중성, 종성) 형태로 펼침
    pub fn parts(self) -> (Option<Cho>, Option<Jung>, Option<Jong>) {
        match self {
            Self::Empty => (None, None, None),
            Self::Cho(cho) => (Some(cho), None, None),
            Self::ChoJung(cho, jung) => (Some(cho), Some(jung), None),
            Self::ChoJungJong(cho, jung, jong) => (Some(cho), Some(jung), Some(jong)),
            Self::JungOnly(jung) => (None, Some(jung), None),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// 현재 상태를 출력 글자 하나로 확정
    ///
    /// 초성+중성이 있으면 완성형 음절, 하나만 있으면 호환용 낱자모,
    /// 비어 있으면 `None`.
    pub fn commit(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Cho(cho) => Some(cho.as_char()),
            Self::ChoJung(cho, jung) => Some(compose(cho, jung, None)),
            Self::ChoJungJong(cho, jung, jong) => Some(compose(cho, jung, Some(jong))),
            Self::JungOnly(jung) => Some(jung.as_char()),
        }
    }

    /// 자음 입력
    pub fn consonant(self, incoming: Cho) -> Transition {
        match self {
            Self::Empty => Transition::stay(Self::Cho(incoming)),
            Self::JungOnly(_) | Self::Cho(_) => Transition::commit(self, Self::Cho(incoming)),
            Self::ChoJung(cho, jung) => match incoming.as_jong() {
                Some(jong) => Transition::stay(Self::ChoJungJong(cho, jung, jong)),
                // ㄸ, ㅃ, ㅉ는 받침 불가
                None => Transition::commit(self, Self::Cho(incoming)),
            },
            Self::ChoJungJong(cho, jung, jong) => match merge_final(jong, incoming) {
                Some(merged) => Transition::stay(Self::ChoJungJong(cho, jung, merged)),
                None => Transition::commit(self, Self::Cho(incoming)),
            },
        }
    }

    /// 모음 입력
    pub fn vowel(self, incoming: Jung) -> Transition {
        match self {
            Self::Empty => Transition::stay(Self::JungOnly(incoming)),
            Self::JungOnly(jung) => match merge_vowel(jung, incoming) {
                Some(merged) => Transition::stay(Self::JungOnly(merged)),
                None => Transition::commit(self, Self::JungOnly(incoming)),
            },
            Self::Cho(cho) => Transition::stay(Self::ChoJung(cho, incoming)),
            Self::ChoJung(cho, jung) => match merge_vowel(jung, incoming) {
                Some(merged) => Transition::stay(Self::ChoJung(cho, merged)),
                None => Transition::commit(self, Self::JungOnly(incoming)),
            },
            Self::ChoJungJong(cho, jung, jong) => resyllabify(cho, jung, jong, incoming),
        }
    }
}

/// 연음: 받침 뒤에 모음이 오면 받침(겹받침이면 뒷자음)을 다음 글자 초성으로 옮김
fn resyllabify(cho: Cho, jung: Jung, jong: Jong, incoming: Jung) -> Transition {
    if let Some((kept, moved)) = split_final(jong) {
        log::debug!("겹받침 분리: {} -> {} + {}", jong.as_char(), kept.as_char(), moved.as_char());
        return Transition::commit(
            CompositionState::ChoJungJong(cho, jung, kept),
            CompositionState::ChoJung(moved, incoming),
        );
    }

    // 홑받침은 모두 초성 형태가 있음
    let moved = jong.as_cho();
    debug_assert!(moved.is_some(), "초성으로 옮길 수 없는 받침: {}", jong.as_char());

    match moved {
        Some(moved) => Transition::commit(
            CompositionState::ChoJung(cho, jung),
            CompositionState::ChoJung(moved, incoming),
        ),
        None => {
            log::error!("초성으로 옮길 수 없는 받침: {}", jong.as_char());
            Transition::commit(
                CompositionState::ChoJungJong(cho, jung, jong),
                CompositionState::JungOnly(incoming),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::{lookup, Key};

    fn cho(key: char) -> Cho {
        match lookup(key) {
            Some(Key::Consonant(c)) => c,
            _ => panic!("자음 키 아님: {}", key),
        }
    }

    fn jung(key: char) -> Jung {
        match lookup(key) {
            Some(Key::Vowel(j)) => j,
            _ => panic!("모음 키 아님: {}", key),
        }
    }

    #[test]
    fn test_commit_shapes() {
        assert_eq!(CompositionState::Empty.commit(), None);
        assert_eq!(CompositionState::Cho(cho('t')).commit(), Some('ㅅ'));
        assert_eq!(CompositionState::JungOnly(jung('k')).commit(), Some('ㅏ'));
        assert_eq!(CompositionState::ChoJung(cho('r'), jung('k')).commit(), Some('가'));
        let gak = CompositionState::ChoJungJong(cho('r'), jung('k'), cho('r').as_jong().unwrap());
        assert_eq!(gak.commit(), Some('각'));
    }

    #[test]
    fn test_consonant_from_empty_and_jung_only() {
        let t = CompositionState::Empty.consonant(cho('r'));
        assert_eq!(t.committed, None);
        assert_eq!(t.next, CompositionState::Cho(cho('r')));

        let t = CompositionState::JungOnly(jung('k')).consonant(cho('r'));
        assert_eq!(t.committed, Some('ㅏ'));
        assert_eq!(t.next, CompositionState::Cho(cho('r')));
    }

    #[test]
    fn test_consonant_after_bare_cho_commits() {
        let t = CompositionState::Cho(cho('r')).consonant(cho('s'));
        assert_eq!(t.committed, Some('ㄱ'));
        assert_eq!(t.next, CompositionState::Cho(cho('s')));
    }

    #[test]
    fn test_consonant_attaches_as_final() {
        let t = CompositionState::ChoJung(cho('d'), jung('k')).consonant(cho('s'));
        assert_eq!(t.committed, None);
        assert_eq!(t.next.commit(), Some('안'));
    }

    #[test]
    fn test_tense_consonant_is_never_final() {
        let t = CompositionState::ChoJung(cho('r'), jung('k')).consonant(cho('E'));
        assert_eq!(t.committed, Some('가'));
        assert_eq!(t.next, CompositionState::Cho(cho('E')));
    }

    #[test]
    fn test_compound_final() {
        let dal = CompositionState::ChoJung(cho('d'), jung('k')).consonant(cho('f')).next;
        let t = dal.consonant(cho('r'));
        assert_eq!(t.committed, None);
        assert_eq!(t.next.commit(), Some('앍'));

        // 겹받침 불가 조합
        let t = dal.consonant(cho('s'));
        assert_eq!(t.committed, Some('알'));
        assert_eq!(t.next, CompositionState::Cho(cho('s')));
    }

    #[test]
    fn test_vowel_merges() {
        let t = CompositionState::ChoJung(cho('r'), jung('h')).vowel(jung('k'));
        assert_eq!(t.committed, None);
        assert_eq!(t.next.commit(), Some('과'));

        let t = CompositionState::JungOnly(jung('m')).vowel(jung('l'));
        assert_eq!(t.committed, None);
        assert_eq!(t.next.commit(), Some('ㅢ'));
    }

    #[test]
    fn test_vowel_without_merge_starts_bare_vowel() {
        let t = CompositionState::ChoJung(cho('r'), jung('k')).vowel(jung('k'));
        assert_eq!(t.committed, Some('가'));
        assert_eq!(t.next, CompositionState::JungOnly(jung('k')));

        let t = CompositionState::JungOnly(jung('k')).vowel(jung('h'));
        assert_eq!(t.committed, Some('ㅏ'));
        assert_eq!(t.next, CompositionState::JungOnly(jung('h')));
    }

    #[test]
    fn test_simple_final_migrates() {
        let an = CompositionState::ChoJung(cho('d'), jung('k')).consonant(cho('s')).next;
        let t = an.vowel(jung('u'));
        assert_eq!(t.committed, Some('아'));
        assert_eq!(t.next, CompositionState::ChoJung(cho('s'), jung('u')));
    }

    #[test]
    fn test_compound_final_splits() {
        let dalk = CompositionState::ChoJung(cho('d'), jung('k'))
            .consonant(cho('f'))
            .next
            .consonant(cho('r'))
            .next;
        let t = dalk.vowel(jung('k'));
        assert_eq!(t.committed, Some('알'));
        assert_eq!(t.next, CompositionState::ChoJung(cho('r'), jung('k')));
    }

    #[test]
    fn test_parts() {
        assert_eq!(CompositionState::Empty.parts(), (None, None, None));
        assert_eq!(CompositionState::JungOnly(jung('k')).parts(), (None, Some(jung('k')), None));
        assert!(CompositionState::default().is_empty());
    }
}
