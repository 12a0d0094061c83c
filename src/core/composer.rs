//! 영문 키 입력 -> 한글 조합기

use super::jamo::{lookup, Key};
use super::state::{CompositionState, Transition};

/// 두벌식 한글 조합기
///
/// 한 번의 변환 동안만 살아 있는 조합 버퍼와 출력 버퍼를 가집니다.
/// 키를 하나씩 받는 호출자는 [`Composer::feed`]로, 문자열 전체를 바꿀 때는
/// [`transliterate`]를 사용합니다.
#[derive(Debug, Default)]
pub struct Composer {
    state: CompositionState,
    output: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            state: CompositionState::Empty,
            output: String::with_capacity(capacity),
        }
    }

    /// 자모 하나를 입력
    pub fn feed(&mut self, key: Key) {
        let transition = match key {
            Key::Consonant(cho) => self.state.consonant(cho),
            Key::Vowel(jung) => self.state.vowel(jung),
        };
        self.apply(transition);
    }

    /// 문자 하나를 입력. 두벌식 키가 아니면 그대로 통과
    pub fn feed_char(&mut self, c: char) {
        match lookup(c) {
            Some(key) => self.feed(key),
            None => self.feed_passthrough(c),
        }
    }

    /// 변환 불가 문자 처리 (숫자, 특수문자 등): 조합 중인 글자를 확정한 뒤 그대로 출력
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush();
        self.output.push(c);
    }

    /// 지금 확정하면 출력될 글자 (조합 중 표시용, 상태는 바뀌지 않음)
    pub fn preedit(&self) -> Option<char> {
        self.state.commit()
    }

    /// 현재 조합 상태
    pub fn state(&self) -> CompositionState {
        self.state
    }

    /// 지금까지 확정된 출력
    pub fn committed(&self) -> &str {
        &self.output
    }

    /// 조합 중인 글자를 확정하고 결과 반환
    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    fn apply(&mut self, transition: Transition) {
        if let Some(c) = transition.committed {
            log::trace!("확정: {}", c);
            self.output.push(c);
        }
        self.state = transition.next;
    }

    fn flush(&mut self) {
        if let Some(c) = std::mem::take(&mut self.state).commit() {
            log::trace!("확정: {}", c);
            self.output.push(c);
        }
    }
}

/// 영문 키 입력 문자열을 한글 문자열로 변환
///
/// 매핑되지 않는 문자(숫자, 특수문자, 두벌식에 없는 대문자 등)는 그대로 유지합니다.
/// 항상 성공하며 입력 문자를 잃지 않습니다.
///
/// ```
/// assert_eq!(dubeol::transliterate("dkssudgktpdy"), "안녕하세요");
/// assert_eq!(dubeol::transliterate("k1"), "ㅏ1");
/// ```
pub fn transliterate(input: &str) -> String {
    let mut composer = Composer::with_capacity(input.len());
    for c in input.chars() {
        composer.feed_char(c);
    }
    composer.finish()
}
