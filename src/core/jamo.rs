//! 두벌식 키 배치와 초성/중성/종성 자모 집합
//!
//! 각 자모는 유니코드 한글 음절 조합 순서의 인덱스로 표현합니다.
//! 단독 출력 시에는 호환용 자모(U+3131~U+3163)를 사용합니다.

/// 초성 자모 (19개): ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ
const CHO_CHARS: [char; Cho::COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 자모 (21개, 이중모음 포함)
const JUNG_CHARS: [char; Jung::COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 자모 (27개, 겹받침 포함). "받침 없음"은 이 표에 없고 `None`으로 표현
const JONG_CHARS: [char; Jong::COUNT] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성 인덱스별 종성 인덱스 (ㄸ, ㅃ, ㅉ는 받침이 될 수 없음)
const CHO_TO_JONG: [Option<u8>; Cho::COUNT] = [
    Some(0),  // ㄱ
    Some(1),  // ㄲ
    Some(3),  // ㄴ
    Some(6),  // ㄷ
    None,     // ㄸ
    Some(7),  // ㄹ
    Some(15), // ㅁ
    Some(16), // ㅂ
    None,     // ㅃ
    Some(18), // ㅅ
    Some(19), // ㅆ
    Some(20), // ㅇ
    Some(21), // ㅈ
    None,     // ㅉ
    Some(22), // ㅊ
    Some(23), // ㅋ
    Some(24), // ㅌ
    Some(25), // ㅍ
    Some(26), // ㅎ
];

/// 두벌식 영문 키 (33개). 앞 19개는 초성 순서, 뒤 14개는 `VOWEL_JUNG` 순서
const CONSONANT_KEYS: [char; Cho::COUNT] = [
    'r', 'R', 's', 'e', 'E', 'f', 'a', 'q', 'Q', 't', 'T', 'd', 'w', 'W', 'c', 'z', 'x', 'v', 'g',
];
const VOWEL_KEYS: [char; 14] = ['k', 'o', 'i', 'O', 'j', 'p', 'u', 'P', 'h', 'y', 'n', 'b', 'm', 'l'];
/// 모음 키에 대응하는 중성 인덱스 (단모음만, 이중모음은 조합으로만 생성)
const VOWEL_JUNG: [u8; 14] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 12, 13, 17, 18, 20];

/// 초성 (0~18)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cho(pub(crate) u8);

/// 중성 (0~20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jung(pub(crate) u8);

/// 종성 (0~26, 받침 없음은 `Option::None`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jong(pub(crate) u8);

impl Cho {
    pub const COUNT: usize = 19;

    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// 호환용 자모 문자
    pub const fn as_char(self) -> char {
        CHO_CHARS[self.0 as usize]
    }

    /// 받침으로 쓸 때의 종성. ㄸ, ㅃ, ㅉ는 `None`
    pub const fn as_jong(self) -> Option<Jong> {
        match CHO_TO_JONG[self.0 as usize] {
            Some(j) => Some(Jong(j)),
            None => None,
        }
    }
}

impl Jung {
    pub const COUNT: usize = 21;

    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        JUNG_CHARS[self.0 as usize]
    }
}

impl Jong {
    pub const COUNT: usize = 27;

    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        JONG_CHARS[self.0 as usize]
    }

    /// 홑받침을 다음 글자의 초성으로 옮길 때 사용. 겹받침은 `None`
    pub fn as_cho(self) -> Option<Cho> {
        CHO_TO_JONG
            .iter()
            .position(|&j| j == Some(self.0))
            .map(|i| Cho(i as u8))
    }
}

/// 키 하나가 나타내는 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Consonant(Cho),
    Vowel(Jung),
}

/// 영문 키 하나를 자모로 변환
/// 두벌식 배치에 없는 문자(숫자, 특수문자, 매핑 없는 대문자 등)는 `None`
pub fn lookup(c: char) -> Option<Key> {
    if let Some(i) = CONSONANT_KEYS.iter().position(|&k| k == c) {
        return Some(Key::Consonant(Cho(i as u8)));
    }
    VOWEL_KEYS
        .iter()
        .position(|&k| k == c)
        .map(|i| Key::Vowel(Jung(VOWEL_JUNG[i])))
}

/// 영문 키가 자음인지 확인
pub fn is_consonant_key(c: char) -> bool {
    matches!(lookup(c), Some(Key::Consonant(_)))
}

/// 영문 키가 모음인지 확인
pub fn is_vowel_key(c: char) -> bool {
    matches!(lookup(c), Some(Key::Vowel(_)))
}
