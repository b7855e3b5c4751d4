//! 한글 자모 정의 및 분리 규칙
//!
//! 자음은 호환용 자모(U+3131~U+314E) 30개, 모음은 중성 21개입니다.
//! 쌍자음/겹받침은 기호 매핑 전에 기본 자음 두 개로 분리됩니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 자음 (호환용 자모 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    Giyeok,      // ㄱ
    SsangGiyeok, // ㄲ
    GiyeokSiot,  // ㄳ
    Nieun,       // ㄴ
    NieunJieut,  // ㄵ
    NieunHieut,  // ㄶ
    Digeut,      // ㄷ
    SsangDigeut, // ㄸ
    Rieul,       // ㄹ
    RieulGiyeok, // ㄺ
    RieulMieum,  // ㄻ
    RieulBieup,  // ㄼ
    RieulSiot,   // ㄽ
    RieulTieut,  // ㄾ
    RieulPieup,  // ㄿ
    RieulHieut,  // ㅀ
    Mieum,       // ㅁ
    Bieup,       // ㅂ
    SsangBieup,  // ㅃ
    BieupSiot,   // ㅄ
    Siot,        // ㅅ
    SsangSiot,   // ㅆ
    Ieung,       // ㅇ
    Jieut,       // ㅈ
    SsangJieut,  // ㅉ
    Chieut,      // ㅊ
    Kieuk,       // ㅋ
    Tieut,       // ㅌ
    Pieup,       // ㅍ
    Hieut,       // ㅎ
}

/// 기본 자음 14개 (기호 테이블 순서)
pub const BASE_CONSONANTS: [Consonant; 14] = [
    Consonant::Giyeok,
    Consonant::Nieun,
    Consonant::Digeut,
    Consonant::Rieul,
    Consonant::Mieum,
    Consonant::Bieup,
    Consonant::Siot,
    Consonant::Ieung,
    Consonant::Jieut,
    Consonant::Chieut,
    Consonant::Kieuk,
    Consonant::Tieut,
    Consonant::Pieup,
    Consonant::Hieut,
];

impl Consonant {
    /// 호환용 자모 순서의 전체 자음 (30개)
    pub const ALL: [Consonant; 30] = [
        Consonant::Giyeok,
        Consonant::SsangGiyeok,
        Consonant::GiyeokSiot,
        Consonant::Nieun,
        Consonant::NieunJieut,
        Consonant::NieunHieut,
        Consonant::Digeut,
        Consonant::SsangDigeut,
        Consonant::Rieul,
        Consonant::RieulGiyeok,
        Consonant::RieulMieum,
        Consonant::RieulBieup,
        Consonant::RieulSiot,
        Consonant::RieulTieut,
        Consonant::RieulPieup,
        Consonant::RieulHieut,
        Consonant::Mieum,
        Consonant::Bieup,
        Consonant::SsangBieup,
        Consonant::BieupSiot,
        Consonant::Siot,
        Consonant::SsangSiot,
        Consonant::Ieung,
        Consonant::Jieut,
        Consonant::SsangJieut,
        Consonant::Chieut,
        Consonant::Kieuk,
        Consonant::Tieut,
        Consonant::Pieup,
        Consonant::Hieut,
    ];

    /// 호환용 자모 문자
    pub fn as_char(self) -> char {
        // ALL이 U+3131부터 빈틈없이 이어지는 순서
        COMPAT_CONSONANTS[self as usize]
    }

    /// 기호 테이블 인덱스 (기본 자음 14개만 Some)
    pub fn base_index(self) -> Option<usize> {
        BASE_CONSONANTS.iter().position(|&c| c == self)
    }

    /// 기본 자음인지 확인
    pub fn is_base(self) -> bool {
        self.base_index().is_some()
    }

    /// 쌍자음 분리 (초성용): ㄲ → ㄱ,ㄱ 등 5개
    pub fn double_split(self) -> Option<(Consonant, Consonant)> {
        use Consonant::*;
        match self {
            SsangGiyeok => Some((Giyeok, Giyeok)),
            SsangDigeut => Some((Digeut, Digeut)),
            SsangBieup => Some((Bieup, Bieup)),
            SsangSiot => Some((Siot, Siot)),
            SsangJieut => Some((Jieut, Jieut)),
            _ => None,
        }
    }

    /// 겹받침 분리 (종성용): ㄳ → ㄱ,ㅅ 등 11개
    /// 종성 ㄲ/ㅆ은 여기 포함되지 않음 (종성 변환기에서 별도 처리)
    pub fn cluster_split(self) -> Option<(Consonant, Consonant)> {
        use Consonant::*;
        match self {
            GiyeokSiot => Some((Giyeok, Siot)),   // ㄳ
            NieunJieut => Some((Nieun, Jieut)),   // ㄵ
            NieunHieut => Some((Nieun, Hieut)),   // ㄶ
            RieulGiyeok => Some((Rieul, Giyeok)), // ㄺ
            RieulMieum => Some((Rieul, Mieum)),   // ㄻ
            RieulBieup => Some((Rieul, Bieup)),   // ㄼ
            RieulSiot => Some((Rieul, Siot)),     // ㄽ
            RieulTieut => Some((Rieul, Tieut)),   // ㄾ
            RieulPieup => Some((Rieul, Pieup)),   // ㄿ
            RieulHieut => Some((Rieul, Hieut)),   // ㅀ
            BieupSiot => Some((Bieup, Siot)),     // ㅄ
            _ => None,
        }
    }
}

#[rustfmt::skip]
const COMPAT_CONSONANTS: [char; 30] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㄺ',
    'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅄ',
    'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 모음 (중성 인덱스 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,   // ㅏ(0)
    Ae,  // ㅐ(1)
    Ya,  // ㅑ(2)
    Yae, // ㅒ(3)
    Eo,  // ㅓ(4)
    E,   // ㅔ(5)
    Yeo, // ㅕ(6)
    Ye,  // ㅖ(7)
    O,   // ㅗ(8)
    Wa,  // ㅘ(9)
    Wae, // ㅙ(10)
    Oe,  // ㅚ(11)
    Yo,  // ㅛ(12)
    U,   // ㅜ(13)
    Wo,  // ㅝ(14)
    We,  // ㅞ(15)
    Wi,  // ㅟ(16)
    Yu,  // ㅠ(17)
    Eu,  // ㅡ(18)
    Ui,  // ㅢ(19)
    I,   // ㅣ(20)
}

#[rustfmt::skip]
const COMPAT_VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ',
    'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

impl Vowel {
    /// 중성 인덱스 순서의 전체 모음 (21개)
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> usize {
        self as usize
    }

    /// 호환용 자모 문자
    pub fn as_char(self) -> char {
        COMPAT_VOWELS[self.index()]
    }
}

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    Consonant(Consonant),
    Vowel(Vowel),
}

/// 호환용 자모 문자 → 자모 역색인
static JAMO_BY_CHAR: LazyLock<HashMap<char, Jamo>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(COMPAT_CONSONANTS.len() + COMPAT_VOWELS.len());
    for c in Consonant::ALL {
        map.insert(c.as_char(), Jamo::Consonant(c));
    }
    for v in Vowel::ALL {
        map.insert(v.as_char(), Jamo::Vowel(v));
    }
    map
});

impl Jamo {
    /// 호환용 자모 문자를 자모로 변환
    /// 자모가 아닌 문자(완성형 음절, 조합형 자모 포함)는 None 반환
    pub fn from_char(c: char) -> Option<Jamo> {
        JAMO_BY_CHAR.get(&c).copied()
    }

    pub fn as_char(&self) -> char {
        match self {
            Jamo::Consonant(c) => c.as_char(),
            Jamo::Vowel(v) => v.as_char(),
        }
    }

    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant(_))
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel(_))
    }
}
