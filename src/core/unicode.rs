//! 유니코드 한글 음절 분해 유틸리티

use crate::core::jamo::{Consonant, Vowel};

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서 (19개)
#[rustfmt::skip]
pub const CHOSEONG: [Consonant; 19] = [
    Consonant::Giyeok,      // ㄱ(0)
    Consonant::SsangGiyeok, // ㄲ(1)
    Consonant::Nieun,       // ㄴ(2)
    Consonant::Digeut,      // ㄷ(3)
    Consonant::SsangDigeut, // ㄸ(4)
    Consonant::Rieul,       // ㄹ(5)
    Consonant::Mieum,       // ㅁ(6)
    Consonant::Bieup,       // ㅂ(7)
    Consonant::SsangBieup,  // ㅃ(8)
    Consonant::Siot,        // ㅅ(9)
    Consonant::SsangSiot,   // ㅆ(10)
    Consonant::Ieung,       // ㅇ(11)
    Consonant::Jieut,       // ㅈ(12)
    Consonant::SsangJieut,  // ㅉ(13)
    Consonant::Chieut,      // ㅊ(14)
    Consonant::Kieuk,       // ㅋ(15)
    Consonant::Tieut,       // ㅌ(16)
    Consonant::Pieup,       // ㅍ(17)
    Consonant::Hieut,       // ㅎ(18)
];

/// 종성 인덱스 순서 (28개, 0 = 없음)
#[rustfmt::skip]
pub const JONGSEONG: [Option<Consonant>; 28] = [
    None,                          // 없음(0)
    Some(Consonant::Giyeok),       // ㄱ(1)
    Some(Consonant::SsangGiyeok),  // ㄲ(2)
    Some(Consonant::GiyeokSiot),   // ㄳ(3)
    Some(Consonant::Nieun),        // ㄴ(4)
    Some(Consonant::NieunJieut),   // ㄵ(5)
    Some(Consonant::NieunHieut),   // ㄶ(6)
    Some(Consonant::Digeut),       // ㄷ(7)
    Some(Consonant::Rieul),        // ㄹ(8)
    Some(Consonant::RieulGiyeok),  // ㄺ(9)
    Some(Consonant::RieulMieum),   // ㄻ(10)
    Some(Consonant::RieulBieup),   // ㄼ(11)
    Some(Consonant::RieulSiot),    // ㄽ(12)
    Some(Consonant::RieulTieut),   // ㄾ(13)
    Some(Consonant::RieulPieup),   // ㄿ(14)
    Some(Consonant::RieulHieut),   // ㅀ(15)
    Some(Consonant::Mieum),        // ㅁ(16)
    Some(Consonant::Bieup),        // ㅂ(17)
    Some(Consonant::BieupSiot),    // ㅄ(18)
    Some(Consonant::Siot),         // ㅅ(19)
    Some(Consonant::SsangSiot),    // ㅆ(20)
    Some(Consonant::Ieung),        // ㅇ(21)
    Some(Consonant::Jieut),        // ㅈ(22)
    Some(Consonant::Chieut),       // ㅊ(23)
    Some(Consonant::Kieuk),        // ㅋ(24)
    Some(Consonant::Tieut),        // ㅌ(25)
    Some(Consonant::Pieup),        // ㅍ(26)
    Some(Consonant::Hieut),        // ㅎ(27)
];

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 분해된 한글 음절 (초성, 중성, 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub choseong: Consonant,
    pub jungseong: Vowel,
    /// None이면 종성 없음
    pub jongseong: Option<Consonant>,
}

impl Syllable {
    /// 완성형 한글 한 글자를 자모로 분해
    /// 한글 음절이 아니면 None
    pub fn decode(c: char) -> Option<Self> {
        let (cho, jung, jong) = decompose_syllable(c)?;
        Some(Self {
            choseong: CHOSEONG[cho as usize],
            jungseong: Vowel::ALL[jung as usize],
            jongseong: JONGSEONG[jong as usize],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㄱ')); // 호환용 자모
        assert!(!is_hangul_syllable('\u{1100}')); // 조합형 초성
        assert!(!is_hangul_syllable('\u{D7A4}'));
        assert!(!is_hangul_syllable('a'));
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('1'), None);
    }

    #[test]
    fn test_decode_syllable() {
        let s = Syllable::decode('닭').unwrap();
        assert_eq!(s.choseong, Consonant::Digeut);
        assert_eq!(s.jungseong, Vowel::A);
        assert_eq!(s.jongseong, Some(Consonant::RieulGiyeok));

        let s = Syllable::decode('까').unwrap();
        assert_eq!(s.choseong, Consonant::SsangGiyeok);
        assert_eq!(s.jongseong, None);

        assert!(Syllable::decode('!').is_none());
    }

    #[test]
    fn test_tables_match_compat_jamo_order() {
        let cho: String = CHOSEONG.iter().map(|c| c.as_char()).collect();
        assert_eq!(cho, "ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ");

        let jong: String = JONGSEONG.iter().flatten().map(|c| c.as_char()).collect();
        assert_eq!(jong, "ㄱㄲㄳㄴㄵㄶㄷㄹㄺㄻㄼㄽㄾㄿㅀㅁㅂㅄㅅㅆㅇㅈㅊㅋㅌㅍㅎ");
    }

    #[test]
    fn test_every_syllable_decodes() {
        for cp in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let c = char::from_u32(cp).unwrap();
            assert!(Syllable::decode(c).is_some(), "U+{:04X}", cp);
        }
    }
}
