//! 자모 → 기호 매핑
//!
//! 기본 자음 14개와 모음 21개에 각각 하나의 기호가 대응됩니다.
//! 쌍자음/겹받침은 기본 자음 두 개의 기호를 이어 붙여 표현합니다.

use crate::core::jamo::{Consonant, Jamo, Vowel, BASE_CONSONANTS};

/// 기본 자음 기호 (ㄱ ㄴ ㄷ ㄹ ㅁ ㅂ ㅅ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ 순서)
#[rustfmt::skip]
const CONSONANT_SYMBOLS: [char; 14] = [
    '•', '‥', '⁚', '…', '‹', '›', '«', '»', '*', '¦', '⊕', '⊛', '⊗', '⊖',
];

/// 모음 기호 (중성 인덱스 순서)
#[rustfmt::skip]
const VOWEL_SYMBOLS: [char; 21] = [
    '◀', '▶', '◁', '▷', '▲', '△', '▽', '▼', '◉', '◎', '◓',
    '◒', '◤', '◥', '◢', '◬', '◩', '◪', '■', '□', '◣',
];

/// 기호 테이블
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    consonants: [char; 14],
    vowels: [char; 21],
}

/// 내장 기호 테이블
pub static BUILTIN: SymbolTable = SymbolTable {
    consonants: CONSONANT_SYMBOLS,
    vowels: VOWEL_SYMBOLS,
};

impl SymbolTable {
    pub fn builtin() -> &'static SymbolTable {
        &BUILTIN
    }

    /// 기본 자음 기호 (기본 자음이 아니면 None)
    pub fn consonant(&self, c: Consonant) -> Option<char> {
        c.base_index().map(|i| self.consonants[i])
    }

    /// 모음 기호
    pub fn vowel(&self, v: Vowel) -> char {
        self.vowels[v.index()]
    }

    /// (기본 자음, 기호) 쌍 14개
    pub fn consonant_entries(&self) -> impl Iterator<Item = (Consonant, char)> + '_ {
        BASE_CONSONANTS.iter().copied().zip(self.consonants.iter().copied())
    }

    /// (모음, 기호) 쌍 21개
    pub fn vowel_entries(&self) -> impl Iterator<Item = (Vowel, char)> + '_ {
        Vowel::ALL.iter().copied().zip(self.vowels.iter().copied())
    }

    /// 자음을 기호로 변환하여 `out`에 추가
    ///
    /// 쌍자음은 기본 자음 두 개의 기호로 분리하고, 테이블에 없는 자음은
    /// 자모 그대로 내보냅니다.
    pub fn push_consonant(&self, c: Consonant, out: &mut String) {
        if let Some((first, second)) = c.double_split() {
            self.push_base(first, out);
            self.push_base(second, out);
            return;
        }
        self.push_base(c, out);
    }

    fn push_base(&self, c: Consonant, out: &mut String) {
        match self.consonant(c) {
            Some(symbol) => out.push(symbol),
            None => {
                log::warn!("기호 테이블에 없는 자음: {}", c.as_char());
                out.push(c.as_char());
            }
        }
    }

    /// 종성을 기호로 변환하여 `out`에 추가 (None이면 아무것도 추가하지 않음)
    pub fn push_trailing(&self, jong: Option<Consonant>, out: &mut String) {
        let Some(jong) = jong else {
            return;
        };

        match jong {
            // 종성 ㄲ/ㅆ은 겹받침 테이블과 별개 분기
            Consonant::SsangGiyeok => {
                self.push_consonant(Consonant::Giyeok, out);
                self.push_consonant(Consonant::Giyeok, out);
            }
            Consonant::SsangSiot => {
                self.push_consonant(Consonant::Siot, out);
                self.push_consonant(Consonant::Siot, out);
            }
            _ => match jong.cluster_split() {
                Some((first, second)) => {
                    self.push_consonant(first, out);
                    self.push_consonant(second, out);
                }
                None => self.push_consonant(jong, out),
            },
        }
    }

    /// 초성 자음의 기호 문자열
    pub fn consonant_symbols(&self, c: Consonant) -> String {
        let mut out = String::with_capacity(8);
        self.push_consonant(c, &mut out);
        out
    }

    /// 종성의 기호 문자열
    pub fn trailing_symbols(&self, jong: Option<Consonant>) -> String {
        let mut out = String::with_capacity(8);
        self.push_trailing(jong, &mut out);
        out
    }

    /// 호환용 자모 문자 하나를 기호로 변환
    /// 자음은 초성 규칙을 따르고, 자모가 아닌 문자는 그대로 반환
    pub fn symbolize_jamo(&self, c: char) -> String {
        match Jamo::from_char(c) {
            Some(Jamo::Consonant(consonant)) => self.consonant_symbols(consonant),
            Some(Jamo::Vowel(vowel)) => self.vowel(vowel).to_string(),
            None => c.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::{CHOSEONG, JONGSEONG};

    fn table() -> &'static SymbolTable {
        SymbolTable::builtin()
    }

    #[test]
    fn test_base_consonant_symbols() {
        assert_eq!(table().consonant(Consonant::Giyeok), Some('•'));
        assert_eq!(table().consonant(Consonant::Siot), Some('«'));
        assert_eq!(table().consonant(Consonant::Hieut), Some('⊖'));
        assert_eq!(table().consonant(Consonant::SsangSiot), None);
    }

    #[test]
    fn test_vowel_symbols() {
        assert_eq!(table().vowel(Vowel::A), '◀');
        assert_eq!(table().vowel(Vowel::Eu), '■');
        assert_eq!(table().vowel(Vowel::I), '◣');
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut all: Vec<char> = CONSONANT_SYMBOLS.iter().chain(VOWEL_SYMBOLS.iter()).copied().collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 14 + 21);
    }

    #[test]
    fn test_double_consonant_splits() {
        assert_eq!(table().consonant_symbols(Consonant::SsangGiyeok), "••");
        assert_eq!(table().consonant_symbols(Consonant::SsangDigeut), "⁚⁚");
        assert_eq!(table().consonant_symbols(Consonant::SsangBieup), "››");
        assert_eq!(table().consonant_symbols(Consonant::SsangSiot), "««");
        assert_eq!(table().consonant_symbols(Consonant::SsangJieut), "**");
    }

    #[test]
    fn test_consonant_fallback() {
        // 겹받침은 초성 경로에서 매핑되지 않으므로 자모 그대로
        assert_eq!(table().consonant_symbols(Consonant::RieulGiyeok), "ㄺ");
    }

    #[test]
    fn test_every_choseong() {
        for cho in CHOSEONG {
            let symbols = table().consonant_symbols(cho);
            let expected = if cho.double_split().is_some() { 2 } else { 1 };
            assert_eq!(symbols.chars().count(), expected, "{:?}", cho);
            assert!(symbols.chars().all(|s| CONSONANT_SYMBOLS.contains(&s)));
        }
    }

    #[test]
    fn test_trailing_absent() {
        assert_eq!(table().trailing_symbols(None), "");
    }

    #[test]
    fn test_trailing_doubled() {
        assert_eq!(table().trailing_symbols(Some(Consonant::SsangGiyeok)), "••");
        assert_eq!(table().trailing_symbols(Some(Consonant::SsangSiot)), "««");
    }

    #[test]
    fn test_trailing_clusters() {
        assert_eq!(table().trailing_symbols(Some(Consonant::GiyeokSiot)), "•«");
        assert_eq!(table().trailing_symbols(Some(Consonant::NieunHieut)), "‥⊖");
        assert_eq!(table().trailing_symbols(Some(Consonant::RieulGiyeok)), "…•");
        assert_eq!(table().trailing_symbols(Some(Consonant::BieupSiot)), "›«");
    }

    #[test]
    fn test_every_jongseong() {
        let mut single = 0;
        let mut double = 0;
        for jong in JONGSEONG.iter().copied().flatten() {
            match table().trailing_symbols(Some(jong)).chars().count() {
                1 => single += 1,
                2 => double += 1,
                n => panic!("{:?} -> {} symbols", jong, n),
            }
        }
        assert_eq!(single, 14);
        assert_eq!(double, 13);
    }

    #[test]
    fn test_symbolize_jamo() {
        assert_eq!(table().symbolize_jamo('ㄱ'), "•");
        assert_eq!(table().symbolize_jamo('ㄲ'), "••");
        assert_eq!(table().symbolize_jamo('ㅏ'), "◀");
        assert_eq!(table().symbolize_jamo('ㄳ'), "ㄳ");
        assert_eq!(table().symbolize_jamo('x'), "x");
    }
}
