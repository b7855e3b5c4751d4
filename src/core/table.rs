//! 자모-기호 대응표
//!
//! 기호 테이블에서 매번 다시 계산되는 읽기 전용 보기입니다.

use serde::Serialize;

use crate::core::symbols::SymbolTable;

/// 대응표 한 줄
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingRow {
    pub jamo: char,
    pub symbol: char,
}

/// 자음 14줄, 모음 21줄
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MappingTable {
    pub consonants: Vec<MappingRow>,
    pub vowels: Vec<MappingRow>,
}

/// 내장 기호 테이블의 대응표 생성
pub fn mapping_table() -> MappingTable {
    let symbols = SymbolTable::builtin();
    MappingTable {
        consonants: symbols
            .consonant_entries()
            .map(|(c, symbol)| MappingRow {
                jamo: c.as_char(),
                symbol,
            })
            .collect(),
        vowels: symbols
            .vowel_entries()
            .map(|(v, symbol)| MappingRow {
                jamo: v.as_char(),
                symbol,
            })
            .collect(),
    }
}

impl MappingTable {
    /// 탭으로 구분된 텍스트 (자음 다음 모음)
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.consonants.iter().chain(&self.vowels) {
            out.push(row.jamo);
            out.push('\t');
            out.push(row.symbol);
            out.push('\n');
        }
        out
    }
}
