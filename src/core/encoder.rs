//! 한글 → 기호 변환기

use serde::{Deserialize, Serialize};

use crate::core::symbols::SymbolTable;
use crate::core::unicode::Syllable;

/// 변환 옵션
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOptions {
    /// 글자마다 구분자 추가 여부
    #[serde(default)]
    pub use_separator: bool,
    /// 구분자 문자
    #[serde(default = "default_separator")]
    pub separator: char,
}

pub(crate) fn default_separator() -> char {
    '|'
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            use_separator: false,
            separator: default_separator(),
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 구분자를 지정하고 활성화
    pub fn with_separator(mut self, separator: char) -> Self {
        self.use_separator = true;
        self.separator = separator;
        self
    }
}

/// 문자열을 기호 문자열로 변환
///
/// 완성형 한글 음절은 초성, 중성, 종성 순서의 기호로 바뀌고
/// 그 외 문자(숫자, 공백, 영문, 낱자모 등)는 그대로 유지됩니다.
/// 구분자가 켜져 있으면 처리한 모든 글자 뒤에 구분자를 붙입니다.
pub fn encode(text: &str, options: &EncodeOptions) -> String {
    let symbols = SymbolTable::builtin();
    let mut out = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match Syllable::decode(c) {
            Some(syllable) => {
                symbols.push_consonant(syllable.choseong, &mut out);
                out.push(symbols.vowel(syllable.jungseong));
                symbols.push_trailing(syllable.jongseong, &mut out);
            }
            None => out.push(c),
        }

        if options.use_separator {
            out.push(options.separator);
        }
    }

    out
}

/// 기본 옵션(구분자 없음)으로 변환
pub fn encode_default(text: &str) -> String {
    encode(text, &EncodeOptions::default())
}
