//! 두벌식 자판 영문 키 -> 한글 자모 토큰 매핑

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{choseong_index, jongseong_index, jungseong_index};

/// 자모 토큰
///
/// 자음은 초성/종성 양쪽 후보 인덱스를 함께 담는다.
/// 실제로 초성인지 종성인지는 앞뒤 문맥을 아는 Composer가 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoToken {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
    /// 매핑에 없는 문자 (공백, 문장부호, 숫자 등) — 그대로 통과
    Literal(char),
}

impl JamoToken {
    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, JamoToken::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, JamoToken::Vowel { .. })
    }
}

lazy_static! {
    /// 두벌식 자판: 영문 키 시퀀스 -> 자모
    ///
    /// 키는 1글자 또는 2글자. 2글자 키는 복합 초성을 한 번에 입력하는
    /// 자판 변형용으로 예약되어 있으며 기본 두벌식에는 없다.
    /// 복합 모음/복합 종성은 자판이 아니라 Composer의 조합 규칙으로 만들어진다.
    static ref KEYSTROKE_MAP: HashMap<&'static str, char> = {
        let mut m = HashMap::new();
        // 자음
        m.insert("r", 'ㄱ');
        m.insert("R", 'ㄲ');
        m.insert("s", 'ㄴ');
        m.insert("e", 'ㄷ');
        m.insert("E", 'ㄸ');
        m.insert("f", 'ㄹ');
        m.insert("a", 'ㅁ');
        m.insert("q", 'ㅂ');
        m.insert("Q", 'ㅃ');
        m.insert("t", 'ㅅ');
        m.insert("T", 'ㅆ');
        m.insert("d", 'ㅇ');
        m.insert("w", 'ㅈ');
        m.insert("W", 'ㅉ');
        m.insert("c", 'ㅊ');
        m.insert("z", 'ㅋ');
        m.insert("x", 'ㅌ');
        m.insert("v", 'ㅍ');
        m.insert("g", 'ㅎ');
        // 모음
        m.insert("k", 'ㅏ');
        m.insert("o", 'ㅐ');
        m.insert("i", 'ㅑ');
        m.insert("O", 'ㅒ');
        m.insert("j", 'ㅓ');
        m.insert("p", 'ㅔ');
        m.insert("u", 'ㅕ');
        m.insert("P", 'ㅖ');
        m.insert("h", 'ㅗ');
        m.insert("y", 'ㅛ');
        m.insert("n", 'ㅜ');
        m.insert("b", 'ㅠ');
        m.insert("m", 'ㅡ');
        m.insert("l", 'ㅣ');
        m
    };
}

/// 자판에서 가장 긴 키 길이
const MAX_KEY_LEN: usize = 2;

/// 영문 문자열을 자모 토큰 시퀀스로 변환
///
/// 각 위치에서 긴 키(2글자)를 먼저 시도하고, 없으면 1글자 키를 본다.
/// 어느 쪽에도 없는 문자는 `Literal`로 그대로 내보낸다. 오류 없음.
pub fn map_keystrokes(text: &str) -> Vec<JamoToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        for len in (1..=MAX_KEY_LEN.min(chars.len() - i)).rev() {
            let key: String = chars[i..i + len].iter().collect();
            if let Some(&jamo) = KEYSTROKE_MAP.get(key.as_str()) {
                tokens.push(classify(jamo));
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            tokens.push(JamoToken::Literal(chars[i]));
            i += 1;
        }
    }

    tokens
}

/// 자모 문자를 토큰으로 분류
///
/// 중성 테이블에 있으면 모음, 초성 테이블에 있으면 자음
/// (종성 인덱스는 종성 테이블에 있을 때만 채워진다).
fn classify(jamo: char) -> JamoToken {
    if let Some(jung_index) = jungseong_index(jamo) {
        return JamoToken::Vowel { jung_index };
    }
    if let Some(cho_index) = choseong_index(jamo) {
        return JamoToken::Consonant {
            cho_index,
            jong_index: jongseong_index(jamo),
        };
    }
    // 자판 테이블의 모든 자모는 초성 또는 중성 테이블에 있다
    JamoToken::Literal(jamo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_mapping() {
        // 기본 자음
        assert_eq!(
            map_keystrokes("r"),
            vec![JamoToken::Consonant {
                cho_index: 0,
                jong_index: Some(1)
            }]
        );
        assert_eq!(
            map_keystrokes("s"),
            vec![JamoToken::Consonant {
                cho_index: 2,
                jong_index: Some(4)
            }]
        );
        assert_eq!(
            map_keystrokes("g"),
            vec![JamoToken::Consonant {
                cho_index: 18,
                jong_index: Some(27)
            }]
        );

        // 쌍자음
        assert_eq!(
            map_keystrokes("R"),
            vec![JamoToken::Consonant {
                cho_index: 1,
                jong_index: Some(2)
            }]
        );
        assert_eq!(
            map_keystrokes("T"),
            vec![JamoToken::Consonant {
                cho_index: 10,
                jong_index: Some(20)
            }]
        );

        // 종성 불가 쌍자음 (ㄸ, ㅃ, ㅉ)
        assert_eq!(
            map_keystrokes("E"),
            vec![JamoToken::Consonant {
                cho_index: 4,
                jong_index: None
            }]
        );
        assert_eq!(
            map_keystrokes("Q"),
            vec![JamoToken::Consonant {
                cho_index: 8,
                jong_index: None
            }]
        );
        assert_eq!(
            map_keystrokes("W"),
            vec![JamoToken::Consonant {
                cho_index: 13,
                jong_index: None
            }]
        );
    }

    #[test]
    fn test_vowel_mapping() {
        assert_eq!(map_keystrokes("k"), vec![JamoToken::Vowel { jung_index: 0 }]); // ㅏ
        assert_eq!(map_keystrokes("h"), vec![JamoToken::Vowel { jung_index: 8 }]); // ㅗ
        assert_eq!(
            map_keystrokes("l"),
            vec![JamoToken::Vowel { jung_index: 20 }]
        ); // ㅣ

        // 쉬프트 모음
        assert_eq!(map_keystrokes("O"), vec![JamoToken::Vowel { jung_index: 3 }]); // ㅒ
        assert_eq!(map_keystrokes("P"), vec![JamoToken::Vowel { jung_index: 7 }]); // ㅖ
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(map_keystrokes("1"), vec![JamoToken::Literal('1')]);
        assert_eq!(map_keystrokes("!"), vec![JamoToken::Literal('!')]);
        assert_eq!(map_keystrokes(" "), vec![JamoToken::Literal(' ')]);
        assert_eq!(map_keystrokes("X"), vec![JamoToken::Literal('X')]); // 대문자 X는 매핑 없음

        // 이미 한글인 문자도 그대로 통과
        assert_eq!(map_keystrokes("가"), vec![JamoToken::Literal('가')]);
    }

    #[test]
    fn test_sequence_mapping() {
        // rk -> ㄱ + ㅏ
        assert_eq!(
            map_keystrokes("rk"),
            vec![
                JamoToken::Consonant {
                    cho_index: 0,
                    jong_index: Some(1)
                },
                JamoToken::Vowel { jung_index: 0 },
            ]
        );

        // 매핑 문자와 리터럴 혼합
        assert_eq!(
            map_keystrokes("r1k"),
            vec![
                JamoToken::Consonant {
                    cho_index: 0,
                    jong_index: Some(1)
                },
                JamoToken::Literal('1'),
                JamoToken::Vowel { jung_index: 0 },
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        let tokens = map_keystrokes("rk!");
        assert!(tokens[0].is_consonant());
        assert!(!tokens[0].is_vowel());
        assert!(tokens[1].is_vowel());
        assert!(!tokens[1].is_consonant());
        assert!(!tokens[2].is_consonant());
        assert!(!tokens[2].is_vowel());
    }

    #[test]
    fn test_empty_input() {
        assert!(map_keystrokes("").is_empty());
    }
}
