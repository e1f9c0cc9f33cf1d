//! 영타 -> 한글 통합 변환기

use crate::core::composer::{compose, OutputUnit};
use crate::core::keymap::map_keystrokes;

/// 영문 문자열을 한글 문자열로 변환
///
/// 입력 전체를 자모 토큰으로 바꾼 뒤 음절로 조합한다.
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문)는 그대로 유지.
/// 순수 함수: 같은 입력은 항상 같은 출력을 낸다.
pub fn convert(input: &str) -> String {
    let tokens = map_keystrokes(input);
    let units = compose(&tokens);

    let mut result = String::with_capacity(input.len());
    for unit in units {
        result.push(unit.as_char());
    }
    result
}
