//! 한글 음절 조합기
//!
//! 자모 토큰 시퀀스를 음절 단위로 묶는 유한 상태 기계.
//! 핵심 규칙은 한 토큰 선독(lookahead)에 의한 종성/다음 초성 판별:
//! 초성+중성 뒤에 온 자음은 **바로 다음 토큰이 모음이 아닐 때만**
//! 현재 음절의 종성이 된다. 다음 토큰이 모음이면 그 자음은 다음 음절의
//! 초성이므로 현재 음절을 종성 없이 확정한다.

use crate::core::keymap::JamoToken;
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jungseong_to_jamo_char,
};

/// 조합 결과 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputUnit {
    /// 완성형 음절
    Syllable(char),
    /// 조합에 끼지 못한 낱자모 (초성 없는 모음, 모음 없는 자음)
    Jamo(char),
    /// 매핑에 없던 문자 그대로
    Literal(char),
}

impl OutputUnit {
    /// 출력 문자
    pub fn as_char(&self) -> char {
        match *self {
            OutputUnit::Syllable(c) | OutputUnit::Jamo(c) | OutputUnit::Literal(c) => c,
        }
    }
}

/// 조합 중인 음절 버퍼
///
/// 불변식: jungseong이 있으면 choseong도 있고, jongseong이 있으면
/// choseong과 jungseong이 모두 있다. 매 flush 후 비워진다.
#[derive(Debug, Default)]
struct SyllableBuffer {
    choseong: Option<u32>,
    jungseong: Option<u32>,
    jongseong: Option<u32>,
}

impl SyllableBuffer {
    /// 버퍼 내용을 출력에 내보내고 비움
    ///
    /// 초성+중성이면 완성형 음절, 초성만 있으면 낱자모, 비어 있으면 없음.
    fn flush_into(&mut self, out: &mut Vec<OutputUnit>) {
        match (self.choseong, self.jungseong) {
            (Some(cho), Some(jung)) => {
                let jong = self.jongseong.unwrap_or(0);
                out.push(OutputUnit::Syllable(compose_syllable(cho, jung, jong)));
            }
            (Some(cho), None) => {
                if let Some(c) = choseong_to_jamo_char(cho) {
                    out.push(OutputUnit::Jamo(c));
                }
            }
            _ => {}
        }
        *self = Self::default();
    }
}

/// 다음 토큰이 모음인지 확인 (선독)
fn is_vowel_at(tokens: &[JamoToken], index: usize) -> bool {
    matches!(tokens.get(index), Some(JamoToken::Vowel { .. }))
}

/// 자모 토큰 시퀀스를 음절 조합
pub fn compose(tokens: &[JamoToken]) -> Vec<OutputUnit> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut buf = SyllableBuffer::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            JamoToken::Literal(c) => {
                // 리터럴은 조합 중인 음절을 끊는다
                buf.flush_into(&mut out);
                out.push(OutputUnit::Literal(c));
            }
            JamoToken::Vowel { jung_index } => {
                if buf.choseong.is_some() && buf.jungseong.is_none() {
                    // 초성 뒤의 모음은 중성으로. 다음 토큰도 모음이고
                    // 둘이 복합 모음을 이루면 함께 소비한다 (ㅗ+ㅏ=ㅘ 등)
                    let mut jung = jung_index;
                    if let Some(&JamoToken::Vowel { jung_index: next }) = tokens.get(i + 1) {
                        if let Some(combined) = combine_jungseong(jung, next) {
                            jung = combined;
                            i += 1;
                        }
                    }
                    buf.jungseong = Some(jung);
                } else {
                    // 초성 없는 모음은 음절을 이루지 못한다:
                    // 조합 중이던 음절을 확정하고 낱자모로 내보냄
                    buf.flush_into(&mut out);
                    if let Some(c) = jungseong_to_jamo_char(jung_index) {
                        out.push(OutputUnit::Jamo(c));
                    }
                }
            }
            JamoToken::Consonant {
                cho_index,
                jong_index,
            } => {
                match (buf.choseong, buf.jungseong, buf.jongseong) {
                    // 빈 버퍼: 새 초성
                    (None, _, _) => {
                        buf.choseong = Some(cho_index);
                    }
                    // 초성만 있음: 중성이 오지 않았으므로 기존 초성은 낱자모
                    (Some(_), None, _) => {
                        buf.flush_into(&mut out);
                        buf.choseong = Some(cho_index);
                    }
                    // 초성+중성: 종성/다음 초성 판별 지점
                    (Some(_), Some(_), None) => {
                        match jong_index {
                            Some(jong) if !is_vowel_at(tokens, i + 1) => {
                                // 다음 토큰이 모음이 아니므로 현재 음절의 종성.
                                // 바로 뒤 자음과 복합 종성을 이루는 경우,
                                // 그 자음이 다음 음절의 초성으로 필요하지 않을
                                // 때만 (그 뒤가 모음이 아닐 때만) 합친다
                                let mut jong = jong;
                                if let Some(&JamoToken::Consonant {
                                    jong_index: Some(next_jong),
                                    ..
                                }) = tokens.get(i + 1)
                                {
                                    if !is_vowel_at(tokens, i + 2) {
                                        if let Some(combined) = combine_jongseong(jong, next_jong) {
                                            jong = combined;
                                            i += 1;
                                        }
                                    }
                                }
                                buf.jongseong = Some(jong);
                            }
                            _ => {
                                // 다음 음절의 초성 (모음이 뒤따르거나 종성 불가 자음):
                                // 현재 음절은 종성 없이 확정
                                buf.flush_into(&mut out);
                                buf.choseong = Some(cho_index);
                            }
                        }
                    }
                    // 초성+중성+종성: 음절 완성, 현재 토큰은 소비하지 않고 재처리
                    (Some(_), Some(_), Some(_)) => {
                        buf.flush_into(&mut out);
                        continue;
                    }
                }
            }
        }
        i += 1;
    }

    // 입력 끝: 남은 상태 확정
    buf.flush_into(&mut out);
    out
}
