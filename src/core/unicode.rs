//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (호환용 자모, 배열 인덱스 = 조합 인덱스)
#[rustfmt::skip]
pub const CHOSEONG_CHARS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (호환용 자모, 배열 인덱스 = 조합 인덱스)
#[rustfmt::skip]
pub const JUNGSEONG_CHARS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (호환용 자모, 배열 인덱스 = 조합 인덱스, 0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG_CHARS: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'),
    Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'),
    Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'), Some('ㅈ'), Some('ㅊ'),
    Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
///
/// Composer가 항상 유효한 인덱스를 전달하므로, 범위 밖 인덱스는
/// 프로그래밍 오류로 보고 즉시 panic한다.
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> char {
    assert!(choseong < CHOSEONG_COUNT, "초성 인덱스 범위 초과: {choseong}");
    assert!(jungseong < JUNGSEONG_COUNT, "중성 인덱스 범위 초과: {jungseong}");
    assert!(jongseong < JONGSEONG_COUNT, "종성 인덱스 범위 초과: {jongseong}");

    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    // 범위 검증을 통과한 인덱스는 항상 완성형 영역(U+AC00..=U+D7A3) 안이다
    char::from_u32(code).unwrap()
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + 11171).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자모 문자의 초성 인덱스 (초성 테이블에 없으면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_CHARS.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 자모 문자의 중성 인덱스 (중성 테이블에 없으면 None)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_CHARS.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 자모 문자의 종성 인덱스 (종성 불가 자음이면 None)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_CHARS
        .iter()
        .position(|&x| x == Some(c))
        .map(|i| i as u32)
}

/// 초성만 있을 때 해당 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_CHARS.get(cho as usize).copied()
}

/// 중성만 있을 때 해당 모음 문자 반환 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_CHARS.get(jung as usize).copied()
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}
