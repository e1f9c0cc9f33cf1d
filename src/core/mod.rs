//! 영타 -> 한글 변환 핵심 모듈
//!
//! 파이프라인: keymap (키 -> 자모 토큰) -> composer (토큰 -> 음절)
//! -> unicode (음절 인코딩)

pub mod composer;
pub mod converter;
pub mod keymap;
pub mod unicode;
