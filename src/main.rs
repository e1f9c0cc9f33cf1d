//! Dubeol - 두벌식 영타 -> 한글 변환 CLI
//!
//! 표준 입력 전체를 UTF-8 텍스트로 읽어 변환 결과를 표준 출력에 쓴다.
//! 유일한 실패 경로는 UTF-8이 아닌 입력이며, 이때 비정상 종료한다.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use dubeol::convert;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        log::error!("표준 입력 읽기 실패: {}", e);
        eprintln!("입력을 UTF-8 텍스트로 읽을 수 없습니다: {}", e);
        return ExitCode::FAILURE;
    }

    let output = convert(&input);

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()) {
        log::error!("표준 출력 쓰기 실패: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
