//! dubeol - 두벌식 영문 키 입력을 한글로 변환하는 명령행 도구

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dubeol::config::{load_config, load_config_from, DubeolConfig};
use dubeol::input::split_entries;
use dubeol::{transliterate, Report};

/// 두벌식 영문 키 입력 -> 한글 변환
#[derive(Parser, Debug)]
#[command(name = "dubeol")]
#[command(version)]
#[command(about = "Convert two-set Korean keystrokes typed in Latin layout into Hangul", long_about = None)]
struct Args {
    /// 변환할 문자열 (없으면 표준 입력을 줄 단위로 변환)
    text: Vec<String>,

    /// JSON 설정 파일
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// 줄마다 변환 요약을 표준 에러로 출력 (JSON)
    #[arg(long)]
    stats: bool,

    /// 낱자모가 남은 결과가 있으면 종료 코드 1
    #[arg(long)]
    strict: bool,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("설정 파일 로드 실패: {}", path.display()))?,
        None => load_config(),
    };
    let strict = args.strict || config.strict;

    let entries = if args.text.is_empty() {
        read_stdin_entries(&config)?
    } else {
        args.text
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut incomplete = 0usize;

    for entry in &entries {
        let hangul = transliterate(entry);
        let report = Report::of(&hangul);
        if report.jamo > 0 {
            log::debug!("낱자모 포함: {:?} -> {:?}", entry, hangul);
            incomplete += 1;
        }
        if args.stats {
            eprintln!("{}", serde_json::to_string(&report)?);
        }
        writeln!(out, "{}", hangul)?;
    }
    out.flush()?;

    if strict && incomplete > 0 {
        log::warn!("{}/{}개 항목이 완성형 한글로 조합되지 않음", incomplete, entries.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_stdin_entries(config: &DubeolConfig) -> anyhow::Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("표준 입력 읽기 실패")?;
    Ok(split_entries(&buffer, &config.input))
}
