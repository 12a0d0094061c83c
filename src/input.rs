//! 붙여넣은 텍스트 전처리
//!
//! 스프레드시트나 문서에서 복사한 텍스트를 줄 단위 항목으로 나누고,
//! 각 항목을 정리한 뒤 한글로 변환합니다.

use crate::config::InputConfig;
use crate::core::transliterate;

/// 항목 하나 정리: 따옴표/공백 문자 치환, 앞뒤 공백 제거
pub fn clean_text(text: &str, config: &InputConfig) -> String {
    let cleaned: String = if config.normalize_quotes {
        text.chars()
            .map(|c| match c {
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{00A0}' => ' ',
                other => other,
            })
            .collect()
    } else {
        text.to_owned()
    };

    if config.trim {
        cleaned.trim().to_owned()
    } else {
        cleaned
    }
}

/// 줄 단위로 나누어 정리 (`\n`, `\r\n` 모두 허용)
pub fn split_entries(text: &str, config: &InputConfig) -> Vec<String> {
    text.lines()
        .map(|line| clean_text(line, config))
        .filter(|entry| !(config.skip_blank && entry.trim().is_empty()))
        .collect()
}

/// 항목별 한글 변환
pub fn transliterate_entries(text: &str, config: &InputConfig) -> Vec<String> {
    let entries = split_entries(text, config);
    log::debug!("{}개 항목 변환", entries.len());
    entries.iter().map(|entry| transliterate(entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let config = InputConfig::default();
        assert_eq!(clean_text("  \u{201C}rk\u{201D}\u{00A0}", &config), "\"rk\"");
        assert_eq!(clean_text("\u{2018}sk\u{2019}", &config), "'sk'");
    }

    #[test]
    fn test_clean_text_disabled() {
        let config = InputConfig {
            normalize_quotes: false,
            trim: false,
            skip_blank: true,
        };
        assert_eq!(clean_text(" \u{201C}rk ", &config), " \u{201C}rk ");
    }

    #[test]
    fn test_split_entries() {
        let config = InputConfig::default();
        let entries = split_entries("gksrmf\r\n\r\n  dkssud \n\u{00A0}\nrk", &config);
        assert_eq!(entries, vec!["gksrmf", "dkssud", "rk"]);
    }

    #[test]
    fn test_split_entries_keeps_blank_lines() {
        let config = InputConfig {
            skip_blank: false,
            ..InputConfig::default()
        };
        assert_eq!(split_entries("rk\n\nsk", &config), vec!["rk", "", "sk"]);
    }

    #[test]
    fn test_transliterate_entries() {
        let config = InputConfig::default();
        assert_eq!(
            transliterate_entries("gksrmf\ndkssudgktpdy\n123", &config),
            vec!["한글", "안녕하세요", "123"]
        );
    }
}
