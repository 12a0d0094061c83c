//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 처리 오류
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 파일 파싱 오류: {0}")]
    Parse(serde_json::Error),

    #[error("설정 직렬화 오류: {0}")]
    Serialize(serde_json::Error),
}

/// 붙여넣은 텍스트 전처리 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    /// 둥근 따옴표와 줄바꿈 없는 공백(U+00A0)을 ASCII로 치환
    #[serde(default = "default_true")]
    pub normalize_quotes: bool,
    /// 각 항목의 앞뒤 공백 제거
    #[serde(default = "default_true")]
    pub trim: bool,
    /// 빈 줄 건너뛰기
    #[serde(default = "default_true")]
    pub skip_blank: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            normalize_quotes: true,
            trim: true,
            skip_blank: true,
        }
    }
}

/// dubeol 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DubeolConfig {
    #[serde(default)]
    pub input: InputConfig,
    /// 낱자모가 남은 결과가 있으면 실패로 처리
    #[serde(default)]
    pub strict: bool,
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/dubeol/config.json (없으면 ~/.config/dubeol/config.json)
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var_os(var)
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME도 없으면 현재 디렉토리 기준
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("dubeol").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<DubeolConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(ConfigError::Parse)
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> DubeolConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            DubeolConfig::default()
        }
        Err(e) => {
            log::warn!("{} 읽기 실패, 기본 설정 사용: {}", path.display(), e);
            DubeolConfig::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &DubeolConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, json)?;
    Ok(())
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &DubeolConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("dubeol-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = DubeolConfig::default();
        assert!(config.input.normalize_quotes);
        assert!(config.input.trim);
        assert!(config.input.skip_blank);
        assert!(!config.strict);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 input 항목이 없는 경우 기본값 사용
        let config: DubeolConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.input, InputConfig::default());

        let config: DubeolConfig = serde_json::from_str(r#"{"input": {"trim": false}}"#).unwrap();
        assert!(!config.input.trim);
        assert!(config.input.normalize_quotes);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let config = DubeolConfig {
            input: InputConfig {
                normalize_quotes: false,
                trim: true,
                skip_blank: false,
            },
            strict: true,
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("missing");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));

        let broken = temp_path("broken");
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_config_from(&broken), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(broken.parent().unwrap());
    }
}
