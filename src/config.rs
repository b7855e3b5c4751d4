//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::encoder::{default_separator, EncodeOptions};

/// 설정 저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일/디렉토리 입출력 실패
    IoError(std::io::Error),
    /// JSON 직렬화 실패
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::SerializeError(s) => write!(f, "설정 직렬화 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 변환 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlyphConfig {
    /// 글자마다 구분자 추가 여부
    #[serde(default)]
    pub use_separator: bool,
    /// 구분자 문자
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            use_separator: false,
            separator: default_separator(),
        }
    }
}

impl GlyphConfig {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            use_separator: self.use_separator,
            separator: self.separator,
        }
    }
}

impl From<&EncodeOptions> for GlyphConfig {
    fn from(options: &EncodeOptions) -> Self {
        Self {
            use_separator: options.use_separator,
            separator: options.separator,
        }
    }
}

/// 설정 파일 경로: ~/.config/hangul-glyph/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangul-glyph").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> GlyphConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> GlyphConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            GlyphConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            GlyphConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &GlyphConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &GlyphConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
