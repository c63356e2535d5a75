//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(`.env` 포함)에서 서버 설정값을 읽어옵니다.
//! 시작 시 한 번 만들어 `AppState`를 통해 필요한 곳에 전달합니다.
//! 전역 변수로 두지 않습니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST`, `PORT`: 서버 바인딩 주소/포트
//! - `BACKUP_PATH`: 엑셀 원본 백업 디렉토리
//! - `SETTING_FILE_PATH`: 설정 시트 파일 경로 (기본값 없음)
//! - `UPLOAD_SHEET_LAYOUT`, `PATH_SHEET_LAYOUT`: 사용할 시트 레이아웃 이름
//! - `SHEET_INT_POLICY`: 정수 셀 정책 덮어쓰기 (`zero-is-absent` / `empty-only`)
//! - `MAX_UPLOAD_BYTES`: 업로드 파일 최대 크기
//! - `API_TITLE`, `API_DESCRIPTION`, `API_VERSION`: `/info`에 표시할 API 정보

use std::env;

use serde::Serialize;
use thiserror::Error;

use crate::services::coercion::IntPolicy;
use crate::services::layout::SheetLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {name}: {source}")]
    Missing {
        name: &'static str,
        #[source]
        source: env::VarError,
    },

    #[error("unknown sheet layout '{value}' in {name}")]
    UnknownLayout { name: &'static str, value: String },

    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// `/info`로 제공되는 API 설명
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub backup_path: String,
    /// 설정 시트 경로. 특정 PC의 경로를 기본값으로 두지 않습니다.
    pub setting_file_path: Option<String>,
    /// 업로드 파일에 적용할 레이아웃
    pub upload_layout: SheetLayout,
    /// 경로(로컬/UNC) 파일에 적용할 레이아웃
    pub path_layout: SheetLayout,
    pub max_upload_bytes: usize,
    pub api: ApiInfo,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// - `DATABASE_URL`이 없으면 `ConfigError::Missing`
    /// - 알 수 없는 레이아웃/정책 이름이면 `UnknownLayout` / `Invalid`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// 환경변수 조회 함수를 주입받아 설정을 만듭니다 (테스트에서 사용).
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let optional = |name: &'static str| lookup(name).ok().filter(|v| !v.is_empty());

        let database_url = lookup("DATABASE_URL").map_err(|source| ConfigError::Missing {
            name: "DATABASE_URL",
            source,
        })?;

        let int_policy = optional("SHEET_INT_POLICY")
            .map(|v| {
                v.parse::<IntPolicy>().map_err(|message| ConfigError::Invalid {
                    name: "SHEET_INT_POLICY",
                    message,
                })
            })
            .transpose()?;

        let layout = |name: &'static str, default: &str| -> Result<SheetLayout, ConfigError> {
            let value = optional(name).unwrap_or_else(|| default.to_string());
            let layout = SheetLayout::by_name(&value)
                .ok_or(ConfigError::UnknownLayout { name, value })?;
            Ok(match int_policy {
                Some(policy) => layout.with_int_policy(policy),
                None => layout,
            })
        };

        let port: u16 = match optional("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                message: format!("'{}' is not a port number", v),
            })?,
            None => 8080,
        };

        let max_upload_bytes: usize = match optional("MAX_UPLOAD_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                message: format!("'{}' is not a byte count", v),
            })?,
            None => 20 * 1024 * 1024,
        };

        Ok(Self {
            database_url,
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            backup_path: optional("BACKUP_PATH").unwrap_or_else(|| "data/backup".to_string()),
            setting_file_path: optional("SETTING_FILE_PATH"),
            upload_layout: layout("UPLOAD_SHEET_LAYOUT", "upload-v1")?,
            path_layout: layout("PATH_SHEET_LAYOUT", "network-v2")?,
            max_upload_bytes,
            api: ApiInfo {
                title: optional("API_TITLE").unwrap_or_else(|| "Purchase Record API".to_string()),
                description: optional("API_DESCRIPTION")
                    .unwrap_or_else(|| "API for processing Excel order data".to_string()),
                version: optional("API_VERSION")
                    .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            },
        })
    }
}
