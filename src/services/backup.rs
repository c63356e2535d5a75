//! # 백업 폴백(Backup Fallback)
//!
//! 네트워크 공유 폴더의 엑셀 파일은 일시적으로 접근이 안 될 수 있습니다.
//! 그래서 원본을 읽을 수 있을 때마다 백업 디렉토리에 복사본을 남기고,
//! 원본이 없을 때는 가장 최근 백업을 대신 읽습니다.
//!
//! - 백업 키: 원본 경로의 **파일 이름** (`/`와 `\` 모두 구분자로 취급)
//! - 같은 이름의 백업은 덮어씁니다. 동시에 같은 파일을 백업하면
//!   마지막에 쓴 쪽이 남습니다 (last-write-wins, 잠금 없음).
//! - 백업이 오래되었는지는 검사하지 않습니다.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("no original file and no backup found for '{file_name}'")]
    NoBackup { file_name: String },

    #[error("cannot derive a backup name from path '{0}'")]
    InvalidPath(String),

    #[error("failed to access '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write backup '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 파일 이름별 최신 복사본을 보관하는 디렉토리
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 원본 경로에 대응하는 백업 파일 경로
    pub fn backup_path_for(&self, source: &str) -> Result<PathBuf, BackupError> {
        Ok(self.dir.join(file_name(source)?))
    }

    /// 실제로 읽을 경로를 결정합니다.
    ///
    /// - 원본이 있으면: 백업을 갱신(실패해도 무시)하고 원본 경로 반환
    /// - 원본이 없으면: 백업 경로 반환, 백업도 없으면 `NoBackup`
    /// - 그 외 접근 에러(권한 등)는 폴백 없이 `Access`
    pub async fn resolve(&self, primary: &str) -> Result<PathBuf, BackupError> {
        match fs::metadata(primary).await {
            Ok(_) => {
                if let Err(e) = self.snapshot(primary).await {
                    tracing::warn!(path = primary, error = %e, "Backup snapshot failed, reading original");
                }
                Ok(PathBuf::from(primary))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let backup = self.latest(primary).await?;
                tracing::warn!(
                    path = primary,
                    backup = %backup.display(),
                    "Original spreadsheet not found, reading latest backup"
                );
                Ok(backup)
            }
            Err(e) => Err(BackupError::Access {
                path: primary.to_string(),
                source: e,
            }),
        }
    }

    /// 원본의 현재 내용을 백업 디렉토리에 복사합니다 (같은 이름은 덮어쓰기).
    pub async fn snapshot(&self, source: &str) -> Result<PathBuf, BackupError> {
        let backup_path = self.backup_path_for(source)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| BackupError::Write {
                path: self.dir.display().to_string(),
                source: e,
            })?;

        let bytes = fs::read(source).await.map_err(|e| BackupError::Access {
            path: source.to_string(),
            source: e,
        })?;

        fs::write(&backup_path, bytes)
            .await
            .map_err(|e| BackupError::Write {
                path: backup_path.display().to_string(),
                source: e,
            })?;

        tracing::debug!(source, backup = %backup_path.display(), "Spreadsheet backed up");
        Ok(backup_path)
    }

    /// 가장 최근 백업의 경로. 없으면 `NoBackup`.
    pub async fn latest(&self, source: &str) -> Result<PathBuf, BackupError> {
        let backup_path = self.backup_path_for(source)?;
        match fs::metadata(&backup_path).await {
            Ok(meta) if meta.is_file() => Ok(backup_path),
            _ => Err(BackupError::NoBackup {
                file_name: file_name(source)?.to_string(),
            }),
        }
    }
}

/// 경로의 마지막 구성 요소. 리눅스에서도 `\\server\share\po.xlsx`를 처리하기 위해
/// 두 구분자를 모두 사용합니다.
fn file_name(source: &str) -> Result<&str, BackupError> {
    source
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .ok_or_else(|| BackupError::InvalidPath(source.to_string()))
}
