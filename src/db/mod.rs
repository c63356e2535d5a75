//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 문서 저장소(구매 주문 컬렉션)와 직접 상호작용하는 함수들입니다.
//! 라우트 핸들러와 `services::listing`에서 이 모듈의 함수를 호출합니다.
//!
//! - `purchase_orders`: 구매 주문 문서 저장/조회/개수 쿼리

pub mod purchase_orders;

pub use purchase_orders::*;

use sqlx::SqlitePool;

/// `./migrations` 폴더의 SQL 파일들을 아직 실행되지 않은 것만 순서대로 실행합니다.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// 테스트용 인메모리 SQLite 풀 (마이그레이션 적용 완료)
///
/// `:memory:` DB는 연결마다 따로 생기므로 연결을 1개로 고정하고,
/// 유휴 연결이 닫혀 데이터가 사라지지 않도록 타임아웃을 끕니다.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
