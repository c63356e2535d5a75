//! # 구매 주문 저장소 쿼리
//!
//! 구매 주문은 SQLite 테이블에 **JSON 문서** 한 건씩 저장합니다.
//! 이 모듈이 외부에 제공하는 연산은 세 가지뿐입니다:
//! - `insert_many`: 여러 레코드를 한 트랜잭션으로 저장
//! - `find_orders`: 필터 + skip/limit으로 조회
//! - `count_orders`: 필터에 맞는 전체 개수

use crate::error::AppError;
use crate::models::PurchaseOrder;
use sqlx::SqlitePool;

/// 목록 조회 필터
///
/// `search`는 받아서 전달만 하고, 아직 어떤 조건에도 적용하지 않습니다.
/// 검색 대상 필드가 정해지면 `find_orders`/`count_orders`의 WHERE 절에 반영해야 합니다.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn from_search(search: &str) -> Self {
        Self {
            search: Some(search.to_string()).filter(|s| !s.is_empty()),
        }
    }
}

/// `insert_many`의 결과
#[derive(Debug, Clone)]
pub struct InsertSummary {
    /// 이번에 저장한 레코드들에 공통으로 붙는 UUIDv7
    pub batch_id: String,
    pub inserted: usize,
}

/// 여러 구매 주문을 하나의 트랜잭션으로 저장합니다.
///
/// 중간에 실패하면 트랜잭션이 롤백되어 아무것도 저장되지 않습니다.
/// (`tx`가 commit 없이 drop되면 sqlx가 자동으로 롤백합니다.)
pub async fn insert_many(
    pool: &SqlitePool,
    orders: &[PurchaseOrder],
) -> Result<InsertSummary, AppError> {
    let batch_id = uuid::Uuid::now_v7().to_string();
    let op = "failed to insert purchase orders";

    let mut tx = pool.begin().await.map_err(AppError::store(op))?;

    for order in orders {
        let document = serde_json::to_string(order)
            .map_err(|e| AppError::Internal(format!("failed to encode purchase order: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO purchase_orders (batch_id, job_id_no, document)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&batch_id)
        .bind(&order.job_id_no)
        .bind(&document)
        .execute(&mut *tx)
        .await
        .map_err(AppError::store(op))?;
    }

    tx.commit().await.map_err(AppError::store(op))?;

    Ok(InsertSummary {
        batch_id,
        inserted: orders.len(),
    })
}

/// 저장 순서(id 오름차순)대로 `skip`개를 건너뛰고 최대 `limit`개를 조회합니다.
pub async fn find_orders(
    pool: &SqlitePool,
    filter: &OrderFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<PurchaseOrder>, AppError> {
    tracing::debug!(search = ?filter.search, skip, limit, "Finding purchase orders");

    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT document
        FROM purchase_orders
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
    .map_err(AppError::store("failed to get purchase orders"))?;

    rows.into_iter()
        .map(|(document,)| {
            serde_json::from_str(&document)
                .map_err(|e| AppError::Internal(format!("failed to decode purchase order: {}", e)))
        })
        .collect()
}

/// 필터에 맞는 전체 구매 주문 수
pub async fn count_orders(pool: &SqlitePool, filter: &OrderFilter) -> Result<i64, AppError> {
    tracing::debug!(search = ?filter.search, "Counting purchase orders");

    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM purchase_orders")
        .fetch_one(pool)
        .await
        .map_err(AppError::store("failed to count purchase orders"))?;

    Ok(total)
}
