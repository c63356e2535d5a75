//! # 목록 조회 / 페이지네이션
//!
//! `pageNo`(1부터 시작)와 `pageSize`를 저장소의 skip/limit으로 바꿉니다.
//!
//! ```text
//! skip  = (pageNo - 1) * pageSize
//! limit = pageSize
//! ```
//!
//! `total`은 페이지 범위와 관계없이 필터에 맞는 전체 개수입니다.
//! 페이지가 비어 있어도(마지막 페이지 이후) `total`은 그대로 보고합니다.

use sqlx::SqlitePool;

use crate::db::{self, OrderFilter};
use crate::error::AppError;
use crate::models::{Page, RequestQuery};

/// 검증된 skip/limit 값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub skip: i64,
    pub limit: i64,
}

impl Window {
    /// 0 이하의 페이지 값은 음수 offset이 되므로 I/O 전에 거부합니다.
    pub fn from_page(page_no: i64, page_size: i64) -> Result<Self, AppError> {
        if page_no <= 0 {
            return Err(AppError::BadRequest("pageNo must be greater than 0".to_string()));
        }
        if page_size <= 0 {
            return Err(AppError::BadRequest("pageSize must be greater than 0".to_string()));
        }

        let skip = (page_no - 1)
            .checked_mul(page_size)
            .ok_or_else(|| AppError::BadRequest("pageNo and pageSize are too large".to_string()))?;

        Ok(Self {
            skip,
            limit: page_size,
        })
    }
}

/// 한 페이지의 구매 주문과 전체 개수를 조회합니다.
pub async fn list_orders(pool: &SqlitePool, query: &RequestQuery) -> Result<Page, AppError> {
    let window = Window::from_page(query.page_no, query.page_size)?;
    let filter = OrderFilter::from_search(&query.search);

    let total = db::count_orders(pool, &filter).await?;
    let data = db::find_orders(pool, &filter, window.skip, window.limit).await?;

    Ok(Page {
        data,
        total,
        page: query.page_no,
        page_size: query.page_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::PurchaseOrder;

    fn query(page_no: i64, page_size: i64) -> RequestQuery {
        RequestQuery {
            search: String::new(),
            page_no,
            page_size,
        }
    }

    async fn seed(pool: &SqlitePool, count: usize) {
        let orders: Vec<_> = (0..count)
            .map(|i| PurchaseOrder {
                job_id_no: Some(format!("J-{:02}", i)),
                ..Default::default()
            })
            .collect();
        db::insert_many(pool, &orders).await.unwrap();
    }

    #[test]
    fn window_from_page() {
        assert_eq!(Window::from_page(1, 10).unwrap(), Window { skip: 0, limit: 10 });
        assert_eq!(Window::from_page(3, 10).unwrap(), Window { skip: 20, limit: 10 });
    }

    #[test]
    fn non_positive_page_values_are_rejected() {
        for (page_no, page_size) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let err = Window::from_page(page_no, page_size).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{page_no}/{page_size}");
        }
        assert!(Window::from_page(i64::MAX, i64::MAX).is_err());
    }

    #[tokio::test]
    async fn first_page_of_25() {
        let pool = test_pool().await;
        seed(&pool, 25).await;

        let page = list_orders(&pool, &query(1, 10)).await.unwrap();
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.data[0].job_id_no.as_deref(), Some("J-00"));
    }

    #[tokio::test]
    async fn last_page_returns_the_remainder() {
        let pool = test_pool().await;
        seed(&pool, 25).await;

        let page = list_orders(&pool, &query(3, 10)).await.unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.total, 25);
        assert_eq!(page.data[0].job_id_no.as_deref(), Some("J-20"));
    }

    #[tokio::test]
    async fn page_past_the_end_still_reports_total() {
        let pool = test_pool().await;
        seed(&pool, 25).await;

        let page = list_orders(&pool, &query(4, 10)).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 25);
    }

    #[tokio::test]
    async fn empty_collection_returns_empty_page() {
        let pool = test_pool().await;

        let page = list_orders(&pool, &query(1, 10)).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
    }

    // 알려진 공백: search는 아직 어떤 필드에도 적용되지 않습니다.
    // 검색 조건이 구현되면 이 테스트를 실제 필터링 검증으로 바꿔야 합니다.
    #[tokio::test]
    async fn search_is_passed_through_without_filtering() {
        let pool = test_pool().await;
        seed(&pool, 3).await;

        let mut q = query(1, 10);
        q.search = "no-such-order".to_string();
        let page = list_orders(&pool, &q).await.unwrap();
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn invalid_page_is_rejected_before_touching_the_store() {
        let pool = test_pool().await;
        pool.close().await;

        let err = list_orders(&pool, &query(0, 10)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
