//! # 구매 주문 기록(Purchase Record) 서버 진입점
//!
//! 엑셀 스프레드시트의 구매 주문 행을 정규화된 레코드로 변환하고,
//! 저장/목록 조회 API를 제공하는 서버입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 및 SQLite 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 백업 디렉토리 생성
//! 6. API 라우터 설정 및 HTTP 서버 시작

// ── 모듈 선언 ──
mod config;
mod db;
mod error;
#[cfg(test)]
mod fixtures;
mod models;
mod routes;
mod services;

use std::sync::Arc;

use anyhow::Result; // 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use axum::Router;
use config::Config;
use routes::AppState;
use services::backup::BackupStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "purchase_record=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!(
        upload_layout = config.upload_layout.name,
        path_layout = config.path_layout.name,
        int_policy = config.path_layout.int_policy.as_str(),
        "Starting purchase record server on {}:{}",
        config.host,
        config.port
    );
    if config.setting_file_path.is_none() {
        tracing::warn!("SETTING_FILE_PATH is not set, setting lookups will fail");
    }

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 데이터베이스 파일이 없으면 새로 만듭니다.
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    // ── 6단계: 백업 디렉토리 생성 ──
    let backups = BackupStore::new(&config.backup_path);
    if !backups.dir().exists() {
        tokio::fs::create_dir_all(backups.dir()).await?;
        tracing::info!("Created backup directory: {}", backups.dir().display());
    }

    // ── 7단계: 애플리케이션 상태(State) 생성 ──
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        pool,
        backups,
        config: Arc::new(config),
    };

    // ── 8단계: 라우터 및 미들웨어 설정 ──
    // 개발 환경 기준으로 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // ── 9단계: 서버 시작 ──
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
