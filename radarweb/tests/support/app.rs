//! テスト用アプリケーション構築ヘルパー

use axum::Router;
use radarweb::{api, probe::StatusProber, ui::SiteMonitor, AppState};
use radarweb_common::config::UiConfig;
use sqlx::SqlitePool;
use std::net::SocketAddr;

/// マイグレーション適用済みのインメモリDBでAppStateを構築
pub async fn build_state() -> AppState {
    let db_pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        db_pool,
        prober: StatusProber::new(),
        monitor: SiteMonitor::new(&UiConfig::default()),
    }
}

/// oneshot用のRouterを構築
pub async fn build_app() -> Router {
    api::create_router(build_state().await)
}

/// 実ポートで起動したテストサーバー
pub struct TestApp {
    /// バインド先アドレス
    pub addr: SocketAddr,
    _db_dir: tempfile::TempDir,
}

impl TestApp {
    /// サーバー上のパスへの完全URL
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// 実TCPポートにバインドしたテストサーバーを起動
///
/// UIモジュールのAPIベースURLは起動したサーバー自身を指す。
/// DBは一時ディレクトリ上のSQLiteファイル。
pub async fn spawn_test_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    let db_dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_url = format!("sqlite:{}/test.db?mode=rwc", db_dir.path().display());
    let db_pool = SqlitePool::connect(&db_url)
        .await
        .expect("Failed to create test database");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    let ui_config = UiConfig {
        api_base_url: format!("http://{}", addr),
        ..UiConfig::default()
    };

    let state = AppState {
        db_pool,
        prober: StatusProber::new(),
        monitor: SiteMonitor::new(&ui_config),
    };

    let app = api::create_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });

    TestApp {
        addr,
        _db_dir: db_dir,
    }
}
