//! RadarWeb Server Entry Point

use clap::Parser;
use radarweb::cli::Cli;
use radarweb::{config, logging, probe, server, ui, AppState};
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tracing::info;

#[tokio::main]
async fn main() {
    // CLIをパース（-h/--help と -V/--version のみ）
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");
    info!("RadarWeb v{}", env!("CARGO_PKG_VERSION"));

    let server_config = config::server_config_from_env();
    let ui_config = config::ui_config_from_env(&server_config);

    let db_pool = init_db_pool(&server_config.database_url)
        .await
        .expect("Failed to connect to database");

    // マイグレーションを実行
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    info!(database_url = %server_config.database_url, "Database initialized");

    let state = AppState {
        db_pool,
        prober: probe::StatusProber::with_timeout(server_config.probe_timeout_secs),
        monitor: ui::SiteMonitor::new(&ui_config),
    };

    info!(api_base_url = %ui_config.api_base_url, "UI module initialized");

    let bind_addr = format!("{}:{}", server_config.host, server_config.port);
    server::run(state, &bind_addr).await;
}

async fn init_db_pool(database_url: &str) -> sqlx::Result<sqlx::SqlitePool> {
    // SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
    if let Some(path) = database_url.strip_prefix("sqlite:") {
        // `sqlite::memory:` のような特殊指定はスキップ
        if !path.starts_with(':') {
            // `sqlite://` 形式に備えてスラッシュを除去し、クエリ部分を除外
            let normalized = path.trim_start_matches("//");
            let path_without_params = normalized.split('?').next().unwrap_or(normalized);
            let db_path = std::path::Path::new(path_without_params);
            if let Some(parent) = db_path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    panic!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        err
                    );
                }
            }
        }
    }

    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    sqlx::SqlitePool::connect_with(connect_options).await
}
