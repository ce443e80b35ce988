//! RadarWeb Server
//!
//! ウェブサイトの疎通確認とブックマーク管理を提供するWebアプリケーション

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ステータス疎通確認
pub mod probe;

/// axumサーバー起動・シャットダウン
pub mod server;

/// サイトモニターUIモジュール
pub mod ui;

/// 静的アセット配信
pub mod web;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// ステータスプローバー
    pub prober: probe::StatusProber,
    /// サイトモニターUI（REST APIのHTTPクライアントを内包）
    pub monitor: ui::SiteMonitor,
}
