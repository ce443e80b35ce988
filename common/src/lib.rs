//! RadarWeb共通クレート
//!
//! サーバーとUIモジュールで共有する型・プロトコル・設定・エラー定義

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型
pub mod error;

/// REST APIリクエスト/レスポンス定義
pub mod protocol;

/// コアデータ型
pub mod types;
