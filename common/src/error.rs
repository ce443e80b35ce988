//! 共通エラー型
//!
//! サーバー全体で使用するエラー分類

use thiserror::Error;

/// RadarWebのエラー型
#[derive(Debug, Error)]
pub enum RadarError {
    /// 入力バリデーションエラー
    #[error("validation error: {0}")]
    Validation(String),

    /// ウェブサイトが存在しない
    #[error("website not found: {0}")]
    WebsiteNotFound(i64),

    /// 名前またはURLの重複
    #[error("duplicate website: {0}")]
    Duplicate(String),

    /// データベースエラー
    #[error("database error: {0}")]
    Database(String),

    /// 外部HTTP通信エラー
    #[error("http error: {0}")]
    Http(String),

    /// 内部エラー
    #[error("internal error: {0}")]
    Internal(String),
}

impl RadarError {
    /// 外部公開用メッセージ
    ///
    /// 内部情報（接続文字列、SQL等）をレスポンスに漏らさないため、
    /// DB/内部エラーは固定文言に丸める。
    pub fn external_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::WebsiteNotFound(id) => format!("Website {} not found", id),
            Self::Duplicate(msg) => msg.clone(),
            Self::Database(_) => "Database error".to_string(),
            Self::Http(_) => "Upstream request failed".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// エラーコード（レスポンスボディの `code` フィールド）
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::WebsiteNotFound(_) => "NOT_FOUND",
            Self::Duplicate(_) => "DUPLICATE",
            Self::Database(_) => "DB_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }
}
