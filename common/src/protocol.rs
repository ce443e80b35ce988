//! REST APIプロトコル定義
//!
//! `/websites` API のリクエスト/レスポンスボディ

use serde::{Deserialize, Serialize};

/// ウェブサイト登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateWebsiteRequest {
    /// 表示名
    pub name: String,
    /// サイトURL
    pub url: String,
}

/// ウェブサイト更新リクエスト（PATCH）
///
/// 指定されたフィールドのみ更新する。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateWebsiteRequest {
    /// 表示名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// サイトURL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// エラーレスポンスボディ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// エラーメッセージ
    pub error: String,
    /// エラーコード
    pub code: String,
}
