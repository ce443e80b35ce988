//! 共通型定義
//!
//! Website, SiteStatus, StatusReport等のコアデータ型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// サイトの稼働状態
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    /// 稼働中（HTTP < 400）
    #[default]
    Online,
    /// 応答はあるがエラー（HTTP >= 400）
    Unstable,
    /// 到達不能
    Offline,
}

impl SiteStatus {
    /// SiteStatusを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Unstable => "unstable",
            Self::Offline => "offline",
        }
    }

    /// HTTPステータスコードから稼働状態を判定
    pub fn from_http_code(code: u16) -> Self {
        if code < 400 {
            Self::Online
        } else {
            Self::Unstable
        }
    }
}

impl FromStr for SiteStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "online" => Self::Online,
            "unstable" => Self::Unstable,
            _ => Self::Offline,
        })
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 保存済みウェブサイト
///
/// ユーザーがブックマークしたサイトを表すエンティティ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Website {
    /// 一意識別子（自動採番）
    pub id: i64,
    /// 表示名
    pub name: String,
    /// サイトURL
    pub url: String,
    /// 登録日時
    pub created_at: DateTime<Utc>,
    /// 最終更新日時
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// ステータスチェック結果
///
/// 1回のURL疎通確認の結果。表示のためだけに保持され、永続化されない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusReport {
    /// チェック対象URL
    pub url: String,
    /// 稼働状態
    pub status: SiteStatus,
    /// HTTPステータスコード（応答があった場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// 応答時間（秒、小数第2位まで）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    /// ページタイトル等から得たサイト名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// ファビコンURL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// エラーメッセージ（到達不能時のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
