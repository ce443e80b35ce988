//! REST APIクライアント
//!
//! UIモジュールが消費する `/websites` APIへのHTTPアクセス

use radarweb_common::protocol::CreateWebsiteRequest;
use radarweb_common::types::{StatusReport, Website};
use reqwest::StatusCode;
use thiserror::Error;

/// APIアクセスのエラー型
#[derive(Debug, Error)]
pub enum ApiError {
    /// 通信エラー（接続失敗、タイムアウト、ボディ解析失敗）
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 成功以外のHTTPステータス
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// `/websites` APIクライアント
///
/// ベースURLは設定から渡される。リトライもキャンセルも行わない。
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// ベースURLを指定してクライアントを作成
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /websites/check-status - URLの疎通確認を依頼
    pub async fn check_status(&self, url: &str) -> Result<StatusReport, ApiError> {
        let response = self
            .http
            .get(format!("{}/websites/check-status", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// GET /websites - 保存済みウェブサイト一覧を取得
    pub async fn list_websites(&self) -> Result<Vec<Website>, ApiError> {
        let response = self
            .http
            .get(format!("{}/websites", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// POST /websites - ウェブサイトを保存
    ///
    /// 201とそれ以外を呼び出し側で区別できるよう、生のステータスを返す。
    pub async fn save_website(&self, name: &str, url: &str) -> Result<StatusCode, ApiError> {
        let payload = CreateWebsiteRequest {
            name: name.to_string(),
            url: url.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/websites", self.base_url))
            .json(&payload)
            .send()
            .await?;

        Ok(response.status())
    }
}
