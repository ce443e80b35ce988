//! サイトモニターUIモジュール
//!
//! URLの疎通確認・保存済みサイト一覧・サイト保存の3操作を提供する。
//! いずれもREST API（`/websites`）をHTTP経由で消費し、結果を
//! HTML断片として描画する。描画先とAPIベースURLは設定として渡される。

/// REST APIクライアント
pub mod client;

/// フラグメント配信ハンドラー
pub mod routes;

/// ビューモデルと描画関数
pub mod view;

use client::ApiClient;
use radarweb_common::config::UiConfig;
use reqwest::StatusCode;
use tracing::error;
use view::{Fragment, NoticeKind, SavedSiteView, StatusCardView};

/// サイトモニター
///
/// 3つの操作は互いに独立で、共有可変状態を持たない。進行中リクエストの
/// キャンセルは行わず、表示領域は最後に完了した描画が勝つ。
#[derive(Clone)]
pub struct SiteMonitor {
    api: ApiClient,
    favicon_service: String,
}

impl SiteMonitor {
    /// UI設定からモニターを作成
    pub fn new(config: &UiConfig) -> Self {
        Self {
            api: ApiClient::new(config.api_base_url.clone()),
            favicon_service: config.favicon_service.clone(),
        }
    }

    /// URLの疎通確認
    ///
    /// 空入力はAPI呼び出しを行わずバリデーション通知を返す。
    /// API失敗は汎用エラー表示に畳み込み、詳細はログに残す。
    pub async fn check_site_status(&self, raw_url: &str) -> Fragment {
        let url = raw_url.trim();

        if url.is_empty() {
            return view::render_notice(NoticeKind::Validation, "Please enter a URL.");
        }

        match self.api.check_status(url).await {
            Ok(report) => StatusCardView::from_report(url, report, &self.favicon_service).render(),
            Err(e) => {
                error!(url = %url, error = %e, "Status check failed");
                view::render_check_error()
            }
        }
    }

    /// 保存済みサイト一覧の描画
    ///
    /// 取得失敗はログのみ残し、空のコンテナを返す（ユーザー向け
    /// エラー表示は出さない。保存・チェックとの非対称は意図的）。
    pub async fn list_saved_sites(&self) -> Fragment {
        let views = match self.api.list_websites().await {
            Ok(websites) => websites
                .iter()
                .map(|w| SavedSiteView::from_website(w, &self.favicon_service))
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to list saved websites");
                Vec::new()
            }
        };

        view::render_saved_list(&views)
    }

    /// サイトの保存
    ///
    /// 201なら成功通知に加えて一覧を取り直して返す（追加のAPI呼び出しは
    /// この1回だけ）。それ以外は失敗通知のみで、一覧は取得しない。
    pub async fn save_site(&self, name: &str, url: &str) -> Fragment {
        match self.api.save_website(name, url).await {
            Ok(status) if status == StatusCode::CREATED => {
                let notice =
                    view::render_notice(NoticeKind::Success, "Website saved successfully!");
                let refreshed = self.list_saved_sites().await;
                Fragment::concat(&[notice, refreshed])
            }
            Ok(status) => {
                error!(url = %url, status = %status, "Failed to save website");
                view::render_notice(NoticeKind::Failure, "Failed to save website.")
            }
            Err(e) => {
                error!(url = %url, error = %e, "Failed to save website");
                view::render_notice(NoticeKind::Failure, "Failed to save website.")
            }
        }
    }
}
