//! ステータス疎通確認
//!
//! 任意のURLに1回のGETを発行し、稼働状態・応答時間・ページメタデータを収集する

use once_cell::sync::Lazy;
use radarweb_common::types::{SiteStatus, StatusReport};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// 疎通確認のデフォルトタイムアウト（秒）
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

static ICON_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link[rel][href]").expect("valid link selector"));

/// ステータスプローバー
///
/// タイムアウト付きHTTPクライアントを内包する。リトライは行わない。
#[derive(Clone)]
pub struct StatusProber {
    /// HTTPクライアント
    client: Client,
    /// タイムアウト（秒）
    timeout_secs: u64,
}

impl StatusProber {
    /// デフォルトタイムアウトでプローバーを作成
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT_SECS)
    }

    /// タイムアウトを指定してプローバーを作成
    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            timeout_secs,
        }
    }

    /// URLの疎通確認を1回実行
    ///
    /// 応答あり → HTTPコードで online/unstable を判定し、本文から
    /// タイトルとファビコンを抽出する。到達不能 → offline。
    /// いずれの場合もエラーは返さず、結果をStatusReportに畳み込む。
    pub async fn probe(&self, url: &str) -> StatusReport {
        let start = Instant::now();

        match self.client.get(url).send().await {
            Ok(response) => {
                let response_time = round_secs(start.elapsed());
                let http_status = response.status().as_u16();
                let final_url = response.url().clone();

                // 本文が読めなくても状態判定は成立する
                let body = response.text().await.unwrap_or_default();
                let (site_name, favicon) = extract_page_metadata(&body, &final_url);

                debug!(
                    url = %url,
                    http_status = http_status,
                    response_time = response_time,
                    "Probe completed"
                );

                StatusReport {
                    url: url.to_string(),
                    status: SiteStatus::from_http_code(http_status),
                    http_status: Some(http_status),
                    response_time: Some(response_time),
                    site_name,
                    favicon,
                    error: None,
                }
            }
            Err(e) => {
                let response_time = round_secs(start.elapsed());

                warn!(url = %url, error = %e, "Probe failed");

                StatusReport {
                    url: url.to_string(),
                    status: SiteStatus::Offline,
                    http_status: None,
                    response_time: Some(response_time),
                    site_name: None,
                    favicon: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl Default for StatusProber {
    fn default() -> Self {
        Self::new()
    }
}

/// 経過時間を秒（小数第2位まで）に丸める
fn round_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

/// HTML本文からページタイトルとファビコンURLを抽出
///
/// ファビコンは `rel` に "icon" を含む最初の `<link>` を採用し、
/// 相対パスは最終URLに対して解決する。
fn extract_page_metadata(body: &str, base: &Url) -> (Option<String>, Option<String>) {
    let document = Html::parse_document(body);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let favicon = document
        .select(&ICON_LINK_SELECTOR)
        .find(|el| {
            el.value()
                .attr("rel")
                .is_some_and(|rel| rel.to_lowercase().contains("icon"))
        })
        .and_then(|el| el.value().attr("href"))
        .and_then(|href| base.join(href).ok())
        .map(|u| u.to_string());

    (title, favicon)
}
