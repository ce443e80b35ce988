//! ビューモデルと描画関数
//!
//! 型付きビューモデルからHTML断片を生成する。DOMに依存しないため
//! ブラウザなしでテストできる。

use radarweb_common::types::{StatusReport, Website};
use url::Url;

/// 値欠落時のプレースホルダー
const PLACEHOLDER: &str = "—";

/// 描画済みHTML断片
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment(String);

impl Fragment {
    /// 断片同士を連結
    pub fn concat(parts: &[Fragment]) -> Self {
        Fragment(
            parts
                .iter()
                .map(|f| f.0.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// HTML文字列を取り出す
    pub fn into_inner(self) -> String {
        self.0
    }

    /// HTML文字列への参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// 入力バリデーション
    Validation,
    /// 操作成功
    Success,
    /// 操作失敗
    Failure,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            Self::Validation => "notice-validation",
            Self::Success => "notice-success",
            Self::Failure => "notice-failure",
        }
    }
}

/// 属性・テキスト用のHTMLエスケープ
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// URLからホスト名を取り出す
fn hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

/// ファビコン代替URLを構築
///
/// 公開ファビコン取得サービスに対象URLをそのまま連結する。エンコードは行わない。
fn favicon_fallback(favicon_service: &str, url: &str) -> String {
    format!("{}{}", favicon_service, url)
}

/// ステータスカードのビューモデル
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCardView {
    /// 表示名（レスポンス値、なければホスト名）
    pub site_name: String,
    /// ファビコンURL（レスポンス値、なければ代替サービス）
    pub favicon: String,
    /// 稼働状態ラベル
    pub status: String,
    /// HTTPステータスコード
    pub http_status: Option<u16>,
    /// 応答時間（秒）
    pub response_time: Option<f64>,
    /// チェック対象URL
    pub url: String,
}

impl StatusCardView {
    /// StatusReportからビューモデルを構築し、欠落値の代替を適用する
    pub fn from_report(requested_url: &str, report: StatusReport, favicon_service: &str) -> Self {
        let site_name = report
            .site_name
            .clone()
            .or_else(|| hostname(requested_url))
            .unwrap_or_else(|| requested_url.to_string());

        let favicon = report
            .favicon
            .clone()
            .unwrap_or_else(|| favicon_fallback(favicon_service, &report.url));

        StatusCardView {
            site_name,
            favicon,
            status: report.status.as_str().to_string(),
            http_status: report.http_status,
            response_time: report.response_time,
            url: report.url,
        }
    }

    /// ステータスカードを描画
    pub fn render(&self) -> Fragment {
        let http_status = self
            .http_status
            .map(|code| code.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let response_time = self
            .response_time
            .map(|secs| format!("{:.2}s", secs))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Fragment(format!(
            r#"<div class="site-card">
  <div class="site-header">
    <img src="{favicon}" class="favicon" alt="">
    <h3>{name}</h3>
    <button class="save-btn" data-action="save" data-name="{name_attr}" data-url="{url_attr}" title="Save website">&#9733;</button>
  </div>
  <p><strong>Status:</strong> {status}</p>
  <p><strong>HTTP:</strong> {http_status}</p>
  <p><strong>Time:</strong> {response_time}</p>
  <p><strong>URL:</strong> {url}</p>
</div>"#,
            favicon = escape_html(&self.favicon),
            name = escape_html(&self.site_name),
            name_attr = escape_html(&self.site_name),
            url_attr = escape_html(&self.url),
            status = escape_html(&self.status),
            http_status = http_status,
            response_time = response_time,
            url = escape_html(&self.url),
        ))
    }
}

/// 保存済みサイト1件のビューモデル
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSiteView {
    /// ファビコンURL（常に代替サービスから構築）
    pub favicon: String,
    /// 表示名
    pub name: String,
    /// サイトURL
    pub url: String,
}

impl SavedSiteView {
    /// Websiteからビューモデルを構築
    pub fn from_website(website: &Website, favicon_service: &str) -> Self {
        SavedSiteView {
            favicon: favicon_fallback(favicon_service, &website.url),
            name: website.name.clone(),
            url: website.url.clone(),
        }
    }

    /// 保存済みサイト1件を描画
    pub fn render(&self) -> Fragment {
        Fragment(format!(
            r#"<div class="saved-site">
  <img src="{favicon}" class="favicon" alt="">
  <div class="saved-info">
    <strong>{name}</strong>
    <span>{url}</span>
  </div>
  <button class="recheck-btn" data-action="recheck" data-url="{url_attr}" title="Check again">&#8635;</button>
</div>"#,
            favicon = escape_html(&self.favicon),
            name = escape_html(&self.name),
            url = escape_html(&self.url),
            url_attr = escape_html(&self.url),
        ))
    }
}

/// 保存済みサイト一覧を描画
///
/// 常にコンテナごと描画し直す。0件なら空のコンテナになる。
pub fn render_saved_list(views: &[SavedSiteView]) -> Fragment {
    let entries = views
        .iter()
        .map(|v| v.render().into_inner())
        .collect::<Vec<_>>()
        .join("\n");

    Fragment(format!(r#"<div class="saved-list">{}</div>"#, entries))
}

/// 通知を描画
pub fn render_notice(kind: NoticeKind, message: &str) -> Fragment {
    Fragment(format!(
        r#"<div class="notice {}">{}</div>"#,
        kind.css_class(),
        escape_html(message)
    ))
}

/// ステータスチェック失敗時の汎用エラー表示
pub fn render_check_error() -> Fragment {
    Fragment(r#"<div class="check-error">Could not check the website.</div>"#.to_string())
}
