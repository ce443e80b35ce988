//! UIフラグメント配信ハンドラー
//!
//! 静的シェルからのイベントを型付きペイロードとして受け取り、
//! SiteMonitorの描画結果をHTML断片で返す

use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

/// ステータスチェックのクエリパラメータ
///
/// 空入力のバリデーションはSiteMonitor側で行うため、ここでは
/// 欠落を空文字として受ける。
#[derive(Debug, Deserialize)]
pub struct StatusCheckParams {
    /// 入力されたURL
    #[serde(default)]
    pub url: String,
}

/// サイト保存のフォームペイロード
#[derive(Debug, Deserialize)]
pub struct SaveSitePayload {
    /// 表示名
    pub name: String,
    /// サイトURL
    pub url: String,
}

/// GET /ui/status-check - 疎通確認してステータスカードを返す
pub async fn status_check(
    State(state): State<AppState>,
    Query(params): Query<StatusCheckParams>,
) -> Html<String> {
    Html(state.monitor.check_site_status(&params.url).await.into_inner())
}

/// GET /ui/saved-websites - 保存済みサイト一覧の断片を返す
pub async fn saved_websites(State(state): State<AppState>) -> Html<String> {
    Html(state.monitor.list_saved_sites().await.into_inner())
}

/// POST /ui/saved-websites - サイトを保存し、通知（と更新済み一覧）を返す
pub async fn save_website(
    State(state): State<AppState>,
    Form(payload): Form<SaveSitePayload>,
) -> Html<String> {
    Html(
        state
            .monitor
            .save_site(&payload.name, &payload.url)
            .await
            .into_inner(),
    )
}
