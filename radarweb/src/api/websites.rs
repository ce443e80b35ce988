//! ウェブサイト管理APIハンドラー
//!
//! `/websites` 系のエンドポイントを提供する

use super::error::AppError;
use crate::db::websites as db;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use radarweb_common::{
    error::RadarError,
    protocol::{CreateWebsiteRequest, UpdateWebsiteRequest},
    types::{StatusReport, Website},
};
use reqwest::Url;
use serde::Deserialize;

/// ステータスチェックのクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct CheckStatusQuery {
    /// チェック対象URL
    pub url: String,
}

/// 入力されたURLを検証して返す
fn validate_url(raw: &str) -> Result<String, AppError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AppError(RadarError::Validation(
            "URL is required".to_string(),
        )));
    }
    if Url::parse(url).is_err() {
        return Err(AppError(RadarError::Validation(
            "Invalid URL format".to_string(),
        )));
    }
    Ok(url.to_string())
}

/// GET /websites/check-status - URLを指定して疎通確認
pub async fn check_status_by_url(
    State(state): State<AppState>,
    Query(query): Query<CheckStatusQuery>,
) -> Result<Json<StatusReport>, AppError> {
    let url = validate_url(&query.url)?;
    let report = state.prober.probe(&url).await;
    Ok(Json(report))
}

/// GET /websites/:id/check-status - 保存済みウェブサイトの疎通確認
///
/// サイト名は保存済みの表示名で上書きして返す。
pub async fn check_status_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StatusReport>, AppError> {
    let website = db::get_website(&state.db_pool, id)
        .await?
        .ok_or(AppError(RadarError::WebsiteNotFound(id)))?;

    let mut report = state.prober.probe(&website.url).await;
    report.site_name = Some(website.name);

    Ok(Json(report))
}

/// GET /websites - ウェブサイト一覧取得
pub async fn list_websites(
    State(state): State<AppState>,
) -> Result<Json<Vec<Website>>, AppError> {
    let websites = db::list_websites(&state.db_pool).await?;
    Ok(Json(websites))
}

/// POST /websites - ウェブサイト登録
pub async fn create_website(
    State(state): State<AppState>,
    Json(req): Json<CreateWebsiteRequest>,
) -> Result<(StatusCode, Json<Website>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError(RadarError::Validation(
            "Name is required".to_string(),
        )));
    }
    let url = validate_url(&req.url)?;

    if db::find_by_name(&state.db_pool, name).await?.is_some() {
        return Err(AppError(RadarError::Duplicate(format!(
            "Website with name '{}' already exists",
            name
        ))));
    }
    if db::find_by_url(&state.db_pool, &url).await?.is_some() {
        return Err(AppError(RadarError::Duplicate(format!(
            "Website with URL '{}' already exists",
            url
        ))));
    }

    let website = db::create_website(&state.db_pool, name, &url).await?;

    tracing::info!(id = website.id, url = %website.url, "Website saved");

    Ok((StatusCode::CREATED, Json(website)))
}

/// PATCH /websites/:id - ウェブサイト更新
pub async fn update_website(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateWebsiteRequest>,
) -> Result<Json<Website>, AppError> {
    let mut website = db::get_website(&state.db_pool, id)
        .await?
        .ok_or(AppError(RadarError::WebsiteNotFound(id)))?;

    if let Some(name) = req.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError(RadarError::Validation(
                "Name is required".to_string(),
            )));
        }
        if name != website.name {
            if db::find_by_name(&state.db_pool, &name).await?.is_some() {
                return Err(AppError(RadarError::Duplicate(format!(
                    "Website with name '{}' already exists",
                    name
                ))));
            }
            website.name = name;
        }
    }

    if let Some(url) = req.url {
        let url = validate_url(&url)?;
        if url != website.url {
            if db::find_by_url(&state.db_pool, &url).await?.is_some() {
                return Err(AppError(RadarError::Duplicate(format!(
                    "Website with URL '{}' already exists",
                    url
                ))));
            }
            website.url = url;
        }
    }

    website.updated_at = Some(Utc::now());

    if !db::update_website(&state.db_pool, &website).await? {
        return Err(AppError(RadarError::WebsiteNotFound(id)));
    }

    Ok(Json(website))
}

/// DELETE /websites/:id - ウェブサイト削除
pub async fn delete_website(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !db::delete_website(&state.db_pool, id).await? {
        return Err(AppError(RadarError::WebsiteNotFound(id)));
    }

    tracing::info!(id = id, "Website deleted");

    Ok(StatusCode::NO_CONTENT)
}
