//! ウェブサイトデータベース操作

use chrono::Utc;
use radarweb_common::types::Website;
use sqlx::SqlitePool;

/// ウェブサイトを登録し、採番済みエンティティを返す
pub async fn create_website(
    pool: &SqlitePool,
    name: &str,
    url: &str,
) -> Result<Website, sqlx::Error> {
    let created_at = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO websites (name, url, created_at, updated_at)
        VALUES (?, ?, ?, NULL)
        "#,
    )
    .bind(name)
    .bind(url)
    .bind(created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(Website {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        url: url.to_string(),
        created_at,
        updated_at: None,
    })
}

/// ウェブサイト一覧を登録順で取得
pub async fn list_websites(pool: &SqlitePool) -> Result<Vec<Website>, sqlx::Error> {
    let rows = sqlx::query_as::<_, WebsiteRow>(
        r#"
        SELECT id, name, url, created_at, updated_at
        FROM websites
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// IDでウェブサイトを取得
pub async fn get_website(pool: &SqlitePool, id: i64) -> Result<Option<Website>, sqlx::Error> {
    let row = sqlx::query_as::<_, WebsiteRow>(
        r#"
        SELECT id, name, url, created_at, updated_at
        FROM websites
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// 名前でウェブサイトを検索（重複チェック用）
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Website>, sqlx::Error> {
    let row = sqlx::query_as::<_, WebsiteRow>(
        r#"
        SELECT id, name, url, created_at, updated_at
        FROM websites
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// URLでウェブサイトを検索（重複チェック用）
pub async fn find_by_url(pool: &SqlitePool, url: &str) -> Result<Option<Website>, sqlx::Error> {
    let row = sqlx::query_as::<_, WebsiteRow>(
        r#"
        SELECT id, name, url, created_at, updated_at
        FROM websites
        WHERE url = ?
        "#,
    )
    .bind(url)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// ウェブサイトを更新
pub async fn update_website(pool: &SqlitePool, website: &Website) -> Result<bool, sqlx::Error> {
    let updated_at = website.updated_at.map(|dt| dt.to_rfc3339());

    let result = sqlx::query(
        r#"
        UPDATE websites SET name = ?, url = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&website.name)
    .bind(&website.url)
    .bind(&updated_at)
    .bind(website.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// ウェブサイトを削除
pub async fn delete_website(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM websites WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// --- Internal Row Types ---

#[derive(sqlx::FromRow)]
struct WebsiteRow {
    id: i64,
    name: String,
    url: String,
    created_at: String,
    updated_at: Option<String>,
}

impl From<WebsiteRow> for Website {
    fn from(row: WebsiteRow) -> Self {
        Website {
            id: row.id,
            name: row.name,
            url: row.url,
            created_at: chrono::DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
            updated_at: row
                .updated_at
                .and_then(|s| chrono::DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&chrono::Utc)),
        }
    }
}
