//! 静的アセット配信
//!
//! バイナリに埋め込んだシェル（HTML/CSS/JS）を配信する

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use include_dir::{include_dir, Dir};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/web/static");

/// GET / - シェルページを返す
pub async fn index() -> Html<&'static str> {
    let html = STATIC_DIR
        .get_file("index.html")
        .and_then(|f| f.contents_utf8())
        .unwrap_or("");

    Html(html)
}

/// GET /static/*path - 埋め込みアセットを返す
pub async fn static_asset(Path(path): Path<String>) -> impl IntoResponse {
    match STATIC_DIR.get_file(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.to_string())],
                file.contents(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
