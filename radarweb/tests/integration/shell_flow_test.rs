//! Integration Test: シェル込みのエンドツーエンドフロー
//!
//! 実ポートで起動したサーバーに対し、UIフラグメント経由で
//! チェック→保存→一覧のフローを通しで検証する

use reqwest::Client;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::app::spawn_test_app;

/// シェルページと静的アセットが配信される
#[tokio::test]
async fn test_shell_and_assets_served() {
    let server = spawn_test_app().await;
    let client = Client::new();

    let response = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="result-section""#));
    assert!(html.contains(r#"id="saved-websites""#));

    let response = client
        .get(server.url("/static/styles.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("css"));

    let response = client
        .get(server.url("/static/no-such-file.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

/// チェック→カード保存→一覧更新のフロー
#[tokio::test]
async fn test_check_save_list_flow() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Mock Site</title></head><body></body></html>"#,
        ))
        .mount(&site)
        .await;

    let server = spawn_test_app().await;
    let client = Client::new();

    // 疎通確認フラグメント
    let response = client
        .get(server.url("/ui/status-check"))
        .query(&[("url", site.uri())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let card = response.text().await.unwrap();
    assert!(card.contains("site-card"));
    assert!(card.contains("Mock Site"));
    assert!(card.contains(r#"data-action="save""#));

    // カードの保存操作に相当するフォーム送信
    let response = client
        .post(server.url("/ui/saved-websites"))
        .form(&[("name", "Mock Site"), ("url", site.uri().as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let saved = response.text().await.unwrap();
    assert!(saved.contains("notice-success"));
    assert!(saved.contains("Mock Site"));

    // REST API側にも保存されている
    let response = client.get(server.url("/websites")).send().await.unwrap();
    let body: Value = response.json().await.unwrap();
    let sites = body.as_array().unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0]["name"], "Mock Site");

    // 同じサイトをもう一度保存すると失敗通知のみ
    let response = client
        .post(server.url("/ui/saved-websites"))
        .form(&[("name", "Mock Site"), ("url", site.uri().as_str())])
        .send()
        .await
        .unwrap();
    let duplicate = response.text().await.unwrap();
    assert!(duplicate.contains("notice-failure"));

    // 一覧フラグメントにも反映されている
    let response = client
        .get(server.url("/ui/saved-websites"))
        .send()
        .await
        .unwrap();
    let list = response.text().await.unwrap();
    assert_eq!(list.matches(r#"class="saved-site""#).count(), 1);
    assert!(list.contains(r#"data-action="recheck""#));
}

/// 空URLのチェックはバリデーション通知を返す
#[tokio::test]
async fn test_check_fragment_validation_notice() {
    let server = spawn_test_app().await;
    let client = Client::new();

    let response = client
        .get(server.url("/ui/status-check"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("notice-validation"));
}
