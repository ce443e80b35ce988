/// Contract tests for event wiring in the shell script
/// Handlers must be registered explicitly; no inline onclick attributes.

fn get_app_js() -> String {
    include_str!("../../src/web/static/app.js").to_string()
}

fn get_index_html() -> String {
    include_str!("../../src/web/static/index.html").to_string()
}

#[test]
fn no_inline_event_handlers() {
    assert!(
        !get_index_html().contains("onclick="),
        "index.html should not use inline onclick handlers"
    );
    assert!(
        !get_app_js().contains("onclick="),
        "app.js should not assign inline onclick handlers"
    );
}

#[test]
fn handlers_registered_explicitly() {
    let js = get_app_js();
    assert!(
        js.contains("addEventListener"),
        "events should be wired via addEventListener"
    );
    assert!(
        js.contains("data-action"),
        "fragment controls should be dispatched via data-action payloads"
    );
}

#[test]
fn url_is_encoded_before_request() {
    assert!(
        get_app_js().contains("encodeURIComponent"),
        "the checked URL must be encoded as a query parameter"
    );
}

#[test]
fn loading_indicator_shown_before_check() {
    let js = get_app_js();
    assert!(
        js.contains(r#"class="loading""#),
        "a loading indicator should replace the result region during a check"
    );
    assert!(js.contains("spinner"), "loading markup should show a spinner");
}

#[test]
fn saved_list_refreshed_on_page_load() {
    let js = get_app_js();
    assert!(
        js.contains("DOMContentLoaded"),
        "saved websites should load on page load"
    );
}
