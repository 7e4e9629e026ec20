use axum::http::StatusCode;
use tower::util::ServiceExt;

use super::harness::{TestHarness, body_string, form_request, get_request, location};

#[tokio::test]
async fn index_lists_all_entries() {
    let harness = TestHarness::with_python();
    harness.state.store.save_entry("Rust", "# Rust").expect("seed");

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/"))
        .await
        .expect("index response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("href=\"/wiki/Python\""));
    assert!(body.contains("href=\"/wiki/Rust\""));
    assert!(body.contains("action=\"/search\""));
}

#[tokio::test]
async fn entry_view_renders_markdown_as_html() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/wiki/Python"))
        .await
        .expect("entry response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<h1>Hello</h1>"), "got: {}", body);
}

#[tokio::test]
async fn entry_view_lookup_ignores_case() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/wiki/python"))
        .await
        .expect("entry response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    // Canonical stored casing shows in the page heading
    assert!(body.contains("<h1>Python</h1>"));
}

#[tokio::test]
async fn missing_entry_returns_404_with_suggestions() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/wiki/pyt"))
        .await
        .expect("entry response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
    assert!(body.contains("href=\"/wiki/Python\""));
}

#[tokio::test]
async fn search_exact_match_renders_the_entry() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/search", "title=python"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<h1>Hello</h1>"));
}

#[tokio::test]
async fn search_substring_lists_related_titles() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/search", "title=pyt"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Search results"));
    assert!(body.contains("href=\"/wiki/Python\""));
}

#[tokio::test]
async fn blank_search_redirects_to_index() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/search", "title="))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn search_get_redirects_to_index() {
    let harness = TestHarness::setup();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/search"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn create_saves_entry_and_redirects_with_notice() {
    let harness = TestHarness::setup();

    let form = harness
        .router
        .clone()
        .oneshot(get_request("/create"))
        .await
        .expect("create form");
    assert_eq!(form.status(), StatusCode::OK);
    assert!(body_string(form).await.contains("name=\"title\""));

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/create", "title=Rust&text=%23+Borrowing"))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/Rust?notice=created");

    let saved = harness
        .state
        .store
        .get_entry("rust")
        .expect("get")
        .expect("present");
    assert_eq!(saved.content, "# Borrowing");

    let view = harness
        .router
        .clone()
        .oneshot(get_request("/wiki/Rust?notice=created"))
        .await
        .expect("view response");
    let body = body_string(view).await;
    assert!(body.contains("created successfully"));
}

#[tokio::test]
async fn create_duplicate_title_never_overwrites() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/create", "title=PYTHON&text=replacement"))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("already exists"));

    let existing = harness
        .state
        .store
        .get_entry("Python")
        .expect("get")
        .expect("present");
    assert_eq!(existing.content, "# Hello");
}

#[tokio::test]
async fn create_with_blank_fields_is_rejected() {
    let harness = TestHarness::setup();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/create", "title=&text="))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("required"));
    assert!(harness.state.store.list_entries().expect("list").is_empty());
}

#[tokio::test]
async fn create_preserves_input_on_duplicate_error() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/create", "title=Python&text=draft+text"))
        .await
        .expect("create response");
    let body = body_string(response).await;
    assert!(body.contains("value=\"Python\""));
    assert!(body.contains(">draft text</textarea>"));
}

#[tokio::test]
async fn edit_form_is_prepopulated() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/edit/Python"))
        .await
        .expect("edit form");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("># Hello</textarea>"), "got: {}", body);
}

#[tokio::test]
async fn edit_form_for_missing_entry_shows_error_note() {
    let harness = TestHarness::setup();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/edit/Ghost"))
        .await
        .expect("edit form");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("does not exist"));
    assert!(body.contains("<textarea"));
}

#[tokio::test]
async fn edit_with_blank_text_never_overwrites() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(form_request("/edit/Python", "text="))
        .await
        .expect("edit response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("cannot be empty"));

    let entry = harness
        .state
        .store
        .get_entry("Python")
        .expect("get")
        .expect("present");
    assert_eq!(entry.content, "# Hello");
}

#[tokio::test]
async fn edit_replaces_content_under_canonical_title() {
    let harness = TestHarness::with_python();

    // Reached via a lower-cased URL; the stored casing must win
    let response = harness
        .router
        .clone()
        .oneshot(form_request("/edit/python", "text=%23+Updated"))
        .await
        .expect("edit response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/Python?notice=updated");

    let entry = harness
        .state
        .store
        .get_entry("Python")
        .expect("get")
        .expect("present");
    assert_eq!(entry.content, "# Updated");
    assert_eq!(harness.state.store.list_entries().expect("list").len(), 1);
}

#[tokio::test]
async fn random_redirects_to_a_listed_entry() {
    let harness = TestHarness::with_python();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/random"))
        .await
        .expect("random response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/Python");
}

#[tokio::test]
async fn random_on_empty_wiki_is_a_defined_404() {
    let harness = TestHarness::setup();

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/random"))
        .await
        .expect("random response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
