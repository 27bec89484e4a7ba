/* src/server/adapter/axum/src/tests.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use newsdesk_server::{CategoryNode, Locale, NewsdeskServer, Taxonomy, Title};
use tower::ServiceExt;

use super::*;

fn node(slug: &str, ko: &str, en: &str) -> CategoryNode {
  CategoryNode::new(slug, Title::localized(ko, en), slug)
}

fn router() -> axum::Router {
  let taxonomy = Taxonomy::from_nodes(vec![
    node("report", "리포트", "Report")
      .with_children(vec![node("ha-raw-material", "HA원료", "HA Raw Material")]),
    node("economic-trends", "경제 동향", "Economic Trends").with_children(vec![
      node("private-consumption", "민간소비", "Private Consumption"),
      node("government-spending", "정부지출", "Government Spending").with_children(vec![node(
        "infrastructure-investment",
        "시설투자",
        "Infrastructure Investment",
      )]),
    ]),
  ]);
  NewsdeskServer::new(Arc::new(taxonomy)).into_axum_router().unwrap()
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
  let resp = router.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
  let status = resp.status();
  let location =
    resp.headers().get(header::LOCATION).map(|v| v.to_str().unwrap().to_string());
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
  (status, location, json)
}

#[test]
fn into_axum_router_builds_without_panic() {
  let server = NewsdeskServer::new(Arc::new(Taxonomy::from_nodes(Vec::new())));
  let _router = server.into_axum_router().unwrap();
}

#[test]
fn strict_server_with_bad_data_fails_to_build() {
  let taxonomy = Taxonomy::from_nodes(vec![node("a", "가", "A"), node("a", "나", "B")]);
  let server = NewsdeskServer::new(Arc::new(taxonomy)).strict(true);
  assert!(server.into_axum_router().is_err());
}

#[tokio::test]
async fn legacy_label_gets_permanent_redirect() {
  let (status, location, _) =
    get(router(), "/%EA%B2%BD%EC%A0%9C-%EB%8F%99%ED%96%A5/private-consumption?page=2").await;
  assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
  assert_eq!(location.as_deref(), Some("/economic-trends/private-consumption?page=2"));
}

#[tokio::test]
async fn misplaced_leaf_redirect_beyond_route_depth() {
  let (status, location, _) = get(router(), "/a/b/c/ha-raw-material").await;
  assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
  assert_eq!(location.as_deref(), Some("/report/ha-raw-material"));
}

#[tokio::test]
async fn canonical_page_returns_model() {
  let (status, location, json) =
    get(router(), "/economic-trends/government-spending").await;
  assert_eq!(status, StatusCode::OK);
  assert!(location.is_none());
  let data = &json["data"];
  assert_eq!(data["url"], "/economic-trends/government-spending");
  assert_eq!(data["title"], "정부지출");
  assert_eq!(data["breadcrumb"][0]["url"], "/economic-trends");
  assert_eq!(data["breadcrumb"][1]["title"], "정부지출");
  assert_eq!(
    data["children"][0]["url"],
    "/economic-trends/government-spending/infrastructure-investment"
  );
  assert_eq!(data["resolution"]["subcategory"]["slug"], "government-spending");
}

#[tokio::test]
async fn page_titles_follow_lang_query() {
  let (_, _, json) = get(router(), "/report?lang=en").await;
  assert_eq!(json["data"]["title"], "Report");
  assert_eq!(json["data"]["locale"], Locale::En.as_str());
}

#[tokio::test]
async fn unknown_page_is_not_found() {
  let (status, _, json) = get(router(), "/report/unknown").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json["ok"], false);
  assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn api_lists_categories_and_params() {
  let (status, _, json) = get(router(), "/api/categories").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["data"].as_array().unwrap().len(), 2);
  assert_eq!(json["data"][1]["subcategories"][1]["slug"], "government-spending");

  let (_, _, json) = get(router(), "/api/static-params").await;
  let params = json["data"].as_array().unwrap();
  assert_eq!(params.len(), 4);
  assert_eq!(
    params[0],
    serde_json::json!({"mainCategory": "report", "subcategory": "ha-raw-material"})
  );
}

#[tokio::test]
async fn api_category_by_id() {
  let (status, _, json) = get(router(), "/api/categories/private-consumption").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["data"]["title"]["en"], "Private Consumption");

  let (status, _, json) = get(router(), "/api/categories/nonexistent-id").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json["error"]["message"], "Category 'nonexistent-id' not found");
}

#[tokio::test]
async fn reserved_prefix_is_never_redirected() {
  let (status, location, _) = get(router(), "/api/%EB%A6%AC%ED%8F%AC%ED%8A%B8").await;
  assert!(location.is_none());
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn error_envelope_falls_back_to_internal_status() {
  use axum::response::IntoResponse;

  let err = newsdesk_server::NewsdeskError::new("BROKEN", "bad", 42);
  let resp = crate::error::AxumError(err).into_response();
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
  assert_eq!(json, serde_json::json!({"ok": false, "error": {"code": "BROKEN", "message": "bad"}}));
}
