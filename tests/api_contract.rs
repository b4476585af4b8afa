//! Public HTTP contract of the gateway, driven through the router

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tower::ServiceExt;

use onthedeal_gateway::gateway::build_router;
use onthedeal_gateway::store::MemoryStore;
use onthedeal_gateway::{
    AppState, CommissionRates, Page, PageStatus, PageStore, SettingsStore, StoreError,
};

/// Settings backend whose rates fail every other read
struct FlakySettings {
    calls: AtomicUsize,
    rates: CommissionRates,
}

#[async_trait]
impl SettingsStore for FlakySettings {
    async fn commission_rates(&self) -> Result<Option<CommissionRates>, StoreError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
            return Err(StoreError::Unavailable("connection reset".into()));
        }
        Ok(Some(self.rates))
    }
}

fn page(id: i64, slug: &str, status: &str) -> Page {
    let ts = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    Page {
        id,
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        content: format!("<h1>{slug}</h1>"),
        status: PageStatus::from(status),
        meta_title: Some(format!("{slug} | OnTheDeal")),
        meta_description: None,
        created_at: ts,
        updated_at: ts,
    }
}

fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new().with_pages([
        page(1, "about", "published"),
        page(2, "seller-guide", "draft"),
        page(3, "old-terms", "archived"),
    ]))
}

async fn call(app: &Router, uri: &str) -> (StatusCode, serde_json::Value, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value, bytes)
}

#[tokio::test]
async fn published_page_is_returned_unchanged() {
    let store = seeded_store();
    let expected = store.find_by_slug("about").await.unwrap().unwrap();
    let app = build_router(AppState::from_store(store));

    let (status, body, _) = call(&app, "/api/pages?slug=about").await;
    assert_eq!(status, StatusCode::OK);
    let got: Page = serde_json::from_value(body["page"].clone()).unwrap();
    assert_eq!(got, expected);
}

#[tokio::test]
async fn non_draft_statuses_are_public() {
    let app = build_router(AppState::from_store(seeded_store()));
    let (status, body, _) = call(&app, "/api/pages?slug=old-terms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["status"], "archived");
}

#[tokio::test]
async fn draft_is_indistinguishable_from_missing() {
    let app = build_router(AppState::from_store(seeded_store()));
    let (draft_status, _, draft_bytes) = call(&app, "/api/pages?slug=seller-guide").await;
    for slug in ["missing", "SELLER-GUIDE", "seller-guide-2"] {
        let (status, body, bytes) = call(&app, &format!("/api/pages?slug={slug}")).await;
        assert_eq!(status, draft_status);
        assert_eq!(bytes, draft_bytes);
        assert_eq!(body, serde_json::json!({ "error": "Page not found" }));
    }
}

#[tokio::test]
async fn missing_slug_is_rejected_even_when_store_is_down() {
    let store = seeded_store();
    store.set_fail_pages(true);
    let app = build_router(AppState::from_store(store));

    for uri in ["/api/pages", "/api/pages?slug=", "/api/pages?other=about"] {
        let (status, body, _) = call(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, serde_json::json!({ "error": "Slug required" }));
    }
}

#[tokio::test]
async fn preview_scales_and_falls_back() {
    let rates = CommissionRates::new(Decimal::new(45, 3), Decimal::new(15, 3)).unwrap();
    let settings = Arc::new(FlakySettings {
        calls: AtomicUsize::new(0),
        rates,
    });
    let app = build_router(AppState::new(seeded_store(), settings.clone()));

    // first read succeeds: 0.045 -> 4.5, 0.015 -> 1.5
    let (status, body, _) = call(&app, "/api/commission/preview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "firstRate": 4.5, "repeatRate": 1.5 }));

    // second read fails: defaults, still 200
    let (status, body, _) = call(&app, "/api/commission/preview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "firstRate": 3.0, "repeatRate": 1.0 }));

    assert_eq!(settings.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = build_router(AppState::from_store(seeded_store()));
    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
