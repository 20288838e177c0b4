//! Enrichment contract tests: best-effort fetch, tolerant field extraction,
//! and image URL resolution.

mod harness;

use std::sync::Arc;

use harness::*;
use showup_common::ChainSignal;
use showup_projector::{Enricher, DEFAULT_EVENT_IMAGE};
use showup_store::MemoryStore;

#[tokio::test]
async fn fetch_failure_yields_no_metadata() {
    let enricher = Enricher::new(Arc::new(FailingFetcher), "https://ipfs.io/ipfs");
    assert_eq!(enricher.enrich("Qm123").await, None);
}

#[tokio::test]
async fn invalid_json_yields_no_metadata() {
    let enricher = Enricher::new(
        Arc::new(StaticFetcher(b"not json at all".to_vec())),
        "https://ipfs.io/ipfs",
    );
    assert_eq!(enricher.enrich("Qm123").await, None);
}

#[tokio::test]
async fn non_object_json_yields_no_metadata() {
    let enricher = Enricher::new(
        Arc::new(StaticFetcher(b"[1, 2, 3]".to_vec())),
        "https://ipfs.io/ipfs",
    );
    assert_eq!(enricher.enrich("Qm123").await, None);
}

#[tokio::test]
async fn string_fields_are_copied_and_others_skipped() {
    let document = serde_json::json!({
        "name": "Rustconf Afterparty",
        "description": 42,            // wrong type: skipped
        "link": null,                 // wrong type: skipped
        "image": "/banner.png",
        "venue": "ignored",           // unknown field: ignored
    });
    let enricher = Enricher::new(
        Arc::new(StaticFetcher(document.to_string().into_bytes())),
        "https://ipfs.io/ipfs",
    );

    let metadata = enricher.enrich("Qm123").await.unwrap();
    assert_eq!(metadata.name.as_deref(), Some("Rustconf Afterparty"));
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.link, None);
    assert_eq!(metadata.image.as_deref(), Some("/banner.png"));
}

#[tokio::test]
async fn image_url_is_gateway_cid_then_path() {
    let enricher = Enricher::new(Arc::new(FailingFetcher), "https://ipfs.io/ipfs/");
    assert_eq!(
        enricher.image_url("Qm123", Some("/banner.png")),
        "https://ipfs.io/ipfs/Qm123/banner.png"
    );
    assert_eq!(enricher.image_url("Qm123", None), DEFAULT_EVENT_IMAGE);
}

#[tokio::test]
async fn enriched_event_carries_metadata() {
    let document = serde_json::json!({
        "name": "Block Party",
        "description": "Bring your own validator",
        "link": "https://example.org/party",
        "image": "/party.png",
    });
    let store = Arc::new(MemoryStore::new());
    let pipeline = pipeline_with(
        store,
        Arc::new(StaticFetcher(document.to_string().into_bytes())),
    );

    let id = event_id(1);
    let batch = vec![ChainSignal::new(1, 0, &created(id, address(0xAA), 10))];
    pipeline.process(&batch).await.unwrap();

    let event = pipeline.projector().event(&id).await.unwrap().unwrap();
    assert_eq!(event.name.as_deref(), Some("Block Party"));
    assert_eq!(event.description.as_deref(), Some("Bring your own validator"));
    assert_eq!(event.link.as_deref(), Some("https://example.org/party"));
    assert_eq!(event.image_url, "https://ipfs.io/ipfs/Qm123/party.png");
}

#[tokio::test]
async fn metadata_without_image_keeps_placeholder() {
    let document = serde_json::json!({ "name": "No Banner" });
    let store = Arc::new(MemoryStore::new());
    let pipeline = pipeline_with(
        store,
        Arc::new(StaticFetcher(document.to_string().into_bytes())),
    );

    let id = event_id(1);
    let batch = vec![ChainSignal::new(1, 0, &created(id, address(0xAA), 10))];
    pipeline.process(&batch).await.unwrap();

    let event = pipeline.projector().event(&id).await.unwrap().unwrap();
    assert_eq!(event.name.as_deref(), Some("No Banner"));
    assert_eq!(event.image_url, DEFAULT_EVENT_IMAGE);
}
