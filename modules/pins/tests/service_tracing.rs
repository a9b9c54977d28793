//! Service operations run cleanly under an installed subscriber.

mod common;

use std::sync::Arc;

use common::*;
use pins::contract::model::{TagOp, ToggleAction};
use tracing_test::traced_test;

#[traced_test]
#[tokio::test]
async fn get_pin_emits_spans() {
    let service = service_for(Arc::new(MockPinsRepository::with_pin(pin_three())));

    let result = service.get_pin("3", &me()).await;

    assert!(result.is_ok());
}

#[traced_test]
#[tokio::test]
async fn pin_toggle_emits_spans() {
    let service = service_for(Arc::new(MockPinsRepository::with_pin(pin_three())));

    let saved = service.pin_toggle("3", &me(), ToggleAction::Save).await;
    let again = service.pin_toggle("3", &me(), ToggleAction::Save).await;
    let unsaved = service.pin_toggle("3", &me(), ToggleAction::Unsave).await;

    assert!(saved.is_ok());
    assert!(again.is_err());
    assert!(unsaved.is_ok());
}

#[traced_test]
#[tokio::test]
async fn add_comment_emits_spans() {
    let service = service_for(Arc::new(MockPinsRepository::with_pin(pin_three())));

    let result = service.add_comment("3", &me(), "traced".into()).await;

    assert!(result.is_ok());
}

#[traced_test]
#[tokio::test]
async fn failed_catalog_write_is_only_logged() {
    let service = service_with(
        Arc::new(MockPinsRepository::with_pin(pin_three())),
        Arc::new(FailingCatalog),
    );

    let result = service
        .update_tags("3", &other(), TagOp::Add("landscape".into()))
        .await;
    service.shutdown().await;

    assert!(result.is_ok());
}

#[traced_test]
#[tokio::test]
async fn rejected_tag_change_emits_spans() {
    let service = service_for(Arc::new(MockPinsRepository::with_pin(pin_three())));

    let result = service
        .update_tags("3", &me(), TagOp::Remove("t1".into()))
        .await;

    assert!(result.is_err());
}
