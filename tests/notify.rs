mod common;

use axum::http::StatusCode;
use common::{STUB_ERROR_BODY, StubSlack, unreachable_url};
use monzo_slack_connector::monzo::TransactionData;
use monzo_slack_connector::slack::{NotifyError, SlackApi, SlackMessagePayload};

fn coffee_shop_message() -> SlackMessagePayload {
    SlackMessagePayload::new_transaction(&TransactionData {
        description: "Coffee Shop".to_string(),
        amount: 350,
        account_balance: 120000,
        category: "eating_out".to_string(),
        ..Default::default()
    })
}

#[tokio::test]
async fn ok_from_slack_is_success() {
    let stub = StubSlack::answering(StatusCode::OK);
    let api = SlackApi::new(stub.serve().await);

    let result = api.notify(&coffee_shop_message()).await;

    assert!(result.is_ok(), "unexpected error: {:?}", result);
    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0["content-type"], "application/json");
    assert_eq!(received[0].0["cache-control"], "no-cache");
    assert_eq!(
        received[0].1,
        serde_json::to_value(coffee_shop_message()).unwrap()
    );
}

#[tokio::test]
async fn other_success_codes_are_not_accepted() {
    let stub = StubSlack::answering(StatusCode::NO_CONTENT);
    let api = SlackApi::new(stub.serve().await);

    let result = api.notify(&coffee_shop_message()).await;

    match result {
        Err(NotifyError::UnexpectedStatus { status, .. }) => {
            assert_eq!(status, StatusCode::NO_CONTENT)
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
    assert_eq!(stub.received().len(), 1);
}

#[tokio::test]
async fn error_status_carries_the_response_body() {
    let stub = StubSlack::answering(StatusCode::INTERNAL_SERVER_ERROR);
    let api = SlackApi::new(stub.serve().await);

    let result = api.notify(&coffee_shop_message()).await;

    match result {
        Err(NotifyError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, STUB_ERROR_BODY);
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_slack_is_a_transport_error() {
    let api = SlackApi::new(unreachable_url().await);

    let result = api.notify(&coffee_shop_message()).await;

    assert!(
        matches!(result, Err(NotifyError::Transport(_))),
        "expected Transport, got {:?}",
        result
    );
}
