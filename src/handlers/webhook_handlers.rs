use crate::app_state::AppState;
use crate::monzo::{EventType, WebhookPayload};
use crate::slack::SlackMessagePayload;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{error, info};

/// Receives Monzo webhooks. Monzo gets an `OK` as soon as the body could be decoded,
/// whatever happens when posting to Slack.
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    info!("received /webhook");

    let payload = match WebhookPayload::decode(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Could not decode payload from Monzo webhook: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Could not decode");
        }
    };

    match payload.event_type() {
        Some(EventType::TransactionCreated) => {
            let message = SlackMessagePayload::new_transaction(&payload.data);
            if let Err(e) = app_state.slack_api.notify(&message).await {
                error!("Could not post message to Slack: {}", e);
            }
        }
        None => {
            info!(
                "Received webhook was not {}, it was: {}",
                EventType::TransactionCreated,
                payload.type_field
            );
        }
    }

    (StatusCode::OK, "OK")
}
