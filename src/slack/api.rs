//! Struct and methods to post messages to a Slack incoming webhook

use super::SlackMessagePayload;
use reqwest::StatusCode;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("could not reach Slack: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Slack error code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

#[derive(Clone)]
pub struct SlackApi {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackApi {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    /// Posts the message once. Anything but a 200 from Slack is an error.
    pub async fn notify(&self, message: &SlackMessagePayload) -> Result<(), NotifyError> {
        debug!("Posting message to Slack: {:?}", message.text);

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::UnexpectedStatus { status, body });
        }

        info!("Message posted to Slack.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = NotifyError::UnexpectedStatus {
            status: StatusCode::NOT_FOUND,
            body: "no_service".to_string(),
        };
        assert_eq!(err.to_string(), "Slack error code 404 Not Found: no_service");
    }
}
