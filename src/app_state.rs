use crate::config::Config;
use crate::slack::SlackApi;

#[derive(Clone)]
pub struct AppState {
    pub slack_api: SlackApi,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            slack_api: SlackApi::new(config.slack_webhook_url.clone()),
        }
    }
}
