/*!
Structs of the messages posted to a Slack incoming webhook.

See https://api.slack.com/reference/messaging/attachments
*/

use crate::monzo::TransactionData;
use serde::{Deserialize, Serialize};

pub const BOT_USERNAME: &str = "MoneyBot";
pub const BOT_ICON_EMOJI: &str = "money_bag";
pub const ATTACHMENT_TITLE: &str = "New Transaction!";
pub const ATTACHMENT_COLOR: &str = "#36a64f";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessagePayload {
    pub username: String,
    pub icon_emoji: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that can't render attachments.
    pub fallback: String,
    /// Colour of the bar on the left, ex: "#36a64f"
    pub color: String,
    pub title: String,
    pub text: String,
    pub fields: Vec<AttachmentField>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    /// Whether the field is narrow enough to sit next to another one.
    pub short: bool,
}

impl AttachmentField {
    fn short(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
            short: true,
        }
    }
}

impl SlackMessagePayload {
    /// Message announcing a newly created transaction.
    pub fn new_transaction(transaction: &TransactionData) -> Self {
        Self {
            username: BOT_USERNAME.to_string(),
            icon_emoji: BOT_ICON_EMOJI.to_string(),
            text: format!(
                "You have received a new transaction. Description: {}",
                transaction.description
            ),
            attachments: generate_attachments(transaction),
        }
    }
}

/// Always a single attachment, with the amount, balance and category fields in that order.
pub fn generate_attachments(transaction: &TransactionData) -> Vec<Attachment> {
    vec![Attachment {
        fallback: transaction.description.clone(),
        color: ATTACHMENT_COLOR.to_string(),
        title: ATTACHMENT_TITLE.to_string(),
        text: transaction.description.clone(),
        fields: vec![
            AttachmentField::short("Amount", format_pennies(transaction.amount)),
            AttachmentField::short(
                "Current Balance",
                format_pennies(transaction.account_balance),
            ),
            AttachmentField::short("Category", transaction.category.clone()),
        ],
    }]
}

fn format_pennies(amount: i64) -> String {
    format!("{amount} pennies")
}
