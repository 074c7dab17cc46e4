/*!
Structs related to Monzo's webhook requests.

See https://docs.monzo.com/#webhooks
*/

use super::{default_on_invalid, lenient_datetime, null_as_default};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/**
Body of a webhook request sent by Monzo.

Only `type` is required. `data` is decoded as much as possible: every field
falls back to its default when absent or `null`, and fields we don't read
also fall back when they have an unexpected shape.
*/
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookPayload {
    /// Kind of event, ex: "transaction.created"
    #[serde(rename = "type")]
    pub type_field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: TransactionData,
}

impl WebhookPayload {
    /// Decodes the first JSON value of a request body, anything after it is ignored.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
            // empty body, let serde_json report the EOF
            .unwrap_or_else(|| serde_json::from_slice(body))
    }

    /// `None` when the event is of a kind we don't handle.
    pub fn event_type(&self) -> Option<EventType> {
        self.type_field.parse().ok()
    }
}

/// Webhook events this service acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum EventType {
    /// Emitted each time a new transaction is created in a user's account.
    #[strum(serialize = "transaction.created")]
    TransactionCreated,
}

/**
Structure representing a Monzo Transaction, as carried by a webhook event.

See https://docs.monzo.com/#transactions
*/
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionData {
    /// ID of the transaction, ex: "tx_00008zIcpb1TB4yeIFXMzx"
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created: Option<DateTime<Utc>>,

    /// Label of the transaction, as seen on the bank statement.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Amount in minor units of `currency`. Negative for a debit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,

    /// ISO 4217 code, ex: "GBP"
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub currency: String,

    /// Either a merchant id or an expanded merchant object, passed through as-is.
    #[serde(default)]
    pub merchant: Value,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub notes: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub metadata: Metadata,

    /// Balance of the account after this transaction, in minor units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_balance: i64,

    /// Passed through as-is.
    #[serde(default)]
    pub attachments: Value,

    /// ex: "eating_out"
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    /// True for top-ups.
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub is_load: bool,

    /// Not set until the transaction settles.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub settled: Option<DateTime<Utc>>,

    /// Amount in minor units of `local_currency`, differs from `amount` abroad.
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub local_amount: i64,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub local_currency: String,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub account_id: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub counterparty: Counterparty,

    /// Payment scheme, ex: "mastercard", "payport_faster_payments"
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub scheme: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub dedupe_id: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub originator: bool,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub include_in_spending: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub notes: String,
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub p2p_transfer_id: String,
    /// Any other key Monzo attaches.
    #[serde(flatten)]
    pub other: HashMap<String, Value>,
}

/// Other party of a peer to peer transfer.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Counterparty {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub number: String,
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub user_id: String,
}
