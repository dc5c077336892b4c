use serde::Deserialize;

use super::decode::{TransportError, parse};
use crate::domain::{GatewayTime, ReceivedMessage};

pub const DELETE_FIELD: &str = "delete";

#[derive(Debug, Deserialize)]
struct InboxXmlResponse {
    // Required so that a document without `err` fails to parse.
    #[allow(dead_code)]
    err: i32,
    #[serde(default)]
    inbox: Option<InboxSection>,
}

#[derive(Debug, Default, Deserialize)]
struct InboxSection {
    #[serde(default)]
    delivery_sms: Option<DeliverySms>,
}

#[derive(Debug, Default, Deserialize)]
struct DeliverySms {
    #[serde(default)]
    item: Vec<InboxItem>,
}

#[derive(Debug, Deserialize)]
struct InboxItem {
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

pub fn encode_inbox_query(delete: bool) -> Vec<(String, String)> {
    vec![(DELETE_FIELD.to_owned(), u8::from(delete).to_string())]
}

/// Items without a number are skipped; an item with an unparsable time fails the whole call.
pub fn decode_inbox_xml_response(xml: &str) -> Result<Vec<ReceivedMessage>, TransportError> {
    let parsed: InboxXmlResponse = parse(xml)?;
    let items = parsed
        .inbox
        .and_then(|inbox| inbox.delivery_sms)
        .map(|delivery| delivery.item)
        .unwrap_or_default();

    let mut messages = Vec::with_capacity(items.len());
    for item in items {
        let number = item.number.unwrap_or_default();
        if number.trim().is_empty() {
            tracing::debug!("skipping inbox item without a number");
            continue;
        }
        let received_at = GatewayTime::parse(item.time.as_deref().unwrap_or_default())?;
        messages.push(ReceivedMessage::new(
            item.message.unwrap_or_default(),
            number,
            received_at,
        ));
    }

    Ok(messages)
}
