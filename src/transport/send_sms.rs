use serde::Deserialize;

use super::decode::{TransportError, parse};
use crate::domain::{OutboundMessage, SendSmsResponse};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsXmlResponse {
    // Required so that a document without `err` fails to parse.
    #[allow(dead_code)]
    err: i32,
    sms_id: String,
    sms_count: u32,
}

pub fn encode_send_sms_query(message: &OutboundMessage) -> Vec<(String, String)> {
    message
        .fields()
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

pub fn decode_send_sms_xml_response(xml: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsXmlResponse = parse(xml)?;
    Ok(SendSmsResponse {
        id: parsed.sms_id.trim().to_owned(),
        count: parsed.sms_count,
    })
}
