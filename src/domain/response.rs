use crate::domain::value::GatewayTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// Gateway message id (`sms_id`).
    pub id: String,
    /// Number of SMS parts the message was split into (`sms_count`).
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A message read from the gateway inbox.
pub struct ReceivedMessage {
    text: String,
    number: String,
    received_at: GatewayTime,
}

impl ReceivedMessage {
    pub fn new(text: impl Into<String>, number: impl Into<String>, received_at: GatewayTime) -> Self {
        Self {
            text: text.into(),
            number: number.into(),
            received_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn received_at(&self) -> GatewayTime {
        self.received_at
    }
}
