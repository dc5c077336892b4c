use crate::domain::value::{DeliveryReport, GatewayTime, MessageText, PhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One outgoing SMS, used both for an immediate `send_sms` and for queue entries.
///
/// Values are passed to the gateway as given; it answers with error codes 10
/// (invalid recipient) or 11 (empty text) instead of the client guessing.
pub struct OutboundMessage {
    pub number: PhoneNumber,
    pub message: MessageText,
    /// Scheduled send time; `None` sends immediately.
    pub send_at: Option<GatewayTime>,
    pub sender_id: Option<SenderId>,
    pub delivery_report: Option<DeliveryReport>,
}

impl OutboundMessage {
    /// Field name of the scheduled send time (`when`).
    pub const WHEN_FIELD: &'static str = "when";

    pub fn new(number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            number: PhoneNumber::new(number),
            message: MessageText::new(message),
            ..Default::default()
        }
    }

    pub fn send_at(mut self, time: GatewayTime) -> Self {
        self.send_at = Some(time);
        self
    }

    pub fn sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = Some(SenderId::new(sender_id));
        self
    }

    pub fn delivery_report(mut self, delivery_report: impl Into<String>) -> Self {
        self.delivery_report = Some(DeliveryReport::new(delivery_report));
        self
    }

    /// The five wire fields in their fixed order; absent values become empty strings.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            (PhoneNumber::FIELD, self.number.raw().to_owned()),
            (MessageText::FIELD, self.message.as_str().to_owned()),
            (
                Self::WHEN_FIELD,
                self.send_at.map(|time| time.to_string()).unwrap_or_default(),
            ),
            (
                SenderId::FIELD,
                self.sender_id
                    .as_ref()
                    .map(|sender| sender.as_str().to_owned())
                    .unwrap_or_default(),
            ),
            (
                DeliveryReport::FIELD,
                self.delivery_report
                    .as_ref()
                    .map(|report| report.as_str().to_owned())
                    .unwrap_or_default(),
            ),
        ]
    }
}
