//! Transport layer: request signing and XML wire-format details.

mod auth;
mod decode;
mod inbox;
mod queue;
mod send_sms;

pub use auth::AuthData;
pub use decode::{Decoded, TransportError, decode, error_code};
pub use inbox::{decode_inbox_xml_response, encode_inbox_query};
pub use queue::{MessageQueue, XML_FIELD};
pub use send_sms::{decode_send_sms_xml_response, encode_send_sms_query};
