//! Domain layer: strong types with validation and invariants (no I/O).

mod error_code;
mod request;
mod response;
mod validation;
mod value;

pub use error_code::{ErrorCode, KnownErrorCode, describe};
pub use request::OutboundMessage;
pub use response::{ReceivedMessage, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{
    Credentials, DeliveryReport, GatewayTime, Login, MessageText, Password, PhoneNumber, SenderId,
};
