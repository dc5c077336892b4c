//! Typed Rust client for the SMS Brána "SMS Connect" HTTP API.
//!
//! The crate follows the usual split: a domain layer of strong types, a
//! transport layer for request signing and the XML wire format, and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smsbrana::{Credentials, OutboundMessage, SmsBranaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsbrana::SmsBranaError> {
//!     let credentials = Credentials::new("login", "password")
//!         .map_err(smsbrana::SmsBranaError::InvalidCredentials)?;
//!     let mut client = SmsBranaClient::new(credentials);
//!
//!     let sent = client
//!         .send(&OutboundMessage::new("+420777000111", "hello"))
//!         .await?;
//!     println!("sent {} in {} part(s)", sent.id, sent.count);
//!
//!     client.add_sms(OutboundMessage::new("+420777000222", "queued"));
//!     let _answer = client.send_all_sms().await?;
//!
//!     for message in client.inbox(true).await? {
//!         println!("{}: {}", message.number(), message.text());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Action, SmsBranaClient, SmsBranaClientBuilder, SmsBranaError};
pub use domain::{
    Credentials, DeliveryReport, ErrorCode, GatewayTime, KnownErrorCode, Login, MessageText,
    OutboundMessage, Password, PhoneNumber, ReceivedMessage, SendSmsResponse, SenderId,
    ValidationError, describe,
};
