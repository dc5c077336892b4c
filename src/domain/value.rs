use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Connect account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// Query field name used by SMS Connect (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Connect account password.
///
/// The password is never sent over the wire; it only feeds the request hash.
///
/// Invariant: non-empty after trimming.
pub struct Password(String);

impl Password {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the trimmed password.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Login/password pair the client signs every request with.
pub struct Credentials {
    login: Login,
    password: Password,
}

impl Credentials {
    /// Validate both parts; whitespace-only values are rejected.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to the gateway (`number`).
///
/// Trimmed but otherwise unvalidated; the gateway answers error 10 for numbers it rejects.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Field name used by SMS Connect (`number`).
    pub const FIELD: &'static str = "number";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_owned())
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Preserved as provided, whitespace included. Empty text is left for the gateway to reject (error 11).
pub struct MessageText(String);

impl MessageText {
    /// Field name used by SMS Connect (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Sender id (`sender_id`). Must be enabled in the SMS Connect account.
pub struct SenderId(String);

impl SenderId {
    /// Field name used by SMS Connect (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Delivery report flag (`delivery_report`), passed through verbatim.
pub struct DeliveryReport(String);

impl DeliveryReport {
    /// Field name used by SMS Connect (`delivery_report`).
    pub const FIELD: &'static str = "delivery_report";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Timestamp in the gateway's fixed `YYYYMMDDTHHmmss` format.
///
/// Used for the request `time`, the scheduled `when` of an outgoing message,
/// and the `time` of a received message. The gateway works in its local time,
/// so no time zone is carried.
pub struct GatewayTime(NaiveDateTime);

impl GatewayTime {
    /// `chrono` format string of the wire representation.
    pub const FORMAT: &'static str = "%Y%m%dT%H%M%S";

    /// Current local system time.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Parse the wire representation, e.g. `20240615T093000`. Surrounding whitespace is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTime {
            input: input.to_owned(),
        };
        // chrono skips whitespace before numeric fields, so the shape is checked up front.
        let shape_ok = input.len() == 15
            && input
                .bytes()
                .enumerate()
                .all(|(idx, b)| if idx == 8 { b == b'T' } else { b.is_ascii_digit() });
        if !shape_ok {
            return Err(invalid());
        }
        NaiveDateTime::parse_from_str(input, Self::FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Underlying date and time.
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for GatewayTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for GatewayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
